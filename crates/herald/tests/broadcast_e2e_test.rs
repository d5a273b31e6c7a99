use herald::{ApiKey, HeraldConfig, HeraldSettings, OPENING_FALLBACK, Topic, broadcast};
use serde_json::json;
use std::io::Write;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 40, "completion_tokens": 3, "total_tokens": 43}
    }))
}

fn config_for(
    openai: &MockServer,
    avatar: &MockServer,
    mut settings: HeraldSettings,
) -> HeraldConfig {
    settings.generation.api_base = Some(format!("{}/v1", openai.uri()));
    settings.delivery.url = Some(avatar.uri());
    settings
        .into_config(ApiKey::new(Some("sk-test".to_string())).expect("key"))
        .expect("config")
}

#[tokio::test]
async fn test_single_shot_delivers_generated_segment() {
    let openai = MockServer::start().await;
    let avatar = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "model": "gpt-4",
            "max_tokens": 150
        })))
        .respond_with(completion("Hello world."))
        .expect(1)
        .mount(&openai)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/receive-text"))
        .and(body_json(json!({"text": "Hello world."})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&avatar)
        .await;

    let config = config_for(&openai, &avatar, HeraldSettings::default());
    let report = broadcast(&config, vec![Topic::new("A", "a")])
        .await
        .expect("broadcast");

    assert_eq!(report.generations, 1);
    assert_eq!(report.deliveries, 1);
    assert_eq!(report.delivery_failures, 0);
}

#[tokio::test]
async fn test_failed_generation_delivers_fallback() {
    let openai = MockServer::start().await;
    let avatar = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(1)
        .mount(&openai)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/receive-text"))
        .and(body_json(json!({"text": OPENING_FALLBACK})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&avatar)
        .await;

    let config = config_for(&openai, &avatar, HeraldSettings::default());
    let report = broadcast(&config, vec![Topic::new("A", "a")])
        .await
        .expect("broadcast");

    assert_eq!(report.fallbacks, 1);
    assert_eq!(report.deliveries, 1);
}

#[tokio::test]
async fn test_continuous_run_from_settings_file() {
    let openai = MockServer::start().await;
    let avatar = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(completion("And now, the weather."))
        .expect(3)
        .mount(&openai)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/receive-text"))
        .and(body_json(json!({
            "text": "And now, the weather.",
            "backgroundImage": "https://example.com/studio.jpg"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&avatar)
        .await;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
[delivery]
background = "https://example.com/studio.jpg"

[schedule]
continuous = true
interval_secs = 0
rounds = 3
"#
    )
    .expect("write settings");

    let settings = HeraldSettings::from_file(file.path()).expect("settings");
    let config = config_for(&openai, &avatar, settings);
    let report = broadcast(&config, vec![Topic::new("A", "a")])
        .await
        .expect("broadcast");

    assert_eq!(report.generations, 3);
    assert_eq!(report.deliveries, 3);
    assert_eq!(report.sleeps, 2);
    assert!(!report.stopped_early);
}
