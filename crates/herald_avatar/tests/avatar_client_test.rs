use herald_avatar::{AvatarClient, DeliveryPayload};
use herald_core::DeliveryConfig;
use herald_error::{DeliveryErrorKind, HeraldErrorKind};
use herald_interface::SegmentSink;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, image: Option<&str>, background: Option<&str>) -> AvatarClient {
    let config = DeliveryConfig::builder()
        .base_url(server.uri())
        .image_url(image.map(str::to_string))
        .background_image(background.map(str::to_string))
        .build()
        .expect("config");
    AvatarClient::new(&config).expect("client")
}

#[tokio::test]
async fn test_deliver_posts_text_only_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/receive-text"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"text": "Hello world."})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None, None);
    assert!(client.deliver("Hello world.").await);
    assert_eq!(
        client.endpoint(),
        format!("{}/api/receive-text", server.uri())
    );
}

#[tokio::test]
async fn test_deliver_includes_configured_visuals() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/receive-text"))
        .and(body_json(json!({
            "text": "Markets rallied.",
            "imageUrl": "https://example.com/chart.png",
            "backgroundImage": "https://example.com/studio.jpg"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(
        &server,
        Some("https://example.com/chart.png"),
        Some("https://example.com/studio.jpg"),
    );
    assert!(client.deliver("Markets rallied.").await);
}

#[tokio::test]
async fn test_empty_image_reference_is_omitted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "text": "Hi",
            "backgroundImage": "bg.png"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some(""), Some("bg.png"));
    assert!(client.deliver("Hi").await);
}

#[tokio::test]
async fn test_server_error_is_failure_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None, None);
    assert!(!client.deliver("Hello").await);

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
}

#[tokio::test]
async fn test_only_200_counts_as_success() {
    for status in [201u16, 204, 301, 400, 404] {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = client_for(&server, None, None);
        assert!(!client.deliver("Hello").await, "status {status} must fail");
    }
}

#[tokio::test]
async fn test_send_reports_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("text required"))
        .mount(&server)
        .await;

    let client = client_for(&server, None, None);
    let err = client
        .send(&DeliveryPayload::new("", None, None))
        .await
        .unwrap_err();

    match err.kind() {
        HeraldErrorKind::Delivery(e) => assert_eq!(
            e.kind,
            DeliveryErrorKind::Status {
                status: 400,
                body: "text required".to_string()
            }
        ),
        other => panic!("expected delivery error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_failure() {
    let config = DeliveryConfig::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .expect("config");
    let client = AvatarClient::new(&config).expect("client");

    assert!(!client.deliver("Hello").await);

    let err = client
        .send(&client.payload("Hello"))
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        HeraldErrorKind::Delivery(e) if matches!(e.kind, DeliveryErrorKind::Transport(_))
    ));
}
