use async_trait::async_trait;
use herald_bot::{BroadcastState, Broadcaster};
use herald_core::{
    ApiKey, GenerateRequest, GenerateResponse, GenerationConfig, Output, Role, ScheduleConfig,
    Topic,
};
use herald_error::{HeraldResult, HttpError};
use herald_interface::{HeraldDriver, SegmentSink};
use herald_narrative::{CONTINUATION_FALLBACK, NarrativeGenerator, OPENING_FALLBACK};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

/// Mock driver that replays scripted replies, then numbered segments.
struct ScriptedDriver {
    replies: Mutex<VecDeque<Option<&'static str>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedDriver {
    fn new(replies: Vec<Option<&'static str>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HeraldDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> HeraldResult<GenerateResponse> {
        let mut requests = self.requests.lock();
        requests.push(req.clone());
        let count = requests.len();
        drop(requests);

        match self.replies.lock().pop_front() {
            Some(Some(text)) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text.to_string())],
            }),
            Some(None) => Err(HttpError::new("connection refused"))?,
            None => Ok(GenerateResponse {
                outputs: vec![Output::Text(format!("Segment {count}."))],
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

/// Mock sink that records segments and answers with scripted outcomes.
struct RecordingSink {
    outcomes: Mutex<VecDeque<bool>>,
    segments: Mutex<Vec<String>>,
}

impl RecordingSink {
    fn new(outcomes: Vec<bool>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            segments: Mutex::new(Vec::new()),
        }
    }

    fn accepting() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl SegmentSink for RecordingSink {
    async fn deliver(&self, segment: &str) -> bool {
        self.segments.lock().push(segment.to_string());
        self.outcomes.lock().pop_front().unwrap_or(true)
    }

    fn endpoint(&self) -> &str {
        "mock://avatar"
    }
}

fn generation_config() -> GenerationConfig {
    GenerationConfig::builder()
        .api_key(ApiKey::new(Some("sk-test".to_string())).expect("key"))
        .build()
        .expect("config")
}

fn schedule(continuous: bool, rounds: u32) -> ScheduleConfig {
    ScheduleConfig::builder()
        .continuous(continuous)
        .interval_secs(15u64)
        .rounds(rounds)
        .build()
        .expect("schedule")
}

fn broadcaster(
    driver: ScriptedDriver,
    sink: RecordingSink,
    schedule: &ScheduleConfig,
) -> Broadcaster<ScriptedDriver, RecordingSink> {
    let generator = NarrativeGenerator::new(driver, &generation_config());
    Broadcaster::new(generator, sink, vec![Topic::new("A", "a")], schedule)
}

#[tokio::test(start_paused = true)]
async fn test_single_shot_runs_one_round() {
    let broadcaster = broadcaster(
        ScriptedDriver::new(vec![Some("Hello world.")]),
        RecordingSink::accepting(),
        &schedule(false, 10),
    );
    assert_eq!(broadcaster.state(), BroadcastState::Idle);

    let report = broadcaster.run().await;

    assert_eq!(report.generations, 1);
    assert_eq!(report.deliveries, 1);
    assert_eq!(report.sleeps, 0);
    assert!(!report.stopped_early);
    assert_eq!(
        *broadcaster.sink().segments.lock(),
        vec!["Hello world.".to_string()]
    );
    assert_eq!(broadcaster.state(), BroadcastState::Done);
}

#[tokio::test(start_paused = true)]
async fn test_single_shot_ends_after_failed_delivery() {
    let broadcaster = broadcaster(
        ScriptedDriver::new(vec![Some("Hello world.")]),
        RecordingSink::new(vec![false]),
        &schedule(false, 10),
    );

    let report = broadcaster.run().await;

    assert_eq!(report.generations, 1);
    assert_eq!(report.deliveries, 1);
    assert_eq!(report.delivery_failures, 1);
    assert_eq!(broadcaster.generator().driver().requests.lock().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_continuous_runs_all_rounds_with_sleeps_between() {
    let broadcaster = broadcaster(
        ScriptedDriver::new(Vec::new()),
        RecordingSink::accepting(),
        &schedule(true, 3),
    );

    let started = tokio::time::Instant::now();
    let report = broadcaster.run().await;

    assert_eq!(report.generations, 3);
    assert_eq!(report.deliveries, 3);
    assert_eq!(report.sleeps, 2);
    assert_eq!(started.elapsed(), Duration::from_secs(30));
    assert_eq!(
        *broadcaster.sink().segments.lock(),
        vec!["Segment 1.", "Segment 2.", "Segment 3."]
    );
}

#[tokio::test(start_paused = true)]
async fn test_continuous_stops_when_opening_delivery_fails() {
    let broadcaster = broadcaster(
        ScriptedDriver::new(Vec::new()),
        RecordingSink::new(vec![false]),
        &schedule(true, 5),
    );

    let started = tokio::time::Instant::now();
    let report = broadcaster.run().await;

    assert_eq!(report.generations, 1);
    assert_eq!(report.deliveries, 1);
    assert_eq!(report.sleeps, 0);
    assert!(report.stopped_early);
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(broadcaster.state(), BroadcastState::Done);
}

#[tokio::test(start_paused = true)]
async fn test_later_delivery_failure_does_not_stop_loop() {
    let broadcaster = broadcaster(
        ScriptedDriver::new(Vec::new()),
        RecordingSink::new(vec![true, false, true]),
        &schedule(true, 4),
    );

    let report = broadcaster.run().await;

    assert_eq!(report.generations, 4);
    assert_eq!(report.deliveries, 4);
    assert_eq!(report.delivery_failures, 1);
    assert!(!report.stopped_early);
}

#[tokio::test(start_paused = true)]
async fn test_continuation_is_seeded_with_previous_segment() {
    let broadcaster = broadcaster(
        ScriptedDriver::new(vec![Some("Opening."), None, Some("Recovered.")]),
        RecordingSink::new(vec![true, false, true]),
        &schedule(true, 3),
    );

    broadcaster.run().await;

    let requests = broadcaster.generator().driver().requests.lock();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].messages[1].role, Role::Assistant);
    assert_eq!(requests[1].messages[1].content, "Opening.");
    // A failed round still seeds the next one with its fallback text.
    assert_eq!(requests[2].messages[1].content, CONTINUATION_FALLBACK);

    assert_eq!(
        *broadcaster.sink().segments.lock(),
        vec!["Opening.", CONTINUATION_FALLBACK, "Recovered."]
    );
}

#[tokio::test(start_paused = true)]
async fn test_generation_failure_delivers_fallback() {
    let broadcaster = broadcaster(
        ScriptedDriver::new(vec![None]),
        RecordingSink::accepting(),
        &schedule(false, 1),
    );

    let report = broadcaster.run().await;

    assert_eq!(report.fallbacks, 1);
    assert_eq!(report.deliveries, 1);
    assert_eq!(*broadcaster.sink().segments.lock(), vec![OPENING_FALLBACK]);
}

#[tokio::test(start_paused = true)]
async fn test_zero_rounds_runs_opening_only() {
    let broadcaster = broadcaster(
        ScriptedDriver::new(Vec::new()),
        RecordingSink::accepting(),
        &schedule(true, 0),
    );

    let report = broadcaster.run().await;

    assert_eq!(report.generations, 1);
    assert_eq!(report.deliveries, 1);
    assert_eq!(report.sleeps, 0);
}

#[tokio::test(start_paused = true)]
async fn test_second_run_reports_only_its_own_rounds() {
    let broadcaster = broadcaster(
        ScriptedDriver::new(Vec::new()),
        RecordingSink::new(vec![false, true]),
        &schedule(true, 2),
    );

    let first = broadcaster.run().await;
    assert_eq!(first.generations, 1);
    assert_eq!(first.delivery_failures, 1);
    assert!(first.stopped_early);

    let second = broadcaster.run().await;
    assert_eq!(second.generations, 2);
    assert_eq!(second.deliveries, 2);
    assert_eq!(second.delivery_failures, 0);
    assert_eq!(second.sleeps, 1);
    assert!(!second.stopped_early);
    assert_eq!(broadcaster.sink().segments.lock().len(), 3);
}
