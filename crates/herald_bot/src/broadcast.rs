//! The driver loop: opening segment, then optional timed continuations.

use crate::{BroadcastMetrics, BroadcastReport, BroadcastState};
use herald_core::{ScheduleConfig, Topic};
use herald_interface::{HeraldDriver, SegmentSink};
use herald_narrative::{ConversationSeed, NarrativeGenerator};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

/// Generates narrative segments and hands them to a sink, round by round.
///
/// Round 1 narrates the topic list. In continuous mode, each later round
/// sleeps for the configured interval and then continues from the previous
/// segment, fallback text included. If the opening delivery fails, the run
/// ends without continuing. Later delivery failures are logged and ignored.
pub struct Broadcaster<D: HeraldDriver, S: SegmentSink> {
    generator: NarrativeGenerator<D>,
    sink: S,
    topics: Vec<Topic>,
    schedule: ScheduleConfig,
    metrics: BroadcastMetrics,
    state: Mutex<BroadcastState>,
}

impl<D: HeraldDriver, S: SegmentSink> Broadcaster<D, S> {
    /// Creates a broadcaster over the given topics.
    pub fn new(
        generator: NarrativeGenerator<D>,
        sink: S,
        topics: Vec<Topic>,
        schedule: &ScheduleConfig,
    ) -> Self {
        Self {
            generator,
            sink,
            topics,
            schedule: *schedule,
            metrics: BroadcastMetrics::new(),
            state: Mutex::new(BroadcastState::Idle),
        }
    }

    /// Narrative generator in use.
    pub fn generator(&self) -> &NarrativeGenerator<D> {
        &self.generator
    }

    /// Destination of every segment.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Counters for this run.
    pub fn metrics(&self) -> &BroadcastMetrics {
        &self.metrics
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BroadcastState {
        *self.state.lock()
    }

    fn transition(&self, next: BroadcastState) {
        let mut state = self.state.lock();
        debug!(from = %*state, to = %next, "Broadcast state change");
        *state = next;
    }

    /// Runs the broadcast to completion.
    ///
    /// Each call starts from zeroed metrics, so the report covers that call only.
    #[instrument(skip(self), fields(
        continuous = self.schedule.continuous(),
        rounds = self.schedule.effective_rounds(),
        interval_secs = self.schedule.interval().as_secs(),
        endpoint = %self.sink.endpoint(),
    ))]
    pub async fn run(&self) -> BroadcastReport {
        self.metrics.reset();
        let rounds = if self.schedule.continuous() {
            self.schedule.effective_rounds()
        } else {
            1
        };
        info!(topics = self.topics.len(), rounds, "Broadcast started");

        let opening = ConversationSeed::Topics(self.topics.clone());
        let (mut previous, delivered) = self.round(1, rounds, &opening).await;

        if !delivered {
            warn!("Opening segment was not delivered, stopping broadcast");
            self.metrics.record_stopped_early();
        } else {
            for round in 2..=rounds {
                self.transition(BroadcastState::Sleeping);
                self.metrics.record_sleep();
                debug!(
                    secs = self.schedule.interval().as_secs(),
                    "Sleeping before next round"
                );
                tokio::time::sleep(self.schedule.interval()).await;

                let seed = ConversationSeed::Continuation(previous);
                (previous, _) = self.round(round, rounds, &seed).await;
            }
        }

        self.transition(BroadcastState::Done);
        let report = self.metrics.snapshot();
        info!(?report, "Broadcast finished");
        report
    }

    /// Generates one segment and delivers it.
    ///
    /// Returns the segment and whether the sink accepted it.
    async fn round(&self, round: u32, rounds: u32, seed: &ConversationSeed) -> (String, bool) {
        self.transition(BroadcastState::Generating);
        let generation = self.generator.generate(seed).await;
        let fallback = generation.is_fallback();
        self.metrics.record_generation(fallback);

        let segment = generation.into_text();
        info!(round, rounds, fallback, text = %segment, "Segment ready");

        self.transition(BroadcastState::Delivering);
        let delivered = self.sink.deliver(&segment).await;
        self.metrics.record_delivery(delivered);
        if !delivered {
            warn!(round, "Segment was not delivered");
        }

        (segment, delivered)
    }
}
