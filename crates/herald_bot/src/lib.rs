//! Driver loop for the Herald news narrator.
//!
//! A [`Broadcaster`] pairs a narrative generator with a segment sink and runs
//! the schedule: one opening segment, then (in continuous mode) a fixed number
//! of continuation rounds separated by a sleep.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod broadcast;
mod metrics;
mod state;

pub use broadcast::Broadcaster;
pub use metrics::{BroadcastMetrics, BroadcastReport};
pub use state::BroadcastState;
