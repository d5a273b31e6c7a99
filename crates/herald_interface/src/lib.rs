//! Trait definitions for Herald.
//!
//! Two seams separate the narration loop from the outside world: the
//! completion service that writes each segment and the sink that carries it
//! to the avatar front-end.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{HeraldDriver, SegmentSink};
