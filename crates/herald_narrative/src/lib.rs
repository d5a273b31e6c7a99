//! Narrative generation for the Herald news narrator.
//!
//! A [`NarrativeGenerator`] turns a [`ConversationSeed`] (either the topic
//! list for the opening segment or the previous segment for a continuation)
//! into a completion request and returns a [`Generation`]. Failures never
//! escape: they come back as a fallback segment that callers deliver like
//! any other.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generation;
mod generator;
mod persona;
mod seed;
mod topics;

pub use generation::Generation;
pub use generator::NarrativeGenerator;
pub use persona::{
    CONTINUATION_FALLBACK, CONTINUE_INSTRUCTION, NARRATOR_PERSONA, OPENING_FALLBACK,
    enumerate_topics, opening_instruction,
};
pub use seed::ConversationSeed;
pub use topics::{default_topics, load_topics, parse_topics};
