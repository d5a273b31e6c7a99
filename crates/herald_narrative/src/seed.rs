//! What a generation request is built from.

use crate::persona::{
    CONTINUATION_FALLBACK, CONTINUE_INSTRUCTION, NARRATOR_PERSONA, OPENING_FALLBACK,
    opening_instruction,
};
use herald_core::{Message, Topic};

/// Starting point of one generation.
///
/// # Examples
///
/// ```
/// use herald_core::{Role, Topic};
/// use herald_narrative::ConversationSeed;
///
/// let opening = ConversationSeed::Topics(vec![Topic::new("A", "a")]);
/// assert_eq!(opening.messages().len(), 2);
///
/// let next = ConversationSeed::Continuation("Good evening.".to_string());
/// let messages = next.messages();
/// assert_eq!(messages[1].role, Role::Assistant);
/// assert_eq!(messages[1].content, "Good evening.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConversationSeed {
    /// Opening segment covering every topic in order.
    #[display("opening ({} topics)", _0.len())]
    Topics(Vec<Topic>),
    /// Continuation of the previous segment.
    #[display("continuation")]
    Continuation(String),
}

impl ConversationSeed {
    /// Conversation history sent to the completion service.
    pub fn messages(&self) -> Vec<Message> {
        match self {
            Self::Topics(topics) => vec![
                Message::system(NARRATOR_PERSONA),
                Message::user(opening_instruction(topics)),
            ],
            Self::Continuation(previous) => vec![
                Message::system(NARRATOR_PERSONA),
                Message::assistant(previous.clone()),
                Message::user(CONTINUE_INSTRUCTION),
            ],
        }
    }

    /// Segment substituted when generation fails.
    pub fn fallback(&self) -> &'static str {
        match self {
            Self::Topics(_) => OPENING_FALLBACK,
            Self::Continuation(_) => CONTINUATION_FALLBACK,
        }
    }
}
