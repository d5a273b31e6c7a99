//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single role-tagged turn in a conversation.
///
/// # Examples
///
/// ```
/// use herald_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Hello!");
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content, "Hello!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// Text of the turn
    pub content: String,
}

impl Message {
    /// Creates a message for the given role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Shorthand for a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Shorthand for a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Shorthand for an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
