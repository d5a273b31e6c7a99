//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Speaker of a message in a completion request.
///
/// # Examples
///
/// ```
/// use herald_core::Role;
///
/// assert_ne!(Role::User, Role::Assistant);
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// Persona framing and standing instructions
    System,
    /// Instructions for the current turn
    User,
    /// Text previously spoken by the narrator
    Assistant,
}
