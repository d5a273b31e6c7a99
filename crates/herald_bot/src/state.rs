//! Broadcast lifecycle states.

/// Where the driver loop is.
///
/// `Idle → Generating → Delivering → [continuous] {Sleeping → Generating → Delivering}* → Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum BroadcastState {
    /// Not started
    #[default]
    Idle,
    /// Waiting on the completion service
    Generating,
    /// Waiting on the avatar front-end
    Delivering,
    /// Pausing between rounds
    Sleeping,
    /// Finished, normally or after a failed opening delivery
    Done,
}
