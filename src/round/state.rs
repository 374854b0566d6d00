//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the initial deal.
    Dealing,
    /// Participants are taking turns.
    Playing,
    /// The round is over and can no longer change.
    Resolved,
}
