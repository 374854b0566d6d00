//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur when dealing a card to a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The round has already been resolved.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// No participant sits at the requested seat.
    #[error("seat not found")]
    SeatNotFound,
    /// The deck has no cards left.
    #[error("no cards remain in the deck")]
    DeckExhausted,
}

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round is not in a state that allows this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// The round has nobody to deal to.
    #[error("round has no participants")]
    NoParticipants,
}
