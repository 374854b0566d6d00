//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::participant::Role;

/// Final standing of one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    /// Seat index (turn order).
    pub seat: usize,
    /// Whether the seat is the player or the dealer.
    pub role: Role,
    /// Final hand score.
    pub score: u16,
    /// Whether the hand went over 21.
    pub bust: bool,
    /// Whether this seat won the round.
    pub winner: bool,
}

/// Result of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Winning seat, or `None` if every participant busted.
    pub winner: Option<usize>,
    /// Standings in seat order.
    pub standings: Vec<Standing>,
    /// Number of full turn passes played before resolution.
    pub passes: u32,
}

impl RoundResult {
    /// Returns the winner's standing, if any.
    #[must_use]
    pub fn winning_standing(&self) -> Option<&Standing> {
        self.winner.and_then(|seat| self.standings.get(seat))
    }
}
