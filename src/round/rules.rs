//! Pure table rules over explicit round state.

use crate::hand::BUST_LIMIT;

/// Returns whether a score is over 21.
#[must_use]
pub const fn is_bust(score: u16) -> bool {
    score > BUST_LIMIT
}

/// Returns whether every participant stayed during the current pass.
#[must_use]
pub const fn all_stayed(stays: usize, participants: usize) -> bool {
    stays == participants
}

/// Returns whether at most one participant is still at or under 21.
#[must_use]
pub fn zero_or_one_valid(scores: &[u16]) -> bool {
    scores.iter().filter(|&&score| !is_bust(score)).count() <= 1
}

/// Returns whether the round should end after a full pass.
#[must_use]
pub fn should_end(stays: usize, scores: &[u16]) -> bool {
    all_stayed(stays, scores.len()) || zero_or_one_valid(scores)
}

/// Picks the winning seat: the highest score not over 21.
///
/// Ties go to the earliest seat. Returns `None` when everyone is bust.
#[must_use]
pub fn find_winner(scores: &[u16]) -> Option<usize> {
    let mut best: Option<(usize, u16)> = None;
    for (seat, &score) in scores.iter().enumerate() {
        if is_bust(score) {
            continue;
        }
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((seat, score));
        }
    }
    best.map(|(seat, _)| seat)
}
