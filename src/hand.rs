//! Participant hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest score that does not bust.
pub const BUST_LIMIT: u16 = 21;

/// Scores cards the way the table does.
///
/// Non-Aces are summed at their low value first. Each Ace is then added in
/// deal order, counted high unless that would take the running total past
/// [`BUST_LIMIT`].
fn evaluate_cards(cards: &[Card]) -> u16 {
    let base: u16 = cards
        .iter()
        .filter(|card| !card.is_ace())
        .map(|card| u16::from(card.low_value()))
        .sum();

    cards
        .iter()
        .filter(|card| card.is_ace())
        .fold(base, |score, ace| {
            if score + u16::from(ace.high_value()) > BUST_LIMIT {
                score + u16::from(ace.low_value())
            } else {
                score + u16::from(ace.high_value())
            }
        })
}

/// A participant's hand.
///
/// Hands only grow during a round; there is no way to remove a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    ///
    /// This is the best total not over 21 when one exists, otherwise the
    /// lowest total the cards allow.
    #[must_use]
    pub fn score(&self) -> u16 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BUST_LIMIT
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
