//! A single-pass, shuffleable deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};

/// An ordered sequence of cards with a dealing cursor.
///
/// The deck is never refilled: once every card has been drawn,
/// [`Deck::draw_next`] keeps returning `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in dealing order.
    cards: Vec<Card>,
    /// Number of draw attempts so far, capped at `cards.len() + 1`.
    cursor: usize,
}

impl Deck {
    /// Creates a standard 52-card deck in construction order.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ranks_and_suits(&Rank::ALL, &Suit::ALL)
    }

    /// Creates a deck holding one card per `(rank, suit)` pair.
    ///
    /// Ranks form the outer loop and suits the inner one, so the unshuffled
    /// order is `r0s0, r0s1, .., r1s0, ..`.
    #[must_use]
    pub fn with_ranks_and_suits(ranks: &[Rank], suits: &[Suit]) -> Self {
        let mut cards = Vec::with_capacity(ranks.len() * suits.len());
        for &rank in ranks {
            for &suit in suits {
                cards.push(Card::new(rank, suit));
            }
        }
        Self::from_cards(cards)
    }

    /// Creates a stacked deck that deals `cards` front to back.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Randomly permutes the cards in place.
    ///
    /// The cursor is left where it was. Returns the deck for chaining.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.shuffle(rng);
        self
    }

    /// Draws the next card, or `None` once no cards remain.
    pub fn draw_next(&mut self) -> Option<Card> {
        if self.cursor > self.cards.len() {
            return None;
        }
        self.cursor += 1;
        self.cards.get(self.cursor - 1).copied()
    }

    /// Returns every card in the deck, dealt or not, in current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }

    /// Returns the total number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
