//! Round engine and state management.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::console::Console;
use crate::deck::Deck;
use crate::error::{DealError, RoundError};
use crate::options::RoundOptions;
use crate::participant::{Dealer, Participant, Player};
use crate::result::RoundResult;

mod resolve;
pub mod rules;
pub mod state;
mod turns;

pub use state::RoundState;

/// A single blackjack round.
///
/// The round owns the deck, the participants (seated in turn order) and
/// the console they play through. Drive it with [`Round::start`], or step
/// through [`Round::deal`] and [`Round::play_pass`] by hand.
pub struct Round<C> {
    /// Deck cards are dealt from.
    deck: Deck,
    /// Participants in turn order.
    participants: Vec<Box<dyn Participant>>,
    /// Input and output collaborator.
    console: C,
    /// Round options.
    options: RoundOptions,
    /// Current round state.
    state: RoundState,
    /// Participants who stayed during the current pass.
    stays: usize,
    /// Completed turn passes.
    passes: u32,
    /// Outcome, once resolved.
    result: Option<RoundResult>,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl<C: Console> Round<C> {
    /// Creates a round over `deck` with `participants` seated in turn order.
    ///
    /// `seed` drives the shuffle, so equal seeds replay equal rounds.
    #[must_use]
    pub fn new(
        deck: Deck,
        participants: Vec<Box<dyn Participant>>,
        console: C,
        options: RoundOptions,
        seed: u64,
    ) -> Self {
        Self {
            deck,
            participants,
            console,
            options,
            state: RoundState::Dealing,
            stays: 0,
            passes: 0,
            result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a round with a fresh 52-card deck, a player in the first
    /// seat and a dealer in the second.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Round, RoundOptions, RoundState, ScriptedConsole};
    ///
    /// let mut round = Round::heads_up(ScriptedConsole::new(), RoundOptions::default(), 7);
    /// let result = round.start().unwrap();
    /// assert_eq!(round.state(), RoundState::Resolved);
    /// assert_eq!(result.standings.len(), 2);
    /// ```
    #[must_use]
    pub fn heads_up(console: C, options: RoundOptions, seed: u64) -> Self {
        Self::new(
            Deck::new(),
            vec![Box::new(Player::new()), Box::new(Dealer::new())],
            console,
            options,
            seed,
        )
    }

    /// Deals the next card from the deck to the participant at `seat`.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved, no participant sits at
    /// `seat`, or the deck is exhausted.
    pub fn deal_to(&mut self, seat: usize) -> Result<Card, DealError> {
        if self.state == RoundState::Resolved {
            return Err(DealError::InvalidState);
        }

        let participant = self
            .participants
            .get_mut(seat)
            .ok_or(DealError::SeatNotFound)?;
        let card = self.deck.draw_next().ok_or(DealError::DeckExhausted)?;
        participant.add_card(card);

        log::debug!("dealt {card} to seat {seat}");
        Ok(card)
    }

    /// Records that a participant stayed this pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved.
    pub fn stay(&mut self) -> Result<(), RoundError> {
        if self.state == RoundState::Resolved {
            return Err(RoundError::InvalidState);
        }
        self.stays += 1;
        Ok(())
    }

    /// Returns every participant's score in seat order.
    #[must_use]
    pub fn scores(&self) -> Vec<u16> {
        self.participants.iter().map(|p| p.score()).collect()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether participants are still taking turns.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == RoundState::Playing
    }

    /// Returns how many participants stayed during the current pass.
    #[must_use]
    pub const fn stays(&self) -> usize {
        self.stays
    }

    /// Returns how many full turn passes have been played.
    #[must_use]
    pub const fn passes(&self) -> u32 {
        self.passes
    }

    /// Returns the participants in seat order.
    #[must_use]
    pub fn participants(&self) -> &[Box<dyn Participant>] {
        &self.participants
    }

    /// Returns the participant at `seat`.
    #[must_use]
    pub fn participant(&self, seat: usize) -> Option<&dyn Participant> {
        self.participants.get(seat).map(|participant| &**participant)
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the console.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Returns the result once the round is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Consumes the round and returns its console.
    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Checks that the round can still start dealing.
    const fn ensure_dealing(&self) -> Result<(), RoundError> {
        match self.state {
            RoundState::Dealing => Ok(()),
            RoundState::Playing | RoundState::Resolved => Err(RoundError::InvalidState),
        }
    }
}
