use crate::console::{Console, Event};
use crate::error::{DealError, RoundError};
use crate::options::ExhaustionPolicy;
use crate::participant::Decision;
use crate::result::RoundResult;

use super::{Round, RoundState, rules};

impl<C: Console> Round<C> {
    /// Reports an empty deck for `seat` and returns the fallback to apply.
    fn deck_exhausted(&mut self, seat: usize) -> ExhaustionPolicy {
        let policy = self.options.on_exhausted;
        if let Some(participant) = self.participants.get(seat) {
            let role = participant.role();
            log::warn!("deck exhausted dealing to seat {seat} ({role:?}), applying {policy:?}");
            self.console.show(Event::DeckExhausted(role));
        }
        policy
    }

    /// Shuffles the deck, deals the opening cards and shows every hand.
    ///
    /// Cards go out in interleaved passes: one to each seat in order, then
    /// the next one to each seat, until everyone holds
    /// [`RoundOptions::initial_cards`](crate::RoundOptions::initial_cards).
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt or has no
    /// participants.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        self.ensure_dealing()?;
        if self.participants.is_empty() {
            return Err(RoundError::NoParticipants);
        }

        if self.options.shuffle {
            self.deck.shuffle(&mut self.rng);
        }
        log::info!(
            "dealing {} card(s) to {} participant(s) from a {}-card deck",
            self.options.initial_cards,
            self.participants.len(),
            self.deck.len()
        );

        for _ in 0..self.options.initial_cards {
            for seat in 0..self.participants.len() {
                match self.deal_to(seat) {
                    Ok(_) => {}
                    Err(DealError::DeckExhausted) => {
                        if self.deck_exhausted(seat) == ExhaustionPolicy::EndRound {
                            self.resolve()?;
                            return Ok(());
                        }
                    }
                    Err(DealError::InvalidState | DealError::SeatNotFound) => {
                        return Err(RoundError::InvalidState);
                    }
                }
            }
        }

        for participant in &self.participants {
            self.console.show(Event::Hand(participant.render_hand()));
        }

        self.state = RoundState::Playing;
        Ok(())
    }

    /// Plays one turn for `seat` and reports a bust.
    ///
    /// Returns `false` when the turn ended the round early.
    fn take_turn(&mut self, seat: usize) -> Result<bool, RoundError> {
        let participant = self
            .participants
            .get_mut(seat)
            .ok_or(RoundError::InvalidState)?;
        let role = participant.role();
        let decision = participant.decide_turn(&mut self.console);
        log::debug!("seat {seat} ({role:?}) decided {decision:?}");
        self.console.show(Event::Decided { role, decision });

        match decision {
            Decision::Hit => match self.deal_to(seat) {
                Ok(card) => self.console.show(Event::Drew(card)),
                Err(DealError::DeckExhausted) => match self.deck_exhausted(seat) {
                    ExhaustionPolicy::ForceStay => self.stay()?,
                    ExhaustionPolicy::EndRound => return Ok(false),
                },
                Err(DealError::InvalidState | DealError::SeatNotFound) => {
                    return Err(RoundError::InvalidState);
                }
            },
            Decision::Stay => self.stay()?,
        }

        if self.participants.get(seat).is_some_and(|p| p.is_bust()) {
            log::debug!("seat {seat} ({role:?}) is bust");
            self.console.show(Event::Bust(role));
        }

        Ok(true)
    }

    /// Gives every participant one turn, in seat order, then checks
    /// whether the round is over.
    ///
    /// The round ends once everyone stayed during the pass or at most one
    /// participant is still at or under 21. Otherwise the stay count starts
    /// over for the next pass. Returns the state after the pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played.
    pub fn play_pass(&mut self) -> Result<RoundState, RoundError> {
        if self.state != RoundState::Playing {
            return Err(RoundError::InvalidState);
        }

        for seat in 0..self.participants.len() {
            if !self.take_turn(seat)? {
                self.passes += 1;
                self.resolve()?;
                return Ok(self.state);
            }
        }
        self.passes += 1;

        if rules::should_end(self.stays, &self.scores()) {
            self.resolve()?;
        } else {
            self.stays = 0;
        }

        Ok(self.state)
    }

    /// Plays the whole round: deals, runs turn passes until the round ends,
    /// and returns the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already started or has no
    /// participants.
    pub fn start(&mut self) -> Result<RoundResult, RoundError> {
        self.deal()?;
        while self.state == RoundState::Playing {
            self.play_pass()?;
        }
        self.result.clone().ok_or(RoundError::InvalidState)
    }
}
