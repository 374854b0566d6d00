use alloc::vec::Vec;

use crate::console::{Console, Event};
use crate::error::RoundError;
use crate::result::{RoundResult, Standing};

use super::{Round, RoundState, rules};

impl<C: Console> Round<C> {
    /// Ends the round, picks the winner and shows every final hand.
    ///
    /// The winner is the highest score not over 21, with ties going to the
    /// earliest seat. If everyone is bust there is no winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already resolved.
    pub fn resolve(&mut self) -> Result<&RoundResult, RoundError> {
        if self.state == RoundState::Resolved {
            return Err(RoundError::InvalidState);
        }

        let scores = self.scores();
        let winner = rules::find_winner(&scores);

        let mut standings = Vec::with_capacity(self.participants.len());
        for (seat, (participant, &score)) in self.participants.iter().zip(&scores).enumerate() {
            let bust = rules::is_bust(score);
            let is_winner = winner == Some(seat);

            self.console.show(Event::Outcome {
                winner: is_winner,
                bust,
                hand: participant.render_final_hand(),
            });

            standings.push(Standing {
                seat,
                role: participant.role(),
                score,
                bust,
                winner: is_winner,
            });
        }

        self.state = RoundState::Resolved;
        log::info!(
            "round resolved after {} pass(es), winner: {:?}",
            self.passes,
            winner
        );

        Ok(&*self.result.insert(RoundResult {
            winner,
            standings,
            passes: self.passes,
        }))
    }
}
