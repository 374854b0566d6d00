//! Round configuration options.

/// What the round does when a participant asks for a card and the deck is
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ExhaustionPolicy {
    /// Treat the participant as staying for this pass.
    ///
    /// During the initial deal the missing card is skipped.
    #[default]
    ForceStay,
    /// Resolve the round immediately with the hands as they are.
    EndRound,
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::{ExhaustionPolicy, RoundOptions};
///
/// let options = RoundOptions::default()
///     .with_initial_cards(2)
///     .with_shuffle(true)
///     .with_on_exhausted(ExhaustionPolicy::EndRound);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    /// Cards dealt to every participant before the first turn.
    pub initial_cards: u8,
    /// Whether the deck is shuffled when the round deals.
    pub shuffle: bool,
    /// Fallback when the deck runs out.
    pub on_exhausted: ExhaustionPolicy,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            initial_cards: 2,
            shuffle: true,
            on_exhausted: ExhaustionPolicy::ForceStay,
        }
    }
}

impl RoundOptions {
    /// Sets the number of cards dealt to each participant up front.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_initial_cards(1);
    /// assert_eq!(options.initial_cards, 1);
    /// ```
    #[must_use]
    pub const fn with_initial_cards(mut self, cards: u8) -> Self {
        self.initial_cards = cards;
        self
    }

    /// Sets whether the deck is shuffled before dealing.
    ///
    /// Turning this off deals a stacked deck in its given order.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the deck exhaustion fallback.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{ExhaustionPolicy, RoundOptions};
    ///
    /// let options = RoundOptions::default().with_on_exhausted(ExhaustionPolicy::EndRound);
    /// assert_eq!(options.on_exhausted, ExhaustionPolicy::EndRound);
    /// ```
    #[must_use]
    pub const fn with_on_exhausted(mut self, policy: ExhaustionPolicy) -> Self {
        self.on_exhausted = policy;
        self
    }
}
