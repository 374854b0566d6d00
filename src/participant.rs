//! Round participants: the interactive player and the rule-driven dealer.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::console::{Console, Event};
use crate::hand::Hand;

/// The dealer draws while its score is at or below this value.
pub const DEALER_HIT_LIMIT: u16 = 12;

/// Prompt shown to the player before each decision.
pub const PLAYER_PROMPT: &str = "Hit (h) or Stay (s)?: ";

/// Which side of the table a participant plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player.
    Player,
    /// The dealer.
    Dealer,
}

impl Role {
    /// Label printed in front of the participant's hand.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Player => "Your Hand",
            Self::Dealer => "Dealer",
        }
    }
}

/// A participant's choice for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// End the turn without drawing.
    Stay,
}

impl Decision {
    /// Interprets a line of player input.
    ///
    /// `h` and `hit` (any case, surrounding whitespace ignored) mean
    /// [`Decision::Hit`]; everything else is [`Decision::Stay`].
    #[must_use]
    pub fn from_input(line: &str) -> Self {
        let choice = line.trim();
        if choice.eq_ignore_ascii_case("h") || choice.eq_ignore_ascii_case("hit") {
            Self::Hit
        } else {
            Self::Stay
        }
    }
}

/// One position in a rendered hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A face-up card.
    Shown(Card),
    /// A face-down card.
    Hidden,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shown(card) => write!(f, "{card}"),
            Self::Hidden => f.write_str("XX"),
        }
    }
}

/// A hand as it should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Owner of the hand.
    pub role: Role,
    /// Cards in deal order, possibly concealed.
    pub slots: Vec<Slot>,
}

impl HandView {
    /// Builds a view with every card face up.
    #[must_use]
    pub fn revealed(role: Role, cards: &[Card]) -> Self {
        Self {
            role,
            slots: cards.iter().copied().map(Slot::Shown).collect(),
        }
    }

    /// Builds a view with the first card face down.
    #[must_use]
    pub fn first_concealed(role: Role, cards: &[Card]) -> Self {
        let mut view = Self::revealed(role, cards);
        if let Some(first) = view.slots.first_mut() {
            *first = Slot::Hidden;
        }
        view
    }

    /// Returns the number of concealed cards.
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Hidden))
            .count()
    }
}

impl fmt::Display for HandView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.role.label())?;
        for slot in &self.slots {
            write!(f, " {slot}")?;
        }
        Ok(())
    }
}

/// Behaviour shared by everyone seated at the table.
///
/// Implementors only supply hand access, rendering and the turn policy;
/// card and score queries are provided on top of [`Participant::hand`].
pub trait Participant {
    /// Returns which side of the table this participant plays.
    fn role(&self) -> Role;

    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Renders the hand for display during play.
    fn render_hand(&self) -> HandView;

    /// Renders the hand for display once the round is over.
    fn render_final_hand(&self) -> HandView {
        HandView::revealed(self.role(), self.cards())
    }

    /// Decides whether to hit or stay this turn.
    fn decide_turn(&mut self, console: &mut dyn Console) -> Decision;

    /// Returns the cards in the hand.
    fn cards(&self) -> &[Card] {
        self.hand().cards()
    }

    /// Adds a card to the hand.
    fn add_card(&mut self, card: Card) {
        self.hand_mut().add_card(card);
    }

    /// Returns the hand score.
    fn score(&self) -> u16 {
        self.hand().score()
    }

    /// Returns whether the hand is bust.
    fn is_bust(&self) -> bool {
        self.hand().is_bust()
    }
}

/// The human player. Every decision comes from the console.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }
}

impl Participant for Player {
    fn role(&self) -> Role {
        Role::Player
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn render_hand(&self) -> HandView {
        HandView::revealed(Role::Player, self.cards())
    }

    fn decide_turn(&mut self, console: &mut dyn Console) -> Decision {
        console.show(Event::TurnStarted(Role::Player));
        console.show(Event::Hand(self.render_hand()));
        Decision::from_input(&console.read_line(PLAYER_PROMPT))
    }
}

/// The dealer. Draws at or below a fixed limit and hides its first card
/// until the round ends.
#[derive(Debug, Clone)]
pub struct Dealer {
    hand: Hand,
    hit_limit: u16,
}

impl Dealer {
    /// Creates a dealer that hits at or below [`DEALER_HIT_LIMIT`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_hit_limit(DEALER_HIT_LIMIT)
    }

    /// Creates a dealer that hits at or below `hit_limit`.
    #[must_use]
    pub const fn with_hit_limit(hit_limit: u16) -> Self {
        Self {
            hand: Hand::new(),
            hit_limit,
        }
    }

    /// Returns the score at or below which the dealer draws.
    #[must_use]
    pub const fn hit_limit(&self) -> u16 {
        self.hit_limit
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Participant for Dealer {
    fn role(&self) -> Role {
        Role::Dealer
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn render_hand(&self) -> HandView {
        HandView::first_concealed(Role::Dealer, self.cards())
    }

    fn decide_turn(&mut self, console: &mut dyn Console) -> Decision {
        console.show(Event::TurnStarted(Role::Dealer));
        console.show(Event::Hand(self.render_hand()));
        if self.score() <= self.hit_limit {
            Decision::Hit
        } else {
            Decision::Stay
        }
    }
}
