//! Input and output collaborators driven by the round.
//!
//! The engine never formats text itself. It asks an [`Input`] for raw lines
//! and reports everything that happens as an [`Event`] to an [`Output`].

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::participant::{Decision, HandView, Role};

/// Something that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A participant's turn begins.
    TurnStarted(Role),
    /// A hand is presented, possibly with concealed cards.
    Hand(HandView),
    /// A participant made a decision.
    Decided {
        /// Who decided.
        role: Role,
        /// What they chose.
        decision: Decision,
    },
    /// A card was drawn on a hit.
    Drew(Card),
    /// A participant wanted a card but the deck is empty.
    DeckExhausted(Role),
    /// A participant is over 21.
    Bust(Role),
    /// Final line for one participant once the round is resolved.
    Outcome {
        /// Whether this participant won.
        winner: bool,
        /// Whether this participant went over 21.
        bust: bool,
        /// The fully revealed hand.
        hand: HandView,
    },
}

/// Source of player input.
pub trait Input {
    /// Shows `prompt` and returns one line of input.
    ///
    /// Implementations return an empty string when no input is available.
    fn read_line(&mut self, prompt: &str) -> String;
}

/// Sink for table events.
pub trait Output {
    /// Presents one event.
    fn show(&mut self, event: Event);
}

/// An input and output pair.
pub trait Console: Input + Output {}

impl<T: Input + Output + ?Sized> Console for T {}

/// A console that replays queued input lines and records every event.
///
/// Once the queued lines run out every read returns an empty line, which
/// the player treats as staying.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    events: Vec<Event>,
}

impl ScriptedConsole {
    /// Creates a console with no queued input.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: VecDeque::new(),
            prompts: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Creates a console that answers reads with `lines`, in order.
    #[must_use]
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::new()
        }
    }

    /// Returns every event shown so far.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns every prompt passed to [`Input::read_line`].
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns the number of queued lines not yet read.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.lines.len()
    }
}

impl Input for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> String {
        self.prompts.push(String::from(prompt));
        self.lines.pop_front().unwrap_or_default()
    }
}

impl Output for ScriptedConsole {
    fn show(&mut self, event: Event) {
        self.events.push(event);
    }
}
