//! A single-round console blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that shuffles a [`Deck`], deals to a
//! [`Player`] and a [`Dealer`], drives their turns until nobody wants
//! another card (or at most one hand is still under 21) and picks the
//! winner. All table talk goes through the [`Console`] traits, so the
//! engine itself never touches stdin or stdout.
//!
//! # Example
//!
//! ```no_run
//! use bjround::{Round, RoundOptions, TextConsole};
//!
//! let stdin = std::io::stdin();
//! let console = TextConsole::new(stdin.lock(), std::io::stdout());
//! let mut round = Round::heads_up(console, RoundOptions::default(), 42);
//! let _ = round.start();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod round;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod text;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{Console, Event, Input, Output, ScriptedConsole};
pub use deck::Deck;
pub use error::{DealError, RoundError};
pub use hand::{BUST_LIMIT, Hand};
pub use options::{ExhaustionPolicy, RoundOptions};
pub use participant::{
    DEALER_HIT_LIMIT, Dealer, Decision, HandView, PLAYER_PROMPT, Participant, Player, Role, Slot,
};
pub use result::{RoundResult, Standing};
pub use round::{Round, RoundState};
#[cfg(feature = "std")]
pub use text::TextConsole;
