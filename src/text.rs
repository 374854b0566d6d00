//! Plain-text console over any reader/writer pair.

use std::io::{BufRead, Write};

use alloc::string::String;

use crate::console::{Event, Input, Output};
use crate::participant::{Decision, Role};

/// A console that prints table events as lines of text and reads player
/// choices line by line.
///
/// ```
/// use bjround::TextConsole;
/// use bjround::console::{Event, Output};
/// use bjround::participant::Role;
///
/// let mut out = Vec::new();
/// let mut console = TextConsole::new(&b""[..], &mut out);
/// console.show(Event::Bust(Role::Player));
/// drop(console);
/// assert_eq!(out, b"Bust!\n");
/// ```
#[derive(Debug)]
pub struct TextConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    /// Wraps a reader for player input and a writer for table output.
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the reader and writer.
    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn write_line(&mut self, line: core::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.writer, "{line}") {
            log::warn!("failed to write console output: {err}");
        }
    }
}

impl<R: BufRead, W: Write> Input for TextConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> String {
        if let Err(err) = write!(self.writer, "{prompt}").and_then(|()| self.writer.flush()) {
            log::warn!("failed to write prompt: {err}");
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(_) => line,
            Err(err) => {
                log::warn!("failed to read input: {err}");
                String::new()
            }
        }
    }
}

impl<R: BufRead, W: Write> Output for TextConsole<R, W> {
    fn show(&mut self, event: Event) {
        match event {
            Event::TurnStarted(Role::Player) => self.write_line(format_args!("Next Turn")),
            Event::TurnStarted(Role::Dealer) => self.write_line(format_args!("Dealers Turn")),
            Event::Hand(view) => self.write_line(format_args!("{view}")),
            Event::Decided {
                role: Role::Dealer,
                decision,
            } => match decision {
                Decision::Hit => self.write_line(format_args!("Hit me")),
                Decision::Stay => self.write_line(format_args!("Stay")),
            },
            Event::Decided {
                role: Role::Player, ..
            } => {}
            Event::Drew(card) => self.write_line(format_args!("{card}")),
            Event::DeckExhausted(_) => self.write_line(format_args!("No cards remain")),
            Event::Bust(_) => self.write_line(format_args!("Bust!")),
            Event::Outcome { winner, bust, hand } => {
                if winner {
                    self.write_line(format_args!("Winner! {hand}"));
                } else if bust {
                    self.write_line(format_args!("Over! {hand}"));
                } else {
                    self.write_line(format_args!("{hand}"));
                }
            }
        }
    }
}
