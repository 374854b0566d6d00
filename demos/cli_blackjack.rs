//! CLI blackjack example.
//!
//! Plays one round against the dealer on stdin/stdout. Set `RUST_LOG=debug`
//! to see engine traces on stderr.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{Round, RoundOptions, TextConsole};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let console = TextConsole::new(io::stdin().lock(), io::stdout());
    let mut round = Round::heads_up(console, RoundOptions::default(), seed);

    if let Err(err) = round.start() {
        eprintln!("Round error: {err}");
    }
}
