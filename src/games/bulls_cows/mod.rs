//! Bulls & Cows domain: difficulty, phases, guesses and their outcomes.
//!
//! The client never scores guesses itself. Everything in here either
//! describes what the player asked for or records what the server answered.

mod types;
mod validator;

pub use types::{Difficulty, GameId, GuessOutcome, GuessStatus, Phase};
pub use validator::{GUESS_LEN, Guess, InvalidGuess, is_valid_guess};
