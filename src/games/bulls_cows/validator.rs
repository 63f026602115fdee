//! Guess syntax checking.
//!
//! A legal guess is exactly four ASCII digits with no digit repeated.
//! Whitespace is not stripped here; callers trim before validating.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of digits in a guess.
pub const GUESS_LEN: usize = 4;

/// Returns true if `input` is four distinct decimal digits.
#[instrument(level = "trace")]
pub fn is_valid_guess(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != GUESS_LEN {
        return false;
    }

    let mut seen = [false; 10];
    for byte in bytes {
        if !byte.is_ascii_digit() {
            return false;
        }
        let digit = usize::from(byte - b'0');
        if seen[digit] {
            return false;
        }
        seen[digit] = true;
    }
    true
}

/// A guess that has passed [`is_valid_guess`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "String", into = "String")]
pub struct Guess(String);

impl Guess {
    /// Validates `input` as-is.
    #[instrument(level = "debug")]
    pub fn parse(input: &str) -> Result<Self, InvalidGuess> {
        if is_valid_guess(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(InvalidGuess::new(input))
        }
    }

    /// Returns the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Guess {
    type Error = InvalidGuess;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Guess> for String {
    fn from(guess: Guess) -> Self {
        guess.0
    }
}

/// Rejected guess text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid guess: must be 4 digits with no repeats.")]
pub struct InvalidGuess {
    input: String,
}

impl InvalidGuess {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The text that failed validation.
    pub fn input(&self) -> &str {
        &self.input
    }
}
