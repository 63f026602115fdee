//! Core domain types for Bulls & Cows.

use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::Guess;

/// Difficulty requested when starting a game.
///
/// The server decides what each level means; the client only names it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Easy (the default).
    #[default]
    Easy,
    /// Medium.
    Medium,
    /// Hard.
    Hard,
}

impl Difficulty {
    /// Returns the next difficulty, wrapping around.
    #[instrument]
    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// Returns the previous difficulty, wrapping around.
    #[instrument]
    pub fn previous(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }
}

/// Lifecycle stage of the client-visible session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// No game has been started yet.
    #[default]
    Idle,
    /// A game is running and accepts guesses.
    Playing,
    /// The secret was found.
    Won,
    /// The rounds ran out.
    Lost,
}

impl Phase {
    /// Returns true once the session can no longer accept guesses.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Label for the start control: "Restart" mid-game, "New Game" otherwise.
    pub fn start_label(self) -> &'static str {
        match self {
            Self::Playing => "Restart",
            _ => "New Game",
        }
    }

    /// Human-readable status line.
    pub fn status_label(self) -> &'static str {
        match self {
            Self::Idle => "Not started",
            Self::Playing => "Playing",
            Self::Won => "You won!",
            Self::Lost => "You lost!",
        }
    }
}

/// Status reported by the server after a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GuessStatus {
    /// The game continues.
    Playing,
    /// The guess matched the secret.
    Won,
    /// No rounds remain.
    Lost,
}

impl From<GuessStatus> for Phase {
    fn from(status: GuessStatus) -> Self {
        match status {
            GuessStatus::Playing => Phase::Playing,
            GuessStatus::Won => Phase::Won,
            GuessStatus::Lost => Phase::Lost,
        }
    }
}

/// Opaque game identifier issued by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Wraps a server-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the server handed out an empty identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Feedback for one submitted guess, as reported by the server.
///
/// Outcomes are never edited after creation; the session only prepends
/// new ones to its history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GuessOutcome {
    /// The guess that was submitted.
    guess: Guess,
    /// Digits right in value and position.
    bulls: u32,
    /// Digits right in value, wrong position.
    cows: u32,
    /// Round reported with this outcome.
    round: u32,
    /// Round limit reported with this outcome.
    max_rounds: u32,
    /// Status reported with this outcome.
    status: GuessStatus,
    /// Free-text message from the server.
    message: String,
    /// The secret, only present on the outcome that ends the game.
    answer: Option<String>,
}

impl GuessOutcome {
    /// Returns true if this outcome ended the game.
    pub fn is_final(&self) -> bool {
        Phase::from(self.status).is_terminal()
    }
}
