//! Request and response bodies exchanged with the game service.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::games::bulls_cows::{Difficulty, GameId, Guess, GuessOutcome, GuessStatus};

/// Body of `POST /api/game/new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct NewGameRequest {
    /// Requested difficulty.
    difficulty: Difficulty,
}

/// Successful answer to a new-game request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    /// Identifier for subsequent guesses.
    game_id: GameId,
    /// Rounds allowed in this game.
    max_rounds: u32,
    /// Starting round, normally 1.
    round: u32,
}

/// Body of `POST /api/game/{id}/guess`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GuessRequest {
    /// The validated guess.
    guess: Guess,
}

/// Successful answer to a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct GuessReply {
    /// Digits right in value and position.
    bulls: u32,
    /// Digits right in value, wrong position.
    cows: u32,
    /// Round after this guess.
    round: u32,
    /// Round limit.
    max_rounds: u32,
    /// Game status after this guess.
    status: GuessStatus,
    /// Free-text message.
    #[serde(default)]
    message: String,
    /// Secret, normally only sent once the game is over.
    #[serde(default)]
    answer: Option<String>,
}

impl GuessReply {
    /// Combines this reply with the guess that produced it.
    pub fn into_outcome(self, guess: Guess) -> GuessOutcome {
        GuessOutcome::new(
            guess,
            self.bulls,
            self.cows,
            self.round,
            self.max_rounds,
            self.status,
            self.message,
            self.answer,
        )
    }
}
