//! Client side of the remote game service.
//!
//! The service owns secret generation, scoring and round limits. This
//! module only knows how to ask for a new game and how to submit a guess.

mod error;
mod rest_client;
mod types;

pub use error::{ApiError, ApiErrorKind, Operation};
pub use rest_client::RestGameClient;
pub use types::{GuessReply, GuessRequest, NewGame, NewGameRequest};

use async_trait::async_trait;

use crate::games::bulls_cows::{Difficulty, GameId, Guess};

/// The two operations the game service exposes.
#[async_trait]
pub trait GameApi: Send + Sync {
    /// Starts a new game at the given difficulty.
    async fn new_game(&self, difficulty: Difficulty) -> Result<NewGame, ApiError>;

    /// Submits a guess for an existing game.
    async fn guess(&self, game_id: &GameId, guess: &Guess) -> Result<GuessReply, ApiError>;
}
