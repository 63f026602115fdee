//! HTTP client for the game service REST API.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, instrument};

use super::{ApiError, ApiErrorKind, GameApi, GuessReply, GuessRequest, NewGame, NewGameRequest};
use crate::games::bulls_cows::{Difficulty, GameId, Guess};

/// Game service client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct RestGameClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestGameClient {
    /// Creates a client for the service at `base_url`.
    #[instrument(skip_all)]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!(base_url = %base_url, "Creating game service client");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Base address requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `body` as JSON and decodes a JSON success response.
    ///
    /// Any non-success status is an error, whatever the body looks like.
    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::new(ApiErrorKind::Transport, e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::new(ApiErrorKind::Transport, e.to_string()))?;
        debug!(status = %status, body = %text, "Got response");

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| ApiError::new(ApiErrorKind::Decode, e.to_string()))
    }
}

#[async_trait]
impl GameApi for RestGameClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn new_game(&self, difficulty: Difficulty) -> Result<NewGame, ApiError> {
        info!("Requesting new game");
        let url = format!("{}/api/game/new", self.base_url);
        let game: NewGame = self.post_json(&url, &NewGameRequest::new(difficulty)).await?;
        info!(
            game_id = %game.game_id(),
            max_rounds = game.max_rounds(),
            "New game started"
        );
        Ok(game)
    }

    #[instrument(
        skip(self, game_id, guess),
        fields(base_url = %self.base_url, game_id = %game_id, guess = %guess)
    )]
    async fn guess(&self, game_id: &GameId, guess: &Guess) -> Result<GuessReply, ApiError> {
        info!("Submitting guess");
        let url = format!("{}/api/game/{}/guess", self.base_url, game_id);
        let reply: GuessReply = self
            .post_json(&url, &GuessRequest::new(guess.clone()))
            .await?;
        info!(
            bulls = reply.bulls(),
            cows = reply.cows(),
            round = reply.round(),
            status = %reply.status(),
            "Guess scored"
        );
        Ok(reply)
    }
}
