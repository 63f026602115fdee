//! Scripted in-memory game service shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bulls_cows::{
    ApiError, ApiErrorKind, Difficulty, GameApi, GameId, Guess, GuessReply, GuessStatus, NewGame,
};

/// A call the fake received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    NewGame(Difficulty),
    Guess(String, String),
}

/// Replays queued answers in order and records every call.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    new_games: Mutex<VecDeque<Result<NewGame, ApiError>>>,
    guesses: Mutex<VecDeque<Result<GuessReply, ApiError>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_game(self, id: &str, max_rounds: u32) -> Self {
        self.new_games
            .lock()
            .unwrap()
            .push_back(Ok(NewGame::new(GameId::new(id), max_rounds, 1)));
        self
    }

    pub fn with_new_game_error(self, error: ApiError) -> Self {
        self.new_games.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn with_reply(self, reply: GuessReply) -> Self {
        self.guesses.lock().unwrap().push_back(Ok(reply));
        self
    }

    pub fn with_guess_error(self, error: ApiError) -> Self {
        self.guesses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GameApi for ScriptedApi {
    async fn new_game(&self, difficulty: Difficulty) -> Result<NewGame, ApiError> {
        self.calls.lock().unwrap().push(Call::NewGame(difficulty));
        self.new_games
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::new(ApiErrorKind::Transport, "script exhausted")))
    }

    async fn guess(&self, game_id: &GameId, guess: &Guess) -> Result<GuessReply, ApiError> {
        self.calls.lock().unwrap().push(Call::Guess(
            game_id.as_str().to_string(),
            guess.as_str().to_string(),
        ));
        self.guesses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::new(ApiErrorKind::Transport, "script exhausted")))
    }
}

pub fn reply(
    bulls: u32,
    cows: u32,
    round: u32,
    status: GuessStatus,
    answer: Option<&str>,
) -> GuessReply {
    GuessReply::new(
        bulls,
        cows,
        round,
        7,
        status,
        String::new(),
        answer.map(str::to_string),
    )
}
