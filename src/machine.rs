//! Session state machine: the only place session data changes.
//!
//! Network-bound transitions are split in two. `begin_*` checks the
//! preconditions, marks the machine busy and hands back a [`PendingCall`].
//! The caller runs it wherever it likes (inline or on a spawned task) and
//! feeds the resulting [`CallOutcome`] to [`SessionMachine::finish`], which
//! applies it and clears the busy flag. Only one call can be outstanding,
//! so outcomes land in the order their requests were issued.
//!
//! Presentation layers read state through [`SessionMachine::snapshot`].

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::api::{ApiError, GameApi, GuessReply, NewGame, Operation};
use crate::games::bulls_cows::{
    Difficulty, GameId, Guess, GuessOutcome, InvalidGuess, Phase, is_valid_guess,
};
use crate::session::GameSession;

/// Why an intent was not turned into a network call.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Rejection {
    /// Another call is still outstanding.
    #[display("a request is already in flight")]
    Busy,
    /// Guesses are only accepted while playing.
    #[display("no game in progress")]
    NotPlaying,
    /// Playing without a session id; should be unreachable.
    #[display("no active session")]
    NoSession,
    /// The guess text failed validation.
    #[display("{_0}")]
    InvalidGuess(InvalidGuess),
}

impl Rejection {
    /// Guard rejections are silent; only validation failures reach the player.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::InvalidGuess(_))
    }
}

/// A service call the machine has committed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingCall {
    /// Ask the service for a new game.
    Start {
        /// Requested difficulty.
        difficulty: Difficulty,
    },
    /// Submit a guess for the current game.
    Guess {
        /// Game the guess belongs to.
        game_id: GameId,
        /// Validated guess.
        guess: Guess,
    },
}

impl PendingCall {
    /// Runs the call against `api`. Never fails; errors travel in the outcome.
    #[instrument(skip(api))]
    pub async fn execute<A: GameApi + ?Sized>(self, api: &A) -> CallOutcome {
        match self {
            Self::Start { difficulty } => {
                let result = api.new_game(difficulty).await;
                CallOutcome::Started { difficulty, result }
            }
            Self::Guess { game_id, guess } => {
                let result = api.guess(&game_id, &guess).await;
                CallOutcome::Guessed {
                    game_id,
                    guess,
                    result,
                }
            }
        }
    }
}

/// Settled result of a [`PendingCall`].
#[derive(Debug, Clone)]
pub enum CallOutcome {
    /// New-game call settled.
    Started {
        /// Difficulty that was requested.
        difficulty: Difficulty,
        /// Service answer.
        result: Result<NewGame, ApiError>,
    },
    /// Guess call settled.
    Guessed {
        /// Game the guess was made in.
        game_id: GameId,
        /// The submitted guess.
        guess: Guess,
        /// Service answer.
        result: Result<GuessReply, ApiError>,
    },
}

/// Read-only view of everything a presentation layer may render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Snapshot {
    /// Current phase.
    phase: Phase,
    /// Live session, absent while idle.
    session: Option<GameSession>,
    /// Guess text being edited.
    input: String,
    /// True while a call is outstanding.
    busy: bool,
    /// Last error to show, if any.
    error: Option<String>,
}

impl Snapshot {
    /// Outcomes, most recent first.
    pub fn history(&self) -> &[GuessOutcome] {
        self.session
            .as_ref()
            .map(|s| s.history().as_slice())
            .unwrap_or_default()
    }

    /// `(round, max_rounds)` with the round clamped for display.
    pub fn display_round(&self) -> Option<(u32, u32)> {
        self.session
            .as_ref()
            .map(|s| (s.display_round(), *s.max_rounds()))
    }

    /// Secret revealed at the end of the session, if any.
    pub fn revealed_answer(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.revealed_answer().as_deref())
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Playing && !self.busy && is_valid_guess(self.input.trim())
    }

    /// Whether the current input deserves a validation warning.
    pub fn input_is_suspect(&self) -> bool {
        !self.input.is_empty() && !is_valid_guess(self.input.trim())
    }
}

/// Client-side lifecycle of one Bulls & Cows session.
#[derive(Debug, Clone, Default)]
pub struct SessionMachine {
    session: Option<GameSession>,
    input: String,
    busy: bool,
    error: Option<String>,
}

impl SessionMachine {
    /// Creates an idle machine.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating session machine");
        Self::default()
    }

    /// Current phase; `Idle` until the first game starts.
    pub fn phase(&self) -> Phase {
        self.session
            .as_ref()
            .map(|s| *s.phase())
            .unwrap_or(Phase::Idle)
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Guess text being edited.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// True while a call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Last error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Owned copy of the observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            session: self.session.clone(),
            input: self.input.clone(),
            busy: self.busy,
            error: self.error.clone(),
        }
    }

    /// Replaces the guess text. Only possible while playing and idle on the wire.
    #[instrument(skip(self, text))]
    pub fn edit_guess(&mut self, text: impl Into<String>) -> Result<(), Rejection> {
        if self.busy {
            return Err(Rejection::Busy);
        }
        if self.phase() != Phase::Playing {
            return Err(Rejection::NotPlaying);
        }
        self.input = text.into();
        Ok(())
    }

    /// Commits to a new-game call. Valid from every phase unless busy.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn begin_start(&mut self, difficulty: Difficulty) -> Result<PendingCall, Rejection> {
        if self.busy {
            debug!("Ignoring start while busy");
            return Err(Rejection::Busy);
        }
        self.error = None;
        self.busy = true;
        info!("Starting new game");
        Ok(PendingCall::Start { difficulty })
    }

    /// Commits to submitting the current guess text.
    ///
    /// Busy, not-playing and missing-session rejections leave the machine
    /// untouched. A validation failure records the message for display.
    #[instrument(skip(self), fields(phase = %self.phase(), input = %self.input))]
    pub fn begin_guess(&mut self) -> Result<PendingCall, Rejection> {
        if self.busy {
            debug!("Ignoring guess while busy");
            return Err(Rejection::Busy);
        }
        if self.phase() != Phase::Playing {
            debug!("Ignoring guess outside of play");
            return Err(Rejection::NotPlaying);
        }
        let game_id = match self.session.as_ref().map(|s| s.id()) {
            Some(id) if !id.is_empty() => id.clone(),
            _ => {
                warn!("Playing without a session id");
                return Err(Rejection::NoSession);
            }
        };

        self.error = None;
        let guess = match Guess::parse(self.input.trim()) {
            Ok(guess) => guess,
            Err(invalid) => {
                debug!("Guess failed validation");
                self.error = Some(invalid.to_string());
                return Err(Rejection::InvalidGuess(invalid));
            }
        };

        self.busy = true;
        info!(game_id = %game_id, guess = %guess, "Submitting guess");
        Ok(PendingCall::Guess { game_id, guess })
    }

    /// Applies a settled call and clears the busy flag.
    #[instrument(skip(self, outcome))]
    pub fn finish(&mut self, outcome: CallOutcome) {
        self.busy = false;
        match outcome {
            CallOutcome::Started { difficulty, result } => match result {
                Ok(game) => {
                    info!(
                        game_id = %game.game_id(),
                        max_rounds = game.max_rounds(),
                        round = game.round(),
                        "Game started"
                    );
                    self.session = Some(GameSession::start(
                        game.game_id().clone(),
                        difficulty,
                        *game.round(),
                        *game.max_rounds(),
                    ));
                    self.input.clear();
                    self.error = None;
                }
                Err(e) => {
                    warn!(error = %e, "New game failed");
                    self.error = Some(e.user_message(Operation::NewGame));
                }
            },
            CallOutcome::Guessed {
                game_id,
                guess,
                result,
            } => {
                let Some(session) = self.session.as_mut().filter(|s| *s.id() == game_id) else {
                    warn!(game_id = %game_id, "Dropping outcome for a session that is gone");
                    return;
                };
                match result {
                    Ok(reply) => {
                        let outcome = reply.into_outcome(guess);
                        info!(
                            bulls = outcome.bulls(),
                            cows = outcome.cows(),
                            round = outcome.round(),
                            status = %outcome.status(),
                            "Guess applied"
                        );
                        session.record(outcome);
                        self.input.clear();
                        self.error = None;
                    }
                    Err(e) => {
                        warn!(error = %e, "Guess failed");
                        self.error = Some(e.user_message(Operation::Guess));
                    }
                }
            }
        }
    }

    /// Starts a new game, running the call inline.
    #[instrument(skip(self, api))]
    pub async fn start<A: GameApi + ?Sized>(
        &mut self,
        api: &A,
        difficulty: Difficulty,
    ) -> Result<(), Rejection> {
        let call = self.begin_start(difficulty)?;
        let outcome = call.execute(api).await;
        self.finish(outcome);
        Ok(())
    }

    /// Sets the guess text and submits it, running the call inline.
    ///
    /// Outside of play (or while busy) nothing changes, the text included.
    #[instrument(skip(self, api))]
    pub async fn submit_guess<A: GameApi + ?Sized>(
        &mut self,
        api: &A,
        text: &str,
    ) -> Result<(), Rejection> {
        self.edit_guess(text)?;
        let call = self.begin_guess()?;
        let outcome = call.execute(api).await;
        self.finish(outcome);
        Ok(())
    }
}
