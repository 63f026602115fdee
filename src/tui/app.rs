//! Application state and logic.

use tracing::{debug, info, instrument};

use crate::games::bulls_cows::{Difficulty, Phase};
use crate::machine::{CallOutcome, PendingCall, SessionMachine, Snapshot};

use super::input::Intent;

/// Main application state.
///
/// Holds what only the terminal front end cares about (the difficulty
/// picker, the end-of-game popup, quitting) around the session machine.
#[derive(Debug)]
pub struct App {
    machine: SessionMachine,
    difficulty: Difficulty,
    modal_open: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with `difficulty` preselected.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            machine: SessionMachine::new(),
            difficulty,
            modal_open: false,
            should_quit: false,
        }
    }

    /// Gets the current machine state.
    pub fn snapshot(&self) -> Snapshot {
        self.machine.snapshot()
    }

    /// Difficulty the next game will use.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether the end-of-game popup is showing.
    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Changes the difficulty. Refused mid-game and while a call is out.
    #[instrument(skip(self))]
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.machine.phase() == Phase::Playing || self.machine.is_busy() {
            debug!("Difficulty is locked");
            return false;
        }
        self.difficulty = difficulty;
        true
    }

    /// Handles a user intent, returning a call to run if one was committed.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: Intent) -> Option<PendingCall> {
        match intent {
            Intent::StartGame => {
                let call = self.machine.begin_start(self.difficulty).ok();
                if call.is_some() {
                    self.modal_open = false;
                }
                call
            }
            Intent::NextDifficulty => {
                self.select_difficulty(self.difficulty.next());
                None
            }
            Intent::PreviousDifficulty => {
                self.select_difficulty(self.difficulty.previous());
                None
            }
            Intent::Type(c) => {
                let mut text = self.machine.input().to_string();
                text.push(c);
                if let Err(rejection) = self.machine.edit_guess(text) {
                    debug!(%rejection, "Edit ignored");
                }
                None
            }
            Intent::Backspace => {
                let mut text = self.machine.input().to_string();
                text.pop();
                if let Err(rejection) = self.machine.edit_guess(text) {
                    debug!(%rejection, "Edit ignored");
                }
                None
            }
            Intent::Submit => self.machine.begin_guess().ok(),
            Intent::DismissModal => {
                self.modal_open = false;
                None
            }
            Intent::Quit => {
                info!("User quit");
                self.should_quit = true;
                None
            }
        }
    }

    /// Applies a settled call; opens the popup when the game just ended.
    #[instrument(skip(self, outcome))]
    pub fn apply(&mut self, outcome: CallOutcome) {
        let was_playing = self.machine.phase() == Phase::Playing;
        self.machine.finish(outcome);
        if was_playing && self.machine.phase().is_terminal() {
            info!(phase = %self.machine.phase(), "Game over");
            self.modal_open = true;
        }
    }
}
