//! The single live game session held by the client.

use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::games::bulls_cows::{Difficulty, GameId, GuessOutcome, Phase};

/// One game attempt, from the server's "new game" answer to its final guess.
///
/// Counters mirror what the server reported last. The client never
/// corrects them; see [`GameSession::display_round`] for the only clamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameSession {
    /// Server-issued identifier.
    id: GameId,
    /// Difficulty the session was started with.
    difficulty: Difficulty,
    /// Current round as reported by the server.
    round: u32,
    /// Round limit as reported by the server.
    max_rounds: u32,
    /// Lifecycle stage.
    phase: Phase,
    /// Outcomes, most recent first.
    history: Vec<GuessOutcome>,
    /// Secret revealed by the final outcome, if the server sent one.
    revealed_answer: Option<String>,
}

impl GameSession {
    /// Creates a freshly started session.
    #[instrument(fields(game_id = %id))]
    pub(crate) fn start(id: GameId, difficulty: Difficulty, round: u32, max_rounds: u32) -> Self {
        info!("Creating new game session");
        Self {
            id,
            difficulty,
            round,
            max_rounds,
            phase: Phase::Playing,
            history: Vec::new(),
            revealed_answer: None,
        }
    }

    /// Applies a server outcome: counters, phase, history and answer.
    #[instrument(skip(self, outcome), fields(game_id = %self.id, status = %outcome.status()))]
    pub(crate) fn record(&mut self, outcome: GuessOutcome) {
        self.round = *outcome.round();
        self.max_rounds = *outcome.max_rounds();
        self.phase = Phase::from(*outcome.status());
        if self.phase.is_terminal() {
            self.revealed_answer = outcome.answer().clone();
            debug!(answer_known = self.revealed_answer.is_some(), "Session finished");
        }
        self.history.insert(0, outcome);
    }

    /// Round for display, never above `max_rounds`.
    pub fn display_round(&self) -> u32 {
        self.round.min(self.max_rounds)
    }

    /// The most recent outcome, if any guess was made.
    pub fn latest(&self) -> Option<&GuessOutcome> {
        self.history.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::bulls_cows::{Guess, GuessStatus};

    fn outcome(guess: &str, round: u32, status: GuessStatus, answer: Option<&str>) -> GuessOutcome {
        GuessOutcome::new(
            Guess::parse(guess).unwrap(),
            1,
            1,
            round,
            7,
            status,
            String::new(),
            answer.map(str::to_string),
        )
    }

    #[test]
    fn test_record_prepends() {
        let mut session = GameSession::start(GameId::new("g"), Difficulty::Easy, 1, 7);
        session.record(outcome("1234", 2, GuessStatus::Playing, None));
        session.record(outcome("5678", 3, GuessStatus::Playing, None));

        let guesses: Vec<_> = session
            .history()
            .iter()
            .map(|o| o.guess().as_str().to_string())
            .collect();
        assert_eq!(guesses, ["5678", "1234"]);
        assert_eq!(*session.round(), 3);
        assert_eq!(session.latest().map(|o| *o.round()), Some(3));
    }

    #[test]
    fn test_answer_only_kept_on_terminal_outcome() {
        let mut session = GameSession::start(GameId::new("g"), Difficulty::Easy, 1, 7);
        session.record(outcome("1234", 2, GuessStatus::Playing, Some("9876")));
        assert_eq!(session.revealed_answer(), &None);

        session.record(outcome("9876", 3, GuessStatus::Won, Some("9876")));
        assert_eq!(session.revealed_answer().as_deref(), Some("9876"));
        assert_eq!(*session.phase(), Phase::Won);
    }

    #[test]
    fn test_display_round_is_clamped_but_stored_round_is_not() {
        let mut session = GameSession::start(GameId::new("g"), Difficulty::Hard, 1, 7);
        session.record(outcome("1234", 8, GuessStatus::Lost, None));
        assert_eq!(*session.round(), 8);
        assert_eq!(session.display_round(), 7);
    }
}
