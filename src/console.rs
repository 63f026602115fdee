//! Line-oriented front end: one command per line on stdin.
//!
//! Commands: `new [easy|medium|hard]` (alias `restart`), a 4-digit guess,
//! `help`, `quit`.

use std::str::FromStr;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

use crate::api::GameApi;
use crate::games::bulls_cows::{Difficulty, Phase};
use crate::machine::{Rejection, SessionMachine, Snapshot};

const HELP: &str = "Commands: new [easy|medium|hard], <4 digits>, help, quit";
const DIFFICULTY_LOCKED: &str = "Difficulty is locked while a game is in progress.";

/// A running game keeps its difficulty; a restart must ask for the same one.
fn difficulty_locked(machine: &SessionMachine, requested: Difficulty) -> bool {
    machine.phase() == Phase::Playing
        && machine
            .session()
            .is_some_and(|session| *session.difficulty() != requested)
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Start a game, optionally at a different difficulty.
    New(Option<Difficulty>),
    /// Submit a guess (validated by the machine, not here).
    Guess(String),
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
    /// Blank line.
    Nothing,
    /// `new` with an unknown difficulty.
    Unknown(String),
}

impl ConsoleCommand {
    /// Parses one line of input.
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Self::Nothing;
        };
        match first.to_ascii_lowercase().as_str() {
            "new" | "restart" => match words.next() {
                None => Self::New(None),
                Some(level) => match Difficulty::from_str(level) {
                    Ok(difficulty) => Self::New(Some(difficulty)),
                    Err(_) => Self::Unknown(level.to_string()),
                },
            },
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Runs the console loop until `quit` or end of input.
#[instrument(skip_all, fields(difficulty = %difficulty))]
pub async fn run_console<A, R, W>(
    api: &A,
    difficulty: Difficulty,
    reader: R,
    mut writer: W,
) -> Result<()>
where
    A: GameApi + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Starting console session");
    let mut machine = SessionMachine::new();
    let mut difficulty = difficulty;
    let mut lines = reader.lines();

    writer
        .write_all(format!("Bulls & Cows ({}). {}\n", difficulty, HELP).as_bytes())
        .await?;
    writer.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let command = ConsoleCommand::parse(&line);
        debug!(?command, "Console command");

        let output = match command {
            ConsoleCommand::Nothing => continue,
            ConsoleCommand::Quit => break,
            ConsoleCommand::Help => HELP.to_string(),
            ConsoleCommand::Unknown(level) => {
                format!("Unknown difficulty '{}'. Use easy, medium or hard.", level)
            }
            ConsoleCommand::New(level) => {
                let requested = level.unwrap_or(difficulty);
                if difficulty_locked(&machine, requested) {
                    DIFFICULTY_LOCKED.to_string()
                } else {
                    difficulty = requested;
                    if let Err(rejection) = machine.start(api, difficulty).await {
                        debug!(%rejection, "Start ignored");
                    }
                    render_start(&machine.snapshot())
                }
            }
            ConsoleCommand::Guess(text) => match machine.submit_guess(api, &text).await {
                Ok(()) => render_guess(&machine.snapshot()),
                Err(Rejection::InvalidGuess(invalid)) => invalid.to_string(),
                Err(Rejection::NotPlaying) => {
                    format!("No game in progress. Type 'new' to start ({}).", difficulty)
                }
                Err(rejection) => {
                    debug!(%rejection, "Guess ignored");
                    continue;
                }
            },
        };

        writer.write_all(output.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    info!("Console session ended");
    Ok(())
}

/// Text after a start attempt.
pub fn render_start(snapshot: &Snapshot) -> String {
    if let Some(error) = snapshot.error() {
        return format!("Error: {}", error);
    }
    match (snapshot.session(), snapshot.display_round()) {
        (Some(session), Some((round, max_rounds))) => format!(
            "New {} game {} started. Round {}/{}.",
            session.difficulty(),
            session.id(),
            round,
            max_rounds
        ),
        _ => "No game started.".to_string(),
    }
}

/// Text after a guess attempt.
pub fn render_guess(snapshot: &Snapshot) -> String {
    if let Some(error) = snapshot.error() {
        return format!("Error: {}", error);
    }
    let Some(latest) = snapshot.history().first() else {
        return String::new();
    };

    let mut text = format!(
        "{}: {} bulls, {} cows.",
        latest.guess(),
        latest.bulls(),
        latest.cows()
    );
    match snapshot.phase() {
        Phase::Playing => {
            if let Some((round, max_rounds)) = snapshot.display_round() {
                text.push_str(&format!(" Round {}/{}.", round, max_rounds));
            }
        }
        phase => {
            text.push(' ');
            text.push_str(phase.status_label());
            if let Some(answer) = snapshot.revealed_answer() {
                text.push_str(&format!(" Answer: {}.", answer));
            }
            text.push_str(&format!(" Type 'new' for a {}.", phase.start_label()));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ConsoleCommand::parse("new"), ConsoleCommand::New(None));
        assert_eq!(
            ConsoleCommand::parse("NEW hard"),
            ConsoleCommand::New(Some(Difficulty::Hard))
        );
        assert_eq!(
            ConsoleCommand::parse("restart extreme"),
            ConsoleCommand::Unknown("extreme".to_string())
        );
        assert_eq!(ConsoleCommand::parse("  "), ConsoleCommand::Nothing);
        assert_eq!(ConsoleCommand::parse("quit"), ConsoleCommand::Quit);
        assert_eq!(
            ConsoleCommand::parse(" 1234 "),
            ConsoleCommand::Guess(" 1234 ".to_string())
        );
    }
}
