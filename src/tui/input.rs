//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::games::bulls_cows::Phase;
use crate::machine::Snapshot;

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// New game, or restart the current one.
    StartGame,
    /// Pick the next difficulty.
    NextDifficulty,
    /// Pick the previous difficulty.
    PreviousDifficulty,
    /// Append a character to the guess.
    Type(char),
    /// Delete the last guess character.
    Backspace,
    /// Submit the guess.
    Submit,
    /// Close the end-of-game popup.
    DismissModal,
    /// Leave the application.
    Quit,
}

/// Maps a key press to an intent, given what is on screen.
///
/// While playing, printable keys go to the guess field, so starting over
/// needs Ctrl+N there; outside of play a bare `n` does it.
pub fn map_key(key: KeyEvent, snapshot: &Snapshot, modal_open: bool) -> Option<Intent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return Some(Intent::Quit),
        KeyCode::Esc if !modal_open => return Some(Intent::Quit),
        KeyCode::Char('n') if ctrl => return Some(Intent::StartGame),
        _ => {}
    }

    if modal_open {
        return Some(Intent::DismissModal);
    }

    if *snapshot.phase() == Phase::Playing {
        return match key.code {
            KeyCode::Enter => Some(Intent::Submit),
            KeyCode::Backspace => Some(Intent::Backspace),
            KeyCode::Char(c) if !ctrl => Some(Intent::Type(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('n') | KeyCode::Enter => Some(Intent::StartGame),
        KeyCode::Right | KeyCode::Down => Some(Intent::NextDifficulty),
        KeyCode::Left | KeyCode::Up => Some(Intent::PreviousDifficulty),
        KeyCode::Char('q') => Some(Intent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NewGame;
    use crate::games::bulls_cows::{Difficulty, GameId};
    use crate::machine::{CallOutcome, SessionMachine};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn playing() -> Snapshot {
        let mut machine = SessionMachine::new();
        machine.begin_start(Difficulty::Easy).unwrap();
        machine.finish(CallOutcome::Started {
            difficulty: Difficulty::Easy,
            result: Ok(NewGame::new(GameId::new("g1"), 7, 1)),
        });
        machine.snapshot()
    }

    #[test]
    fn test_idle_keys() {
        let idle = SessionMachine::new().snapshot();
        assert_eq!(map_key(key(KeyCode::Char('n')), &idle, false), Some(Intent::StartGame));
        assert_eq!(map_key(key(KeyCode::Right), &idle, false), Some(Intent::NextDifficulty));
        assert_eq!(map_key(key(KeyCode::Char('q')), &idle, false), Some(Intent::Quit));
        assert_eq!(map_key(key(KeyCode::Char('5')), &idle, false), None);
    }

    #[test]
    fn test_playing_keys_edit_the_guess() {
        let snapshot = playing();
        assert_eq!(map_key(key(KeyCode::Char('n')), &snapshot, false), Some(Intent::Type('n')));
        assert_eq!(map_key(key(KeyCode::Char('7')), &snapshot, false), Some(Intent::Type('7')));
        assert_eq!(map_key(key(KeyCode::Enter), &snapshot, false), Some(Intent::Submit));
        assert_eq!(map_key(key(KeyCode::Right), &snapshot, false), None);
        assert_eq!(map_key(ctrl('n'), &snapshot, false), Some(Intent::StartGame));
    }

    #[test]
    fn test_modal_swallows_keys() {
        let snapshot = playing();
        assert_eq!(map_key(key(KeyCode::Esc), &snapshot, true), Some(Intent::DismissModal));
        assert_eq!(map_key(key(KeyCode::Char('q')), &snapshot, true), Some(Intent::DismissModal));
        assert_eq!(map_key(ctrl('c'), &snapshot, true), Some(Intent::Quit));
    }
}
