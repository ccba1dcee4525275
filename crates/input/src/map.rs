//! Key mapping from terminal events to session commands.

use crate::types::Command;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Anything the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Forward to the session
    Command(Command),
    /// Throw the session away and start a fresh one
    Restart,
    Quit,
    /// Terminal size changed; force a full redraw
    Resize,
}

/// Map keyboard input to session commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Right)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::SoftDrop)
        }

        // Space rotates, as in the classic desktop version.
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::RotateCw),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should start a new session.
pub fn should_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

/// Map any terminal event. Key releases are ignored; held keys arrive as
/// terminal auto-repeat and are treated like fresh presses.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if should_quit(*key) {
                Some(InputEvent::Quit)
            } else if should_restart(*key) {
                Some(InputEvent::Restart)
            } else {
                handle_key_event(*key).map(InputEvent::Command)
            }
        }
        Event::Resize(..) => Some(InputEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), Some(Command::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), Some(Command::Right));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), Some(Command::SoftDrop));

        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('H'))), Some(Command::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('d'))), Some(Command::Right));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('J'))), Some(Command::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), Some(Command::RotateCw));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), Some(Command::RotateCw));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('W'))), Some(Command::RotateCw));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_quit_and_restart_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(should_restart(KeyEvent::from(KeyCode::Char('r'))));
        assert!(!should_restart(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_map_event_ignores_release() {
        let press = Event::Key(KeyEvent::from(KeyCode::Left));
        assert_eq!(map_event(&press), Some(InputEvent::Command(Command::Left)));

        let release = Event::Key(KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&release), None);

        assert_eq!(map_event(&Event::Resize(80, 24)), Some(InputEvent::Resize));
        assert_eq!(map_event(&Event::FocusGained), None);
    }

    #[test]
    fn test_quit_wins_over_command_mapping() {
        let ev = Event::Key(KeyEvent::from(KeyCode::Char('Q')));
        assert_eq!(map_event(&ev), Some(InputEvent::Quit));
    }
}
