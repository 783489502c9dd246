use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Restart,
    Quit,
    None,
}

/// Maps key events to game commands, firing once per press
///
/// Terminals that report key releases let the handler ignore a key until it
/// is let go. Without release reports only auto-repeat events can be told
/// apart, so every fresh press fires.
pub struct InputHandler {
    held: HashSet<KeyCode>,
    tracks_releases: bool,
}

impl InputHandler {
    pub fn new(tracks_releases: bool) -> Self {
        Self {
            held: HashSet::new(),
            tracks_releases,
        }
    }

    /// Forget every held key
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> KeyAction {
        let code = normalize(key.code);
        match key.kind {
            KeyEventKind::Release => {
                self.held.remove(&code);
                return KeyAction::None;
            }
            KeyEventKind::Repeat => return KeyAction::None,
            KeyEventKind::Press => {
                if self.tracks_releases && !self.held.insert(code) {
                    return KeyAction::None;
                }
            }
        }

        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::GameAction(Action::Move(Direction::Up)),
            KeyCode::Down => KeyAction::GameAction(Action::Move(Direction::Down)),
            KeyCode::Left => KeyAction::GameAction(Action::Move(Direction::Left)),
            KeyCode::Right => KeyAction::GameAction(Action::Move(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') => KeyAction::GameAction(Action::Move(Direction::Up)),
            KeyCode::Char('s') => KeyAction::GameAction(Action::Move(Direction::Down)),
            KeyCode::Char('a') => KeyAction::GameAction(Action::Move(Direction::Left)),
            KeyCode::Char('d') => KeyAction::GameAction(Action::Move(Direction::Right)),

            // Controls
            KeyCode::Char('p') => KeyAction::GameAction(Action::TogglePause),
            KeyCode::Char('n') => KeyAction::GameAction(Action::ToggleNextFood),
            KeyCode::Char('r') => KeyAction::Restart,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Letter keys match regardless of shift
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
