//! Mapping from terminal events to host inputs.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::types::GameAction;

/// What the host loop should do with a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostInput {
    Game(GameAction),
    Quit,
}

/// Map keyboard input to game actions.
///
/// Space, Up and X flap (and start/restart the game).
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(GameAction::Interact)
        }
        _ => None,
    }
}

/// Map mouse input to game actions. Only a left-button press counts.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<GameAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(GameAction::Interact),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map any terminal event.
///
/// Key repeats and releases are ignored: holding a key must not turn into a
/// stream of flaps.
pub fn map_event(event: &Event) -> Option<HostInput> {
    match event {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            if should_quit(*key) {
                return Some(HostInput::Quit);
            }
            handle_key_event(*key).map(HostInput::Game)
        }
        Event::Mouse(mouse) => handle_mouse_event(*mouse).map(HostInput::Game),
        _ => None,
    }
}
