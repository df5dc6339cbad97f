//! Key bindings: maps key events to application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application-level actions triggered by key events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Show every note, or hide them all again.
    ToggleReveal,
    /// Insert a character in the input field.
    InputInsert(char),
    /// Delete character before cursor.
    InputBackspace,
    /// Delete character at cursor.
    InputDelete,
    /// Move cursor in the input field.
    InputLeft,
    InputRight,
    InputHome,
    InputEnd,
}

/// Map a key event to an action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::ToggleReveal),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(Action::Quit),
        KeyCode::Char(c) => Some(Action::InputInsert(c)),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Delete => Some(Action::InputDelete),
        KeyCode::Left => Some(Action::InputLeft),
        KeyCode::Right => Some(Action::InputRight),
        KeyCode::Home => Some(Action::InputHome),
        KeyCode::End => Some(Action::InputEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl_key(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::Quit));
        assert_eq!(map_key(ctrl_key('c')), Some(Action::Quit));
        assert_eq!(map_key(ctrl_key('q')), Some(Action::Quit));
    }

    #[test]
    fn ctrl_r_toggles_reveal() {
        assert_eq!(map_key(ctrl_key('r')), Some(Action::ToggleReveal));
    }

    #[test]
    fn plain_chars_go_to_input() {
        assert_eq!(
            map_key(key(KeyCode::Char('r'))),
            Some(Action::InputInsert('r'))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('#'))),
            Some(Action::InputInsert('#'))
        );
    }

    #[test]
    fn editing_keys() {
        assert_eq!(map_key(key(KeyCode::Backspace)), Some(Action::InputBackspace));
        assert_eq!(map_key(key(KeyCode::Delete)), Some(Action::InputDelete));
        assert_eq!(map_key(key(KeyCode::Left)), Some(Action::InputLeft));
        assert_eq!(map_key(key(KeyCode::Right)), Some(Action::InputRight));
        assert_eq!(map_key(key(KeyCode::Home)), Some(Action::InputHome));
        assert_eq!(map_key(key(KeyCode::End)), Some(Action::InputEnd));
    }

    #[test]
    fn unbound_keys() {
        assert_eq!(map_key(key(KeyCode::F(1))), None);
        assert_eq!(map_key(ctrl_key('x')), None);
    }
}
