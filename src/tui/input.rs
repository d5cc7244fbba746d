//! Key handling for the terminal client.

use crossterm::event::KeyCode;

/// High-level action resolved from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Exit the client.
    Quit,
    /// Start a fresh session.
    Restart,
    /// Move the drop cursor one column left.
    CursorLeft,
    /// Move the drop cursor one column right.
    CursorRight,
    /// Drop in the given column.
    Drop(usize),
    /// Drop in the cursor column.
    DropAtCursor,
    /// Key is not bound.
    None,
}

/// Maps a key press to a client action.
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') => Action::DropAtCursor,
        KeyCode::Char(c) if c.is_ascii_digit() => match c.to_digit(10) {
            Some(digit) if (1..=7).contains(&digit) => Action::Drop(digit as usize - 1),
            _ => Action::None,
        },
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_columns() {
        assert_eq!(action_for(KeyCode::Char('1')), Action::Drop(0));
        assert_eq!(action_for(KeyCode::Char('7')), Action::Drop(6));
        assert_eq!(action_for(KeyCode::Char('8')), Action::None);
        assert_eq!(action_for(KeyCode::Char('0')), Action::None);
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        assert_eq!(action_for(KeyCode::Char('x')), Action::None);
        assert_eq!(action_for(KeyCode::Up), Action::None);
    }
}
