//! Abstract input key event, independent of terminal library.
//!
//! Keyboard input is converted from crossterm key events at the TUI
//! boundary, keeping this crate free of terminal-specific types.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Action keys
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
