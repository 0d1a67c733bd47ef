//! Terminal-independent key events.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary,
//! so the update logic and its tests never depend on crossterm.

/// Abstract input key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier (Ctrl+l, Ctrl+c, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    Tab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Ctrl+C, which quits from every page
    pub fn is_interrupt(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}
