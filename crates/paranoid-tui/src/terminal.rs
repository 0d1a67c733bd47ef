//! Terminal setup and restoration

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use paranoid_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Turn on bracketed paste so pastes and file drops arrive as one event
pub fn enable_paste() -> Result<()> {
    execute!(std::io::stdout(), EnableBracketedPaste)
        .map_err(|e| Error::terminal(format!("Failed to enable bracketed paste: {}", e)))
}

pub fn disable_paste() {
    if let Err(e) = execute!(std::io::stdout(), DisableBracketedPaste) {
        warn!("Failed to disable bracketed paste: {}", e);
    }
}
