//! Centralized theme for the scanner TUI.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Glyphs with Unicode and Nerd Font variants

pub mod icons;
pub mod palette;
pub mod styles;
