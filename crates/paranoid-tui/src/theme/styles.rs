//! Semantic style builders.

use paranoid_core::RiskLevel;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Key hint in footers and call-to-action lines
pub fn keybinding() -> Style {
    Style::default().fg(palette::RISK_MEDIUM)
}

/// "Black on Cyan" - selected entries and the active page tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Risk styles ---

/// Foreground color of a risk bucket: red, yellow, green
pub fn risk_color(level: RiskLevel) -> ratatui::style::Color {
    match level {
        RiskLevel::High => palette::RISK_HIGH,
        RiskLevel::Medium => palette::RISK_MEDIUM,
        RiskLevel::Low => palette::RISK_LOW,
    }
}

pub fn severity_style(level: RiskLevel) -> Style {
    Style::default()
        .fg(risk_color(level))
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn titled_block(title: &str) -> Block<'_> {
    glass_block(false).title(title).title_style(text_secondary())
}

pub fn modal_block(title: &str) -> Block<'_> {
    glass_block(true)
        .title(title)
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors() {
        assert_eq!(risk_color(RiskLevel::High), palette::RISK_HIGH);
        assert_eq!(risk_color(RiskLevel::Medium), palette::RISK_MEDIUM);
        assert_eq!(risk_color(RiskLevel::Low), palette::RISK_LOW);
    }

    #[test]
    fn test_severity_style_is_bold() {
        let style = severity_style(RiskLevel::High);
        assert_eq!(style.fg, Some(palette::RISK_HIGH));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }
}
