//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use paranoid_app::config::IconMode;
use paranoid_app::SeverityIcon;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn shield(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f132}", // nf-fa-shield
            IconMode::Unicode => "\u{25c8}",   // ◈
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{2139}",   // ℹ
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn file(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f15c}", // nf-fa-file_text
            IconMode::Unicode => "\u{2630}",   // ☰
        }
    }

    pub fn expanded(&self) -> &'static str {
        "\u{25be}" // ▾
    }

    pub fn collapsed(&self) -> &'static str {
        "\u{25b8}" // ▸
    }

    /// Glyph for a severity icon kind
    pub fn severity(&self, icon: SeverityIcon) -> &'static str {
        match icon {
            SeverityIcon::Alert => self.alert(),
            SeverityIcon::Info => self.info(),
            SeverityIcon::Check => self.check(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_severity_glyphs() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.severity(SeverityIcon::Alert), "\u{26a0}");
        assert_eq!(icons.severity(SeverityIcon::Info), "\u{2139}");
        assert_eq!(icons.severity(SeverityIcon::Check), "\u{2713}");
    }

    #[test]
    fn test_nerd_font_glyphs_differ_from_unicode() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.alert(), nerd.alert());
        assert_ne!(unicode.check(), nerd.check());
    }
}
