//! Footer with key hints, transient notices and the disclaimer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub const DISCLAIMER: &str = "Paranoid Scan is an analysis aid, not legal advice. \
Always consult a lawyer before important decisions.";

/// Two rows: hints (or the active notice), then the disclaimer
pub struct Footer<'a> {
    hints: &'a [(&'a str, &'a str)],
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            hints,
            notice: None,
        }
    }

    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    fn hints_line(&self) -> Line<'a> {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, styles::text_muted()));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let top = match self.notice {
            Some(notice) => Line::from(vec![
                Span::raw(" "),
                Span::styled(notice, styles::accent_bold()),
            ]),
            None => self.hints_line(),
        };
        buf.set_line(area.x, area.y, &top, area.width);

        if area.height > 1 {
            let disclaimer = Line::from(Span::styled(format!(" {}", DISCLAIMER), styles::text_muted()));
            buf.set_line(area.x, area.y + 1, &disclaimer, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_footer_shows_hints_and_disclaimer() {
        let mut term = TestTerminal::with_size(120, 2);
        let area = term.area();
        term.render_widget(Footer::new(&[("q", "quit"), ("Enter", "scan")]), area);

        assert!(term.line_contains(0, "q quit"));
        assert!(term.line_contains(0, "Enter scan"));
        assert!(term.line_contains(1, "not legal advice"));
    }

    #[test]
    fn test_notice_replaces_hints() {
        let mut term = TestTerminal::with_size(120, 2);
        let area = term.area();
        term.render_widget(
            Footer::new(&[("q", "quit")]).notice(Some("Generating PDF report...")),
            area,
        );

        assert!(term.line_contains(0, "Generating PDF report..."));
        assert!(!term.line_contains(0, "q quit"));
    }
}
