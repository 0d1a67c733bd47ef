//! Results page: score overview, expandable risk list and advice column

use paranoid_app::report_view::{line_excerpt, DEMO_STATS, NEXT_STEPS};
use paranoid_app::{ReportOverview, ReportViewState, SeverityIcon};
use paranoid_core::{AnalysisResult, Risk, RiskLevel};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::layout::centered;
use crate::theme::{icons::IconSet, palette, styles};

/// Shown on the Results page before any analysis completed
pub struct EmptyReport {
    icons: IconSet,
}

impl EmptyReport {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for EmptyReport {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered(area, 60, 7);
        let block = styles::titled_block(" Report ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(self.icons.info(), styles::accent()),
                Span::styled(" No report yet", styles::text_bright_bold()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Scan a contract to see its risk report here.",
                styles::text_secondary(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", styles::keybinding()),
                Span::styled(" Scan a contract", styles::text_primary()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Full risk report for the last analysis
pub struct ReportView<'a> {
    result: &'a AnalysisResult,
    view: &'a ReportViewState,
    icons: IconSet,
}

impl<'a> ReportView<'a> {
    pub fn new(result: &'a AnalysisResult, view: &'a ReportViewState, icons: IconSet) -> Self {
        Self {
            result,
            view,
            icons,
        }
    }

    fn render_overview(&self, area: Rect, buf: &mut Buffer) {
        let overview = ReportOverview::from_result(self.result);
        let color = styles::risk_color(overview.level);

        let block = styles::glass_block(false).title(Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.shield(), styles::accent()),
            Span::styled(" Risk score ", styles::text_secondary()),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        let [headline, gauge, verdict, counts] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(inner);

        let line = Line::from(vec![
            Span::styled(
                format!("{}/10", overview.score),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", overview.level),
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", overview.label), Style::default().fg(color)),
            Span::styled(
                format!("   {}", self.result.contract_type),
                styles::text_secondary(),
            ),
        ]);
        buf.set_line(headline.x, headline.y, &line, headline.width);

        Gauge::default()
            .gauge_style(Style::default().fg(color).bg(palette::CARD_BG))
            .ratio(overview.score.ratio().clamp(0.0, 1.0))
            .label("")
            .render(gauge, buf);

        Paragraph::new(overview.verdict)
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .render(verdict, buf);

        let mut spans = Vec::new();
        for level in RiskLevel::ALL {
            spans.push(Span::styled(
                self.icons.severity(SeverityIcon::from(level)),
                Style::default().fg(styles::risk_color(level)),
            ));
            spans.push(Span::styled(
                format!(" {} {}   ", overview.counts.get(level), level.as_str().to_lowercase()),
                styles::text_secondary(),
            ));
        }
        buf.set_line(counts.x, counts.y, &Line::from(spans), counts.width);
    }

    /// Lines of one risk entry; the expanded entry adds its details
    fn risk_lines(&self, index: usize, risk: &Risk, width: u16) -> Vec<Line<'static>> {
        let selected = index == self.view.selected;
        let expanded = self.view.is_expanded(&risk.id);
        let marker = if expanded {
            self.icons.expanded()
        } else {
            self.icons.collapsed()
        };

        let header_style = if selected {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", marker), header_style),
            Span::styled(
                self.icons.severity(SeverityIcon::from(risk.severity)),
                if selected {
                    header_style
                } else {
                    Style::default().fg(styles::risk_color(risk.severity))
                },
            ),
            Span::styled(format!(" {}", risk.clause), header_style),
            Span::styled(
                format!("  {}", risk.severity),
                if selected {
                    header_style
                } else {
                    styles::severity_style(risk.severity)
                },
            ),
            Span::styled(
                format!("  L{}", risk.line_number),
                if selected {
                    header_style
                } else {
                    styles::text_muted()
                },
            ),
        ])];

        if expanded {
            let body_width = width.saturating_sub(4) as usize;
            push_section(&mut lines, "Problem", &risk.description, body_width, styles::text_primary());
            push_section(
                &mut lines,
                "Recommendation",
                &risk.recommendation,
                body_width,
                Style::default().fg(palette::RISK_LOW),
            );
            if let Some(excerpt) = line_excerpt(&self.result.contract_text, risk.line_number) {
                push_section(
                    &mut lines,
                    &format!("Line {}", risk.line_number),
                    &format!("\"{}\"", excerpt),
                    body_width,
                    styles::text_muted(),
                );
            }
            lines.push(Line::from(""));
        }

        lines
    }

    fn render_risks(&self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Detected risks ({}) ", self.result.risks.len());
        let block = styles::glass_block(true)
            .title(Span::styled(title, styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.result.risks.is_empty() {
            Paragraph::new(Line::from(vec![
                Span::styled(self.icons.check(), Style::default().fg(palette::RISK_LOW)),
                Span::styled(" No risky clause detected", styles::text_secondary()),
            ]))
            .render(inner, buf);
            return;
        }

        let mut lines = Vec::new();
        let mut selected_span = (0, 0);
        for (index, risk) in self.result.risks.iter().enumerate() {
            let entry = self.risk_lines(index, risk, inner.width);
            if index == self.view.selected {
                selected_span = (lines.len(), lines.len() + entry.len());
            }
            lines.extend(entry);
        }

        let scroll = list_scroll(selected_span, inner.height as usize);
        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(inner, buf);
    }

    fn render_advice(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block(" Summary ");
        let inner = block.inner(area);
        block.render(area, buf);

        let heading = |text: &'static str| {
            Line::from(Span::styled(text, styles::accent_bold()))
        };

        let mut lines = vec![
            Line::from(Span::styled(self.result.summary.clone(), styles::text_primary())),
            Line::from(""),
            heading("Priority actions"),
        ];
        for (i, recommendation) in self.result.recommendations.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), styles::keybinding()),
                Span::styled(recommendation.clone(), styles::text_primary()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(heading("Next steps"));
        for step in NEXT_STEPS {
            lines.push(Line::from(vec![
                Span::styled(self.icons.collapsed(), styles::accent()),
                Span::styled(format!(" {}", step), styles::text_secondary()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(heading("Analysis stats"));
        for (label, value) in [
            ("Clauses analyzed", DEMO_STATS.clauses_analyzed.to_string()),
            ("Keywords detected", DEMO_STATS.keywords_detected.to_string()),
            ("Analysis time", DEMO_STATS.analysis_time.to_string()),
            ("Confidence", format!("{}%", DEMO_STATS.confidence_percent)),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", label), styles::text_muted()),
                Span::styled(value, styles::text_bright_bold()),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

impl Widget for ReportView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);

        let [main, side] =
            Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                .areas(area);
        let [overview, risks] =
            Layout::vertical([Constraint::Length(7), Constraint::Min(3)]).areas(main);

        self.render_overview(overview, buf);
        self.render_risks(risks, buf);
        self.render_advice(side, buf);
    }
}

/// Scroll offset keeping the selected entry `[start, end)` on screen,
/// showing its header first when it does not fit
fn list_scroll((start, end): (usize, usize), height: usize) -> usize {
    if end > height {
        (end - height).min(start)
    } else {
        0
    }
}

fn push_section(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    body: &str,
    width: usize,
    style: Style,
) {
    lines.push(Line::from(Span::styled(
        format!("    {}", title),
        styles::text_muted().add_modifier(Modifier::BOLD),
    )));
    for row in wrap_words(body, width) {
        lines.push(Line::from(Span::styled(format!("    {}", row), style)));
    }
}

/// Greedy word wrap by display width. Words wider than `width` get their own row.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use paranoid_app::config::IconMode;
    use paranoid_core::{generate, SAMPLE_CONTRACT};

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_empty_report_has_call_to_action() {
        let mut term = TestTerminal::with_size(80, 20);
        let area = term.area();
        term.render_widget(EmptyReport::new(icons()), area);

        assert!(term.buffer_contains("No report yet"));
        assert!(term.buffer_contains("Scan a contract"));
    }

    #[test]
    fn test_report_shows_score_and_risks() {
        let result = generate(SAMPLE_CONTRACT);
        let view = ReportViewState::new();
        let mut term = TestTerminal::with_size(160, 45);
        let area = term.area();
        term.render_widget(ReportView::new(&result, &view, icons()), area);

        assert!(term.buffer_contains("3.2/10"));
        assert!(term.buffer_contains("HIGH"));
        assert!(term.buffer_contains("Software development contract"));
        assert!(term.buffer_contains("Detected risks (5)"));
        for risk in &result.risks {
            assert!(term.buffer_contains(&risk.clause), "missing {}", risk.clause);
        }
        assert!(term.buffer_contains("Priority actions"));
        assert!(term.buffer_contains("Clauses analyzed: 24"));
    }

    #[test]
    fn test_collapsed_risks_hide_details() {
        let result = generate(SAMPLE_CONTRACT);
        let view = ReportViewState::new();
        let mut term = TestTerminal::with_size(160, 45);
        let area = term.area();
        term.render_widget(ReportView::new(&result, &view, icons()), area);

        assert!(!term.buffer_contains("Recommendation"));
    }

    #[test]
    fn test_expanded_risk_shows_details_and_excerpt() {
        let result = generate(SAMPLE_CONTRACT);
        let mut view = ReportViewState::new();
        view.toggle("1");

        let mut term = TestTerminal::with_size(160, 45);
        let area = term.area();
        term.render_widget(ReportView::new(&result, &view, icons()), area);

        assert!(term.buffer_contains("Problem"));
        assert!(term.buffer_contains("Recommendation"));
        assert!(term.buffer_contains("Line 8"));
    }

    #[test]
    fn test_list_scroll_keeps_selection_visible() {
        assert_eq!(list_scroll((0, 1), 10), 0);
        assert_eq!(list_scroll((12, 13), 10), 3);
        // Tall entry: header first
        assert_eq!(list_scroll((4, 20), 10), 4);
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("one two three four", 9),
            vec!["one two", "three", "four"]
        );
        assert_eq!(wrap_words("", 10), Vec::<String>::new());
        assert_eq!(wrap_words("unbreakable", 4), vec!["unbreakable"]);
    }
}
