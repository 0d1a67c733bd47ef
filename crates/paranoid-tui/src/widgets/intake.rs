//! Analyze page widgets: contract editor, progress sequence, path prompt

use paranoid_app::intake::{FilePrompt, IntakeState};
use paranoid_app::{AnalysisProgress, ANALYSIS_STEPS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::layout::centered;
use crate::theme::{icons::IconSet, palette, styles};

const PLACEHOLDER: &str =
    "Paste or type the contract here, or drop a .txt file onto the terminal.";

/// Braille spinner frames, one per tick
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// ─────────────────────────────────────────────────────────
// Editor
// ─────────────────────────────────────────────────────────

/// Contract text box with character counter and the action bar below it
pub struct IntakeEditor<'a> {
    intake: &'a IntakeState,
    icons: IconSet,
}

impl<'a> IntakeEditor<'a> {
    pub fn new(intake: &'a IntakeState, icons: IconSet) -> Self {
        Self { intake, icons }
    }

    fn split(area: Rect) -> (Rect, Rect) {
        let [editor, actions] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
        (editor, actions)
    }

    fn block(&self) -> Block<'static> {
        let counter = format!(" {} characters ", self.intake.char_count());
        styles::glass_block(true)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icons.file(), styles::accent()),
                Span::styled(" Contract text ", styles::text_secondary()),
            ]))
            .title_bottom(Line::from(Span::styled(counter, styles::text_muted())).right_aligned())
    }

    /// Cursor (line, display column) within the buffer
    fn cursor_cell(&self) -> (usize, usize) {
        let text = self.intake.text();
        let before = &text[..self.intake.cursor()];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let (line, _) = self.intake.cursor_position();
        (line, before[line_start..].width())
    }

    /// First visible line and display column keeping the cursor inside `inner`
    fn viewport(&self, inner: Rect) -> (usize, usize) {
        let (line, column) = self.cursor_cell();
        (
            (line + 1).saturating_sub(usize::from(inner.height)),
            (column + 1).saturating_sub(usize::from(inner.width)),
        )
    }

    /// Buffer rows visible in `inner`, already shifted by the viewport
    fn visible_lines(&self, inner: Rect) -> Vec<Line<'static>> {
        let (top, left) = self.viewport(inner);
        self.intake
            .text()
            .split('\n')
            .skip(top)
            .take(usize::from(inner.height))
            .map(|line| Line::from(skip_columns(line, left).to_string()))
            .collect()
    }

    /// Screen position of the text cursor when the editor is drawn in `area`
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let (editor, _) = Self::split(area);
        let inner = self.block().inner(editor);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        let (line, column) = self.cursor_cell();
        let (top, left) = self.viewport(inner);
        let x = u16::try_from(column - left).unwrap_or(u16::MAX);
        let y = u16::try_from(line - top).unwrap_or(u16::MAX);
        Some(Position::new(
            inner.x.saturating_add(x),
            inner.y.saturating_add(y),
        ))
    }

    fn actions_line(&self) -> Line<'static> {
        let scan_style = if self.intake.can_analyze() {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };

        let mut spans = vec![
            Span::styled(" Ctrl+R", styles::keybinding()),
            Span::styled(" Scan contract", scan_style),
        ];
        if self.intake.is_blank() {
            spans.push(Span::styled(" (enter some text first)", styles::text_muted()));
        }
        for (key, label) in [
            ("Ctrl+L", "Load sample"),
            ("Ctrl+O", "Open .txt file"),
            ("Ctrl+U", "Clear"),
        ] {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", label), styles::text_secondary()));
        }
        Line::from(spans)
    }
}

impl Widget for IntakeEditor<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (editor, actions) = Self::split(area);
        let block = self.block();
        let inner = block.inner(editor);
        block.render(editor, buf);

        if self.intake.text().is_empty() {
            Paragraph::new(Span::styled(PLACEHOLDER, styles::text_muted()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
        } else {
            Paragraph::new(self.visible_lines(inner))
                .style(styles::text_primary())
                .render(inner, buf);
        }

        buf.set_line(actions.x, actions.y, &self.actions_line(), actions.width);
    }
}

/// Suffix of `line` starting at display column `columns`
fn skip_columns(line: &str, columns: usize) -> &str {
    let mut width = 0;
    for (index, c) in line.char_indices() {
        if width >= columns {
            return &line[index..];
        }
        width += c.width().unwrap_or(0);
    }
    ""
}

// ─────────────────────────────────────────────────────────
// Progress
// ─────────────────────────────────────────────────────────

/// Spinner, gauge and emitted step labels while a run is active
pub struct AnalysisProgressView<'a> {
    progress: &'a AnalysisProgress,
    animation_frame: u64,
    icons: IconSet,
}

impl<'a> AnalysisProgressView<'a> {
    pub fn new(progress: &'a AnalysisProgress, animation_frame: u64, icons: IconSet) -> Self {
        Self {
            progress,
            animation_frame,
            icons,
        }
    }

    fn steps(&self) -> Paragraph<'static> {
        let emitted = self.progress.steps_emitted();
        let lines: Vec<Line> = ANALYSIS_STEPS
            .iter()
            .enumerate()
            .map(|(index, label)| {
                if index < emitted {
                    Line::from(vec![
                        Span::styled(self.icons.check(), Style::default().fg(palette::RISK_LOW)),
                        Span::styled(format!(" {}", label), styles::text_secondary()),
                    ])
                } else {
                    Line::from(Span::styled(format!("\u{00b7} {}", label), styles::text_muted()))
                }
            })
            .collect();
        Paragraph::new(lines)
    }

    fn warning(&self) -> Paragraph<'static> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette::RISK_HIGH))
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icons.alert(), Style::default().fg(palette::RISK_HIGH)),
                Span::styled(
                    " SUSPICIOUS CLAUSES DETECTED ",
                    Style::default()
                        .fg(palette::RISK_HIGH)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        Paragraph::new(
            "Potentially risky clauses have been identified. In-depth analysis in progress...",
        )
        .style(styles::text_secondary())
        .wrap(Wrap { trim: true })
        .block(block)
    }
}

impl Widget for AnalysisProgressView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered(area, 72, 18);
        let [title, label, gauge, _, steps, warning] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(ANALYSIS_STEPS.len() as u16),
            Constraint::Min(0),
        ])
        .areas(area);

        let spinner = SPINNER[(self.animation_frame as usize) % SPINNER.len()];
        Paragraph::new(Line::from(vec![
            Span::styled(spinner, styles::accent_bold()),
            Span::styled(" Analyzing contract", styles::text_bright_bold()),
        ]))
        .alignment(Alignment::Center)
        .render(title, buf);

        let current = self.progress.current_label().unwrap_or("Starting...");
        Paragraph::new(Span::styled(current, styles::accent()))
            .alignment(Alignment::Center)
            .render(label, buf);

        let percent = self.progress.percent();
        Gauge::default()
            .gauge_style(Style::default().fg(palette::ACCENT).bg(palette::CARD_BG))
            .ratio((percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{:.0}% complete", percent))
            .render(gauge, buf);

        self.steps().render(steps, buf);
        self.warning().render(warning, buf);
    }
}

// ─────────────────────────────────────────────────────────
// File Prompt
// ─────────────────────────────────────────────────────────

/// Modal path entry for loading a `.txt` contract
pub struct FilePromptDialog<'a> {
    prompt: &'a FilePrompt,
}

impl<'a> FilePromptDialog<'a> {
    pub fn new(prompt: &'a FilePrompt) -> Self {
        Self { prompt }
    }
}

impl Widget for FilePromptDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered(area, 64, 5);
        Clear.render(area, buf);

        let block = styles::modal_block(" Open contract (.txt) ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled("> ", styles::accent()),
                Span::styled(self.prompt.input.clone(), styles::text_primary()),
                Span::styled("\u{2588}", styles::accent()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" load   ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" cancel", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use paranoid_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_empty_editor_shows_placeholder_and_disabled_scan() {
        let intake = IntakeState::new();
        let mut term = TestTerminal::with_size(100, 12);
        let area = term.area();
        term.render_widget(IntakeEditor::new(&intake, icons()), area);

        assert!(term.buffer_contains("Paste or type the contract here"));
        assert!(term.buffer_contains("0 characters"));
        assert!(term.buffer_contains("enter some text first"));
    }

    #[test]
    fn test_editor_shows_text_and_counter() {
        let intake = IntakeState::with_text("Article 1 - PURPOSE");
        let mut term = TestTerminal::with_size(100, 12);
        let area = term.area();
        term.render_widget(IntakeEditor::new(&intake, icons()), area);

        assert!(term.buffer_contains("Article 1 - PURPOSE"));
        assert!(term.buffer_contains("19 characters"));
        assert!(!term.buffer_contains("enter some text first"));
    }

    #[test]
    fn test_cursor_position_follows_text() {
        let intake = IntakeState::with_text("ab\ncd");
        let editor = IntakeEditor::new(&intake, icons());
        // Inside the border: column 1 + 2 chars, row 1 + 1 line
        assert_eq!(
            editor.cursor_position(Rect::new(0, 0, 40, 10)),
            Some(Position::new(3, 2))
        );
    }

    #[test]
    fn test_cursor_stays_visible_on_long_buffers() {
        let text = (1..=50).map(|i| format!("line {}", i)).collect::<Vec<_>>();
        let intake = IntakeState::with_text(text.join("\n"));
        let editor = IntakeEditor::new(&intake, icons());
        let area = Rect::new(0, 0, 40, 10);

        let cursor = editor.cursor_position(area).expect("cursor shown");
        assert!(cursor.y < area.height - 1);
    }

    #[test]
    fn test_cursor_on_very_long_line_stays_in_editor() {
        let area = Rect::new(0, 0, 40, 10);
        for len in [65_535, 70_000] {
            let intake = IntakeState::with_text("x".repeat(len));
            let editor = IntakeEditor::new(&intake, icons());

            // Inner width 38: the cursor sits on the last inner column
            assert_eq!(editor.cursor_position(area), Some(Position::new(38, 1)));
        }
    }

    #[test]
    fn test_cursor_below_u16_lines_stays_in_editor() {
        let intake = IntakeState::with_text(format!("{}end", "\n".repeat(70_000)));
        let editor = IntakeEditor::new(&intake, icons());
        let area = Rect::new(0, 0, 40, 10);

        // Editor rows 0..9, inner rows 1..=7: cursor on the last inner row
        assert_eq!(editor.cursor_position(area), Some(Position::new(4, 7)));

        let mut term = TestTerminal::with_size(40, 10);
        term.render_widget(IntakeEditor::new(&intake, icons()), area);
        assert!(term.line_contains(7, "end"));
    }

    #[test]
    fn test_long_line_renders_its_tail() {
        let text = format!("{}tail", "x".repeat(70_000));
        let intake = IntakeState::with_text(text);
        let mut term = TestTerminal::with_size(40, 10);
        let area = term.area();
        term.render_widget(IntakeEditor::new(&intake, icons()), area);

        assert!(term.line_contains(1, "xxtail"));
    }

    #[test]
    fn test_skip_columns() {
        assert_eq!(skip_columns("abcdef", 0), "abcdef");
        assert_eq!(skip_columns("abcdef", 4), "ef");
        assert_eq!(skip_columns("abc", 10), "");
        // Wide glyphs count two columns
        assert_eq!(skip_columns("\u{4e2d}\u{6587}x", 2), "\u{6587}x");
    }

    #[test]
    fn test_progress_view_lists_emitted_steps() {
        let mut progress = AnalysisProgress::default();
        progress.start(1);
        progress.advance(1, 0);
        progress.advance(1, 1);

        let mut term = TestTerminal::with_size(100, 24);
        let area = term.area();
        term.render_widget(AnalysisProgressView::new(&progress, 0, icons()), area);

        assert!(term.buffer_contains("Analyzing contract"));
        assert!(term.buffer_contains(ANALYSIS_STEPS[1]));
        assert!(term.buffer_contains("33% complete"));
        assert!(term.buffer_contains("SUSPICIOUS CLAUSES DETECTED"));
    }

    #[test]
    fn test_file_prompt_shows_input() {
        let prompt = FilePrompt {
            input: "/tmp/contract.txt".to_string(),
        };
        let mut term = TestTerminal::with_size(80, 12);
        let area = term.area();
        term.render_widget(FilePromptDialog::new(&prompt), area);

        assert!(term.buffer_contains("Open contract (.txt)"));
        assert!(term.buffer_contains("/tmp/contract.txt"));
    }
}
