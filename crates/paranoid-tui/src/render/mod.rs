//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use paranoid_app::{AppState, Page};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets;

type Hints = &'static [(&'static str, &'static str)];

const LANDING_HINTS: Hints = &[("Enter", "scan a contract"), ("r", "report"), ("q", "quit")];
const EDITOR_HINTS: Hints = &[
    ("Ctrl+R", "scan"),
    ("Ctrl+L", "sample"),
    ("Ctrl+O", "open file"),
    ("Tab", "next page"),
    ("Esc", "home"),
    ("Ctrl+C", "quit"),
];
const RUNNING_HINTS: Hints = &[("Esc", "cancel analysis"), ("Ctrl+C", "quit")];
const PROMPT_HINTS: Hints = &[("Enter", "load file"), ("Esc", "cancel")];
const REPORT_HINTS: Hints = &[
    ("\u{2191}/\u{2193}", "select"),
    ("Enter", "expand"),
    ("d", "download PDF"),
    ("n", "new scan"),
    ("h", "home"),
    ("q", "quit"),
];
const EMPTY_REPORT_HINTS: Hints = &[("Enter", "scan a contract"), ("h", "home"), ("q", "quit")];

/// Key hints for the footer of the current page
fn page_hints(state: &AppState) -> Hints {
    match state.current_page() {
        Page::Landing => LANDING_HINTS,
        Page::Analyze if state.intake.file_prompt.is_some() => PROMPT_HINTS,
        Page::Analyze if state.intake.is_running() => RUNNING_HINTS,
        Page::Analyze => EDITOR_HINTS,
        Page::Results if state.last_result().is_some() => REPORT_HINTS,
        Page::Results => EMPTY_REPORT_HINTS,
    }
}

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: the state is only read.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::MainHeader::new(state.current_page(), icons),
        areas.header,
    );

    match state.current_page() {
        Page::Landing => frame.render_widget(widgets::Landing::new(icons), areas.content),
        Page::Analyze => render_analyze(frame, state, areas.content, icons),
        Page::Results => match state.last_result() {
            Some(result) => frame.render_widget(
                widgets::ReportView::new(result, &state.report_view, icons),
                areas.content,
            ),
            None => frame.render_widget(widgets::EmptyReport::new(icons), areas.content),
        },
    }

    frame.render_widget(
        widgets::Footer::new(page_hints(state)).notice(state.notice_text()),
        areas.footer,
    );
}

fn render_analyze(frame: &mut Frame, state: &AppState, area: Rect, icons: IconSet) {
    let intake = &state.intake;

    if intake.is_running() {
        frame.render_widget(
            widgets::AnalysisProgressView::new(&intake.progress, state.animation_frame, icons),
            area,
        );
        return;
    }

    let editor = widgets::IntakeEditor::new(intake, icons);
    let cursor = editor.cursor_position(area);
    frame.render_widget(editor, area);

    match &intake.file_prompt {
        Some(prompt) => frame.render_widget(widgets::FilePromptDialog::new(prompt), area),
        None => {
            if let Some(position) = cursor {
                frame.set_cursor_position(position);
            }
        }
    }
}
