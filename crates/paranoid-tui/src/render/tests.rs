use super::*;
use crate::test_utils::{sample_app_state, test_app_state, TestTerminal};
use crate::widgets::TAGLINE;
use paranoid_app::intake::FilePrompt;
use paranoid_core::{generate, SAMPLE_CONTRACT};

fn render(state: &AppState, width: u16, height: u16) -> TestTerminal {
    let mut term = TestTerminal::with_size(width, height);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_landing_page_renders_pitch_and_hints() {
    let state = test_app_state();
    let term = render(&state, 120, 40);

    assert!(term.buffer_contains("ParanoidScan"));
    assert!(term.buffer_contains(TAGLINE));
    assert!(term.buffer_contains("Enter scan a contract"));
    assert!(term.buffer_contains("not legal advice"));
}

#[test]
fn test_analyze_page_shows_editor() {
    let state = sample_app_state();
    let term = render(&state, 120, 40);

    assert!(term.buffer_contains("SOFTWARE DEVELOPMENT CONTRACT"));
    assert!(term.buffer_contains("Ctrl+R scan"));
    assert!(term.buffer_contains("characters"));
}

#[test]
fn test_analyze_page_shows_progress_while_running() {
    let mut state = sample_app_state();
    let run_id = state.begin_analysis();
    state.intake.progress.advance(run_id, 0);

    let term = render(&state, 120, 40);
    assert!(term.buffer_contains("Analyzing contract"));
    assert!(term.buffer_contains("Esc cancel analysis"));
    assert!(!term.buffer_contains("SOFTWARE DEVELOPMENT CONTRACT"));
}

#[test]
fn test_file_prompt_overlays_editor() {
    let mut state = sample_app_state();
    state.intake.file_prompt = Some(FilePrompt {
        input: "~/contract.txt".to_string(),
    });

    let term = render(&state, 120, 40);
    assert!(term.buffer_contains("Open contract (.txt)"));
    assert!(term.buffer_contains("~/contract.txt"));
    assert!(term.buffer_contains("Enter load file"));
}

#[test]
fn test_results_without_report_shows_empty_state() {
    let mut state = test_app_state();
    state.navigate(Page::Results);

    let term = render(&state, 120, 40);
    assert!(term.buffer_contains("No report yet"));
}

#[test]
fn test_results_page_renders_report() {
    let mut state = test_app_state();
    state.complete_analysis(generate(SAMPLE_CONTRACT));

    let term = render(&state, 160, 50);
    assert_eq!(state.current_page(), Page::Results);
    assert!(term.buffer_contains("3.2/10"));
    assert!(term.buffer_contains("Detected risks (5)"));
    assert!(term.buffer_contains("d download PDF"));
}

#[test]
fn test_notice_replaces_hints() {
    let mut state = test_app_state();
    state.complete_analysis(generate(SAMPLE_CONTRACT));
    state.show_notice("Generating PDF report...");

    let term = render(&state, 160, 50);
    assert!(term.buffer_contains("Generating PDF report..."));
    assert!(!term.buffer_contains("d download PDF"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = test_app_state();
    state.complete_analysis(generate(SAMPLE_CONTRACT));
    render(&state, 20, 8);

    let state = sample_app_state();
    render(&state, 20, 8);
}
