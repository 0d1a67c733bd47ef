//! Key event handlers for each page

use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigator::Page;
use crate::state::AppState;

/// Convert key events to messages based on the current page
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_interrupt() {
        return Some(Message::Quit);
    }

    if let Some(msg) = handle_key_navigation(state, key) {
        return Some(msg);
    }

    match state.current_page() {
        Page::Landing => handle_key_landing(key),
        Page::Analyze => handle_key_analyze(state, key),
        Page::Results => handle_key_results(state, key),
    }
}

/// Header navigation shared by all pages. Disabled while the path prompt
/// captures input.
fn handle_key_navigation(state: &AppState, key: InputKey) -> Option<Message> {
    if state.current_page() == Page::Analyze && state.intake.file_prompt.is_some() {
        return None;
    }

    match key {
        InputKey::F(1) => Some(Message::Navigate(Page::Landing)),
        InputKey::F(2) => Some(Message::Navigate(Page::Analyze)),
        InputKey::F(3) => Some(Message::Navigate(Page::Results)),
        InputKey::Tab => {
            let current = state.current_page();
            let index = Page::ALL.iter().position(|p| *p == current).unwrap_or(0);
            Some(Message::Navigate(Page::ALL[(index + 1) % Page::ALL.len()]))
        }
        _ => None,
    }
}

fn handle_key_landing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('a' | 's') => Some(Message::Navigate(Page::Analyze)),
        InputKey::Char('r') => Some(Message::Navigate(Page::Results)),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_analyze(state: &AppState, key: InputKey) -> Option<Message> {
    if state.intake.file_prompt.is_some() {
        return handle_key_file_prompt(key);
    }

    // Only leaving is possible while the progress sequence runs
    if state.intake.is_running() {
        return match key {
            InputKey::Esc => Some(Message::Navigate(Page::Landing)),
            _ => None,
        };
    }

    match key {
        InputKey::Esc => Some(Message::Navigate(Page::Landing)),

        // Commands
        InputKey::CharCtrl('r') | InputKey::F(5) => Some(Message::StartAnalysis),
        InputKey::CharCtrl('l') => Some(Message::LoadSample),
        InputKey::CharCtrl('o') => Some(Message::OpenFilePrompt),
        InputKey::CharCtrl('u') => Some(Message::ClearBuffer),

        // Editing
        InputKey::Char(c) => Some(Message::InsertChar(c)),
        InputKey::Enter => Some(Message::Newline),
        InputKey::Backspace => Some(Message::Backspace),
        InputKey::Delete => Some(Message::Delete),
        InputKey::Left => Some(Message::CursorLeft),
        InputKey::Right => Some(Message::CursorRight),
        InputKey::Home => Some(Message::CursorHome),
        InputKey::End => Some(Message::CursorEnd),

        _ => None,
    }
}

fn handle_key_file_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitFilePrompt),
        InputKey::Esc => Some(Message::CancelFilePrompt),
        InputKey::Backspace => Some(Message::FilePromptBackspace),
        InputKey::Char(c) => Some(Message::FilePromptInput(c)),
        _ => None,
    }
}

fn handle_key_results(state: &AppState, key: InputKey) -> Option<Message> {
    if state.last_result().is_none() {
        return match key {
            InputKey::Enter | InputKey::Char('a' | 'n') => Some(Message::Navigate(Page::Analyze)),
            InputKey::Char('h') | InputKey::Esc => Some(Message::Navigate(Page::Landing)),
            InputKey::Char('q') => Some(Message::Quit),
            _ => None,
        };
    }

    match key {
        InputKey::Esc if state.notice.is_some() => Some(Message::DismissNotice),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevRisk),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextRisk),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleRisk),
        InputKey::Char('d') => Some(Message::DownloadReport),
        InputKey::Char('n') => Some(Message::Navigate(Page::Analyze)),
        InputKey::Char('h') | InputKey::Esc => Some(Message::Navigate(Page::Landing)),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
