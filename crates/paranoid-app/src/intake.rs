//! Intake component state: the contract text buffer and its run progress
//!
//! The buffer is a plain `String` with a byte cursor that always sits on a
//! char boundary. Edits are line-agnostic except for Home/End, which move
//! within the current line.

use paranoid_core::{is_blank, SAMPLE_CONTRACT};

use crate::progress::AnalysisProgress;

/// Path entry prompt opened with Ctrl+O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePrompt {
    pub input: String,
}

/// State of the intake component on the Analyze page.
#[derive(Debug, Clone, Default)]
pub struct IntakeState {
    buffer: String,
    /// Byte offset into `buffer`, on a char boundary
    cursor: usize,
    pub file_prompt: Option<FilePrompt>,
    pub progress: AnalysisProgress,
}

impl IntakeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intake preloaded with `text`, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut intake = Self::new();
        intake.set_text(text);
        intake
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the buffer
    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        is_blank(&self.buffer)
    }

    /// Whether the run action is enabled
    pub fn can_analyze(&self) -> bool {
        !self.is_blank() && !self.progress.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.progress.is_running()
    }

    /// Replace the buffer, cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = normalize_newlines(&text.into());
        self.cursor = self.buffer.len();
    }

    /// Overwrite the buffer with the built-in sample contract.
    pub fn load_sample(&mut self) {
        self.set_text(SAMPLE_CONTRACT);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Back to a fresh component: empty buffer, no prompt, idle progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text at the cursor
    pub fn insert_text(&mut self, text: &str) {
        let text = normalize_newlines(text);
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.buffer.drain(self.cursor..next);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Start of the current line
    pub fn cursor_home(&mut self) {
        self.cursor = self.buffer[..self.cursor]
            .rfind('\n')
            .map_or(0, |i| i + 1);
    }

    /// End of the current line
    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer[self.cursor..]
            .find('\n')
            .map_or(self.buffer.len(), |i| self.cursor + i);
    }

    /// Zero-based (line, column) of the cursor, column counted in chars
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.buffer[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (line, before[line_start..].chars().count())
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_intake_is_blank_and_disabled() {
        let intake = IntakeState::new();
        assert!(intake.is_blank());
        assert!(!intake.can_analyze());
        assert_eq!(intake.char_count(), 0);
    }

    #[test]
    fn test_whitespace_only_cannot_analyze() {
        let intake = IntakeState::with_text("  \n\t ");
        assert!(!intake.can_analyze());
    }

    #[test]
    fn test_cannot_analyze_while_running() {
        let mut intake = IntakeState::with_text("contract");
        assert!(intake.can_analyze());
        intake.progress.start(1);
        assert!(!intake.can_analyze());
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut intake = IntakeState::new();
        for c in "abc".chars() {
            intake.insert_char(c);
        }
        intake.backspace();
        assert_eq!(intake.text(), "ab");
        assert_eq!(intake.cursor(), 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut intake = IntakeState::with_text("clé");
        intake.backspace();
        assert_eq!(intake.text(), "cl");

        intake.insert_char('€');
        intake.cursor_left();
        intake.delete();
        assert_eq!(intake.text(), "cl");
        assert_eq!(intake.char_count(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut intake = IntakeState::with_text("x");
        intake.cursor_home();
        intake.backspace();
        assert_eq!(intake.text(), "x");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut intake = IntakeState::with_text("x");
        intake.delete();
        assert_eq!(intake.text(), "x");
    }

    #[test]
    fn test_insert_text_normalizes_newlines() {
        let mut intake = IntakeState::new();
        intake.insert_text("a\r\nb\rc");
        assert_eq!(intake.text(), "a\nb\nc");
        assert_eq!(intake.cursor(), intake.text().len());
    }

    #[test]
    fn test_home_end_stay_on_line() {
        let mut intake = IntakeState::with_text("first\nsecond\nthird");
        // Cursor on "third"; move up to "second" by hand
        intake.cursor_home();
        intake.cursor_left();
        assert_eq!(intake.cursor_position(), (1, 6));

        intake.cursor_home();
        assert_eq!(intake.cursor_position(), (1, 0));

        intake.cursor_end();
        assert_eq!(intake.cursor_position(), (1, 6));
    }

    #[test]
    fn test_load_sample_overwrites_buffer() {
        let mut intake = IntakeState::with_text("draft");
        intake.load_sample();
        assert_eq!(intake.text(), SAMPLE_CONTRACT);
        assert!(intake.can_analyze());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut intake = IntakeState::with_text("draft");
        intake.file_prompt = Some(FilePrompt::default());
        intake.progress.start(4);

        intake.reset();
        assert_eq!(intake.text(), "");
        assert!(intake.file_prompt.is_none());
        assert_eq!(intake.progress, AnalysisProgress::Idle);
    }
}
