//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget and full-screen tests can assert
//! on rendered text without a real terminal.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! let area = term.area();
//! term.render_widget(Landing::new(icons), area);
//! assert!(term.buffer_contains("Don't sign blind."));
//! ```

use paranoid_app::{AppState, Settings};
use paranoid_core::SAMPLE_CONTRACT;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test wrapper around a `TestBackend` terminal
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string on any single row
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().lines().any(|line| line.contains(text))
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.line_content(line).contains(text)
    }

    /// Symbols of row `y`, concatenated
    pub fn line_content(&self, y: u16) -> String {
        let buffer = self.buffer();
        let mut result = String::new();
        if y < buffer.area.height {
            for x in 0..buffer.area.width {
                result.push_str(buffer[(x, y)].symbol());
            }
        }
        result
    }

    /// Style of the cell at (x, y); default style when out of range
    pub fn cell_style(&self, x: u16, y: u16) -> Style {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            buffer[(x, y)].style()
        } else {
            Style::default()
        }
    }

    /// All rows joined with newlines (for debugging)
    pub fn content(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.line_content(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// App state with default settings on the Landing page
pub fn test_app_state() -> AppState {
    AppState::new()
}

/// App state on the Analyze page with the sample contract loaded
pub fn sample_app_state() -> AppState {
    AppState::with_contract(Settings::default(), SAMPLE_CONTRACT.to_string())
}
