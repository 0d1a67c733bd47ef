//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Footer height: key hints/notice row + disclaimer row
pub const FOOTER_HEIGHT: u16 = 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Brand and page navigation
    pub header: Rect,

    /// Active page
    pub content: Rect,

    /// Key hints, notices and the legal disclaimer
    pub footer: Rect,
}

/// Split the terminal into header, page content and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Rectangle of `width` x `height` centered in `area`, clamped to it
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.content.height, 24 - HEADER_HEIGHT - FOOTER_HEIGHT);
        assert_eq!(layout.footer.y, 22);
    }

    #[test]
    fn test_centered_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered(area, 100, 100), area);
    }
}
