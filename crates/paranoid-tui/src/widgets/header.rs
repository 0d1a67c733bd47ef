//! Header bar with brand and page navigation

use paranoid_app::Page;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

/// Brand on the left, one tab per page on the right
pub struct MainHeader {
    current: Page,
    icons: IconSet,
}

impl MainHeader {
    pub fn new(current: Page, icons: IconSet) -> Self {
        Self { current, icons }
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (index, page) in Page::ALL.iter().enumerate() {
            let label = format!(" F{} {} ", index + 1, page.title());
            let style = if *page == self.current {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let brand = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.shield(), styles::accent()),
            Span::raw(" "),
            Span::styled("Paranoid", styles::text_bright_bold()),
            Span::styled("Scan", styles::accent_bold()),
        ]);
        let brand_width = brand.width() as u16;
        buf.set_line(inner.x, inner.y, &brand, inner.width);

        let tabs = self.tabs_line();
        let tabs_width = tabs.width() as u16;
        if brand_width + tabs_width < inner.width {
            let x = inner.x + inner.width - tabs_width;
            buf.set_line(x, inner.y, &tabs, tabs_width);
        }
    }
}
