//! Landing page: pitch, headline stats, testimonials and call to action

use paranoid_core::RiskLevel;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};

pub const TAGLINE: &str = "Don't sign blind.";

const PITCH: &str = "Trap detection \u{2022} Risk analysis \u{2022} Recommendations";

const STATS: [(&str, &str); 4] = [
    ("2,847", "contracts scanned"),
    ("\u{20ac}1.2M", "losses avoided"),
    ("94%", "accuracy"),
    ("< 30s", "analysis time"),
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
    catch: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Marie Dubois",
        role: "Startup CEO",
        quote: "I dodged an \u{20ac}80K trap. The scan caught a hidden clause my lawyer had missed.",
        catch: "HIDDEN CLAUSE DETECTED",
    },
    Testimonial {
        name: "Thomas Laurent",
        role: "Freelance developer",
        quote: "No more toxic contracts. I scan everything now and it has saved me several times.",
        catch: "DEFERRED PAYMENT AVOIDED",
    },
    Testimonial {
        name: "Sophie Chen",
        role: "Head of Legal",
        quote: "Even as a lawyer I use it for a second opinion. It spots patterns the eye misses.",
        catch: "UNLIMITED LIABILITY BLOCKED",
    },
];

pub struct Landing {
    icons: IconSet,
}

impl Landing {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn hero(&self) -> Paragraph<'static> {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(TAGLINE, styles::accent_bold())),
            Line::from(""),
            Line::from(Span::styled(PITCH, styles::text_secondary())),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", styles::keybinding()),
                Span::styled(" Scan a contract", styles::text_bright_bold()),
            ]),
        ];
        Paragraph::new(lines).alignment(Alignment::Center)
    }

    fn stats(&self) -> Paragraph<'static> {
        let mut spans = Vec::new();
        for (value, label) in STATS {
            spans.push(Span::styled(value, styles::text_bright_bold()));
            spans.push(Span::styled(format!(" {}    ", label), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn testimonials(&self) -> Paragraph<'static> {
        let mut lines = Vec::new();
        for t in &TESTIMONIALS {
            lines.push(Line::from(vec![
                Span::styled(self.icons.check(), Style::default().fg(palette::RISK_LOW)),
                Span::raw(" "),
                Span::styled(t.catch, styles::severity_style(RiskLevel::Low)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  \"{}\"", t.quote),
                styles::text_primary(),
            )));
            lines.push(Line::from(Span::styled(
                format!("  - {}, {}", t.name, t.role),
                styles::text_muted(),
            )));
        }
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }
}

impl Widget for Landing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [hero, stats, feedback] = Layout::vertical([
            Constraint::Length(7),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        self.hero().render(hero, buf);
        self.stats().render(stats, buf);

        let block = styles::titled_block(" User feedback ");
        let inner = block.inner(feedback);
        block.render(feedback, buf);
        self.testimonials().render(inner, buf);
    }
}
