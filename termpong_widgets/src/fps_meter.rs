use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Widget};

use crate::theme::Theme;

/// Gauge comparing the measured frame rate against the target
pub struct FpsMeterWidget {
    pub measured: usize,
    pub target: u32,
}

impl FpsMeterWidget {
    pub fn new(measured: usize, target: u32) -> Self {
        Self { measured, target }
    }

    /// Fraction of the target actually reached, clamped to `[0, 1]`
    pub fn ratio(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (self.measured as f64 / self.target as f64).clamp(0.0, 1.0)
    }

    fn color(&self) -> Color {
        match self.ratio() {
            r if r >= 0.9 => Theme::METER_GOOD,
            r if r >= 0.6 => Theme::METER_WARN,
            _ => Theme::METER_BAD,
        }
    }
}

impl Widget for FpsMeterWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::DIM_TEXT))
            .title(" measured ");

        let label = format!("{} / {} fps", self.measured, self.target);
        Gauge::default()
            .block(block)
            .gauge_style(
                Style::default()
                    .fg(self.color())
                    .bg(Theme::BG)
                    .add_modifier(Modifier::BOLD),
            )
            .ratio(self.ratio())
            .label(label)
            .render(area, buf);
    }
}
