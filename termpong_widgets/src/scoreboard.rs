use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use termpong_core::Score;

use crate::theme::Theme;

/// One-line header: player names either side of the running score
pub struct ScoreboardWidget<'a> {
    pub score: Score,
    pub left_name: &'a str,
    pub right_name: &'a str,
    pub target: u8,
}

impl<'a> ScoreboardWidget<'a> {
    pub fn new(score: Score, left_name: &'a str, right_name: &'a str) -> Self {
        Self {
            score,
            left_name,
            right_name,
            target: 0,
        }
    }

    pub fn target(mut self, target: u8) -> Self {
        self.target = target;
        self
    }
}

impl Widget for ScoreboardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let bold = Modifier::BOLD;
        let mut spans = vec![
            Span::styled(
                format!("{}  ", self.left_name),
                Style::default().fg(Theme::PADDLE_LEFT),
            ),
            Span::styled(
                format!("{:>2}", self.score.left),
                Style::default().fg(Theme::BRIGHT_TEXT).add_modifier(bold),
            ),
            Span::styled("  :  ", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled(
                format!("{:<2}", self.score.right),
                Style::default().fg(Theme::BRIGHT_TEXT).add_modifier(bold),
            ),
            Span::styled(
                format!("  {}", self.right_name),
                Style::default().fg(Theme::PADDLE_RIGHT),
            ),
        ];

        if self.target > 0 {
            spans.push(Span::styled(
                format!("   (first to {})", self.target),
                Style::default().fg(Theme::MUTED_TEXT),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
