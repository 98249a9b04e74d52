use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget};

use crate::theme::Theme;

/// Boxed message drawn over the middle of the court
pub struct PopupWidget<'a> {
    pub title: &'a str,
    pub lines: Vec<Line<'a>>,
}

impl<'a> PopupWidget<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, text: &'a str, style: Style) -> Self {
        self.lines.push(Line::from(Span::styled(text, style)));
        self
    }

    /// Box size that fits the title and every line, plus borders and margin
    fn size(&self) -> (u16, u16) {
        let widest = self
            .lines
            .iter()
            .map(Line::width)
            .chain(std::iter::once(self.title.len() + 2))
            .max()
            .unwrap_or(0);
        (widest as u16 + 6, self.lines.len() as u16 + 4)
    }
}

impl Widget for PopupWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.size();
        let popup_area = centered_rect(width, height, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Theme::ACCENT))
            .style(Style::default().bg(Theme::BG))
            .title(Line::from(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(Theme::SELECTED)
                    .add_modifier(Modifier::BOLD),
            )))
            .title_alignment(Alignment::Center);

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let body = Rect::new(
            inner.x,
            inner.y + inner.height.saturating_sub(self.lines.len() as u16) / 2,
            inner.width,
            inner.height.min(self.lines.len() as u16),
        );
        Paragraph::new(self.lines)
            .alignment(Alignment::Center)
            .render(body, buf);
    }
}

/// A `width` x `height` rect centred in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(10, 5, 40, 20);
        assert_eq!(centered_rect(20, 10, area), Rect::new(20, 10, 20, 10));
        assert_eq!(centered_rect(100, 100, area), area);
    }

    #[test]
    fn test_size_grows_with_content() {
        let popup = PopupWidget::new("PAUSED")
            .line("Press P to resume", Style::default())
            .line("Esc for menu", Style::default());
        assert_eq!(popup.size(), (17 + 6, 2 + 4));
    }
}
