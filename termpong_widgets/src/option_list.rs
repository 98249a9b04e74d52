use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// One entry per line, cursor marked with `>`
    Vertical,
    /// All entries on one line, cursor wrapped in brackets
    Horizontal,
}

/// Centered list of choices with one highlighted entry
pub struct OptionListWidget<'a> {
    pub items: &'a [&'a str],
    pub selected: usize,
    pub orientation: Orientation,
}

impl<'a> OptionListWidget<'a> {
    pub fn vertical(items: &'a [&'a str], selected: usize) -> Self {
        Self {
            items,
            selected,
            orientation: Orientation::Vertical,
        }
    }

    pub fn horizontal(items: &'a [&'a str], selected: usize) -> Self {
        Self {
            items,
            selected,
            orientation: Orientation::Horizontal,
        }
    }

    fn style(&self, index: usize) -> Style {
        if index == self.selected {
            Style::default()
                .fg(Theme::SELECTED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::MUTED_TEXT)
        }
    }
}

impl Widget for OptionListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = match self.orientation {
            Orientation::Vertical => self
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let prefix = if i == self.selected { "> " } else { "  " };
                    Line::from(Span::styled(format!("{}{}", prefix, item), self.style(i)))
                })
                .collect(),
            Orientation::Horizontal => {
                let spans = self
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let text = if i == self.selected {
                            format!("[ {} ]", item)
                        } else {
                            format!("  {}  ", item)
                        };
                        Span::styled(text, self.style(i))
                    })
                    .collect::<Vec<_>>();
                vec![Line::from(spans)]
            }
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
