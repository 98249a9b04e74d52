use crossterm::event::KeyCode;
use log::info;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use termpong_core::Selector;
use termpong_widgets::option_list::OptionListWidget;
use termpong_widgets::theme::Theme;

use crate::controller::{ScreenAction, ScreenId};
use crate::screens::Screen;
use crate::settings::{Opponent, SharedSettings};

const ITEMS: [&str; 4] = ["1 Player", "2 Players", "Frame Rate", "Quit"];

const TITLE: [&str; 5] = [
    " ____   ___  _   _  ____ ",
    "|  _ \\ / _ \\| \\ | |/ ___|",
    "| |_) | | | |  \\| | |  _ ",
    "|  __/| |_| | |\\  | |_| |",
    "|_|    \\___/|_| \\_|\\____|",
];

pub struct MenuScreen {
    settings: SharedSettings,
    cursor: Selector,
}

impl MenuScreen {
    pub fn new(settings: SharedSettings) -> Self {
        Self {
            settings,
            cursor: Selector::new(ITEMS.len()),
        }
    }

    fn start_match(&mut self, opponent: Opponent) -> Option<ScreenAction> {
        let mut settings = self.settings.get();
        settings.opponent = opponent;
        self.settings.set(settings);
        info!("starting match against {:?}", opponent);
        Some(ScreenAction::SwitchTo(ScreenId::GAME))
    }
}

impl Screen for MenuScreen {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn init(&mut self) {
        self.cursor.select(0);
    }

    fn update(&mut self) -> Option<ScreenAction> {
        None
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

        let chunks = Layout::vertical([
            Constraint::Percentage(25),
            Constraint::Length(8),
            Constraint::Length(ITEMS.len() as u16 + 1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

        let mut title_lines: Vec<Line> = TITLE
            .iter()
            .map(|row| {
                Line::from(Span::styled(
                    *row,
                    Style::default()
                        .fg(Theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        title_lines.push(Line::from(""));
        title_lines.push(Line::from(Span::styled(
            "in your terminal",
            Style::default().fg(Theme::MUTED_TEXT),
        )));

        let title = Paragraph::new(title_lines).alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let menu = OptionListWidget::vertical(&ITEMS, self.cursor.index());
        frame.render_widget(menu, chunks[2]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("\u{2191}\u{2193}", Style::default().fg(Theme::ACCENT)),
            Span::styled("] Navigate  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::ACCENT)),
            Span::styled("] Select  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("q", Style::default().fg(Theme::ACCENT)),
            Span::styled("] Quit", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[4]);
    }

    fn on_key_pressed(&mut self, code: KeyCode) -> Option<ScreenAction> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.next(),
            KeyCode::Enter => {
                return match self.cursor.index() {
                    0 => self.start_match(Opponent::Computer),
                    1 => self.start_match(Opponent::Human),
                    2 => Some(ScreenAction::SwitchTo(ScreenId::FPS)),
                    _ => Some(ScreenAction::Quit),
                };
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return Some(ScreenAction::Quit),
            _ => {}
        }
        None
    }
}
