use std::time::Instant;

use crossterm::event::KeyCode;
use log::info;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use termpong_core::{FrameRateMeter, Selector};
use termpong_widgets::fps_meter::FpsMeterWidget;
use termpong_widgets::option_list::OptionListWidget;
use termpong_widgets::theme::Theme;

use crate::controller::{ScreenAction, ScreenId};
use crate::screens::Screen;
use crate::settings::{SharedSettings, FRAME_RATES};

const RATE_LABELS: [&str; 3] = ["30", "60", "120"];

/// Live frame-rate readout plus a picker for the target rate
pub struct FrameRateScreen {
    settings: SharedSettings,
    meter: FrameRateMeter,
    cursor: Selector,
}

impl FrameRateScreen {
    pub fn new(settings: SharedSettings) -> Self {
        Self {
            settings,
            meter: FrameRateMeter::new(),
            cursor: Selector::new(FRAME_RATES.len()),
        }
    }

    pub fn selected_rate(&self) -> u32 {
        FRAME_RATES[self.cursor.index()]
    }

    fn render_readout(&self, frame: &mut Frame, area: Rect) {
        let frame_time = match self.meter.frame_time() {
            Some(t) => format!("{:.1} ms per frame", t.as_secs_f64() * 1000.0),
            None => "measuring...".to_string(),
        };
        let readout = Paragraph::new(Line::from(Span::styled(
            frame_time,
            Style::default().fg(Theme::MUTED_TEXT),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(readout, area);
    }
}

impl Screen for FrameRateScreen {
    fn name(&self) -> &'static str {
        "frame rate"
    }

    fn init(&mut self) {
        self.meter.reset();
        let current = self.settings.get().frame_rate;
        if let Some(index) = FRAME_RATES.iter().position(|&rate| rate == current) {
            self.cursor.select(index);
        }
    }

    fn update(&mut self) -> Option<ScreenAction> {
        self.meter.record(Instant::now());
        None
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

        let chunks = Layout::vertical([
            Constraint::Percentage(25),
            Constraint::Length(2), // Title
            Constraint::Length(3), // Meter
            Constraint::Length(2), // Frame time
            Constraint::Length(2), // Picker
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "FRAME RATE",
            Style::default()
                .fg(Theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let meter_area = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(40),
            Constraint::Min(0),
        ])
        .split(chunks[2])[1];
        let meter = FpsMeterWidget::new(self.meter.rate(), self.settings.get().frame_rate);
        frame.render_widget(meter, meter_area);

        self.render_readout(frame, chunks[3]);

        let picker = OptionListWidget::horizontal(&RATE_LABELS, self.cursor.index());
        frame.render_widget(picker, chunks[4]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("\u{2190}\u{2192}", Style::default().fg(Theme::ACCENT)),
            Span::styled("] Choose  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::ACCENT)),
            Span::styled("] Apply  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Esc", Style::default().fg(Theme::ACCENT)),
            Span::styled("] Menu  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("q", Style::default().fg(Theme::ACCENT)),
            Span::styled("] Quit", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[6]);
    }

    fn on_key_pressed(&mut self, code: KeyCode) -> Option<ScreenAction> {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.cursor.prev(),
            KeyCode::Right | KeyCode::Char('l') => self.cursor.next(),
            KeyCode::Enter => {
                let mut settings = self.settings.get();
                settings.frame_rate = self.selected_rate();
                self.settings.set(settings);
                info!("target frame rate set to {}", settings.frame_rate);
                return Some(ScreenAction::SwitchTo(ScreenId::MENU));
            }
            KeyCode::Esc => return Some(ScreenAction::SwitchTo(ScreenId::MENU)),
            KeyCode::Char('q') | KeyCode::Char('Q') => return Some(ScreenAction::Quit),
            _ => {}
        }
        None
    }
}
