use crossterm::event::KeyCode;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use termpong_core::{ai, Direction, Match, MatchEvent, PaddleInput, Side};
use termpong_widgets::court::CourtWidget;
use termpong_widgets::popup::PopupWidget;
use termpong_widgets::scoreboard::ScoreboardWidget;
use termpong_widgets::theme::Theme;

use crate::controller::{ScreenAction, ScreenId};
use crate::screens::{Cue, Screen};
use crate::settings::{Opponent, SharedSettings};

/// Seconds a key press keeps a paddle moving without a repeat or release
const HOLD_SECS: f32 = 0.3;

/// Paddle direction held by a key.
///
/// Terminals that report releases stop the paddle right away; the others
/// keep it moving for as long as repeats arrive.
#[derive(Debug, Clone, Copy, Default)]
struct HeldKey {
    direction: Direction,
    remaining: f32,
}

impl HeldKey {
    fn press(&mut self, direction: Direction) {
        self.direction = direction;
        self.remaining = HOLD_SECS;
    }

    fn release(&mut self, direction: Direction) {
        if self.direction == direction {
            *self = HeldKey::default();
        }
    }

    fn tick(&mut self, dt: f32) -> Direction {
        if self.remaining <= 0.0 {
            return Direction::Still;
        }
        self.remaining -= dt;
        self.direction
    }
}

pub struct GameplayScreen {
    settings: SharedSettings,
    rng: StdRng,
    game: Match,
    opponent: Opponent,
    left_key: HeldKey,
    right_key: HeldKey,
    paused: bool,
}

impl GameplayScreen {
    /// A fixed `seed` makes every match serve the same way
    pub fn new(settings: SharedSettings, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let game = Match::with_seed(rng.gen());

        Self {
            settings,
            rng,
            game,
            opponent: Opponent::Computer,
            left_key: HeldKey::default(),
            right_key: HeldKey::default(),
            paused: false,
        }
    }

    /// Paddle and direction a key steers. Arrows drive the right paddle in
    /// two-player games and the left one against the computer.
    fn binding(&self, code: KeyCode) -> Option<(Side, Direction)> {
        let arrows = match self.opponent {
            Opponent::Human => Side::Right,
            Opponent::Computer => Side::Left,
        };
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') => Some((Side::Left, Direction::Up)),
            KeyCode::Char('s') | KeyCode::Char('S') => Some((Side::Left, Direction::Down)),
            KeyCode::Up => Some((arrows, Direction::Up)),
            KeyCode::Down => Some((arrows, Direction::Down)),
            _ => None,
        }
    }

    fn held_key(&mut self, side: Side) -> &mut HeldKey {
        match side {
            Side::Left => &mut self.left_key,
            Side::Right => &mut self.right_key,
        }
    }

    fn player_names(&self) -> (&'static str, &'static str) {
        match self.opponent {
            Opponent::Computer => ("P1", "CPU"),
            Opponent::Human => ("P1", "P2"),
        }
    }
}

impl Screen for GameplayScreen {
    fn name(&self) -> &'static str {
        "gameplay"
    }

    fn init(&mut self) {
        let settings = self.settings.get();
        self.opponent = settings.opponent;
        self.game = Match::with_seed(self.rng.gen()).with_target_score(settings.target_score);
        self.left_key = HeldKey::default();
        self.right_key = HeldKey::default();
        self.paused = false;
        info!(
            "new match against {:?}, first to {}",
            self.opponent, self.game.target_score
        );
    }

    fn update(&mut self) -> Option<ScreenAction> {
        if self.paused {
            return None;
        }

        let dt = self.settings.get().dt();
        let left = self.left_key.tick(dt);
        let right = match self.opponent {
            Opponent::Computer => ai::steer(&self.game.right, &self.game.ball),
            Opponent::Human => self.right_key.tick(dt),
        };

        match self.game.step(dt, PaddleInput { left, right })? {
            MatchEvent::Goal(side) => {
                debug!(
                    "point to {}, score {}-{}",
                    side.label(),
                    self.game.score.left,
                    self.game.score.right
                );
                Some(ScreenAction::Cue(Cue::Goal))
            }
            MatchEvent::Won(side) => {
                info!(
                    "{} wins {}-{}",
                    side.label(),
                    self.game.score.left,
                    self.game.score.right
                );
                Some(ScreenAction::Cue(Cue::MatchWon))
            }
            MatchEvent::PaddleHit(_) | MatchEvent::WallBounce => None,
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Scoreboard
            Constraint::Min(0),    // Court
            Constraint::Length(1), // Help
        ])
        .split(area);

        let (left_name, right_name) = self.player_names();
        let scoreboard = ScoreboardWidget::new(self.game.score, left_name, right_name)
            .target(self.game.target_score);
        frame.render_widget(scoreboard, chunks[0]);

        frame.render_widget(CourtWidget::new(&self.game), chunks[1]);

        let keys = match self.opponent {
            Opponent::Computer => "W/S \u{2191}\u{2193}",
            Opponent::Human => "W/S  P2 \u{2191}\u{2193}",
        };
        let help = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled(keys, Style::default().fg(Theme::ACCENT)),
            Span::styled("] Move  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("P", Style::default().fg(Theme::ACCENT)),
            Span::styled("] Pause  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Esc", Style::default().fg(Theme::ACCENT)),
            Span::styled("] Menu", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);

        // === Overlays ===
        let bright = Style::default()
            .fg(Theme::BRIGHT_TEXT)
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(Theme::MUTED_TEXT);

        if let Some(winner) = self.game.winner() {
            let name = match winner {
                Side::Left => left_name,
                Side::Right => right_name,
            };
            let headline = format!(
                "{} wins {} - {}",
                name, self.game.score.left, self.game.score.right
            );
            let popup = PopupWidget::new("GAME OVER")
                .line(&headline, bright)
                .line("", muted)
                .line("[Enter] Rematch  [Esc] Menu", muted);
            frame.render_widget(popup, chunks[1]);
        } else if self.paused {
            let popup = PopupWidget::new("PAUSED")
                .line("[P] Resume", bright)
                .line("[Esc] Menu", muted);
            frame.render_widget(popup, chunks[1]);
        }
    }

    fn on_key_pressed(&mut self, code: KeyCode) -> Option<ScreenAction> {
        if let Some((side, direction)) = self.binding(code) {
            self.held_key(side).press(direction);
            return None;
        }

        match code {
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                if self.game.winner().is_none() {
                    self.paused = !self.paused;
                    debug!("paused: {}", self.paused);
                }
            }
            // Re-entering the screen starts a fresh match
            KeyCode::Enter if self.game.winner().is_some() => {
                return Some(ScreenAction::SwitchTo(ScreenId::GAME));
            }
            KeyCode::Esc => return Some(ScreenAction::SwitchTo(ScreenId::MENU)),
            _ => {}
        }
        None
    }

    fn on_key_released(&mut self, code: KeyCode) -> Option<ScreenAction> {
        if let Some((side, direction)) = self.binding(code) {
            self.held_key(side).release(direction);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use termpong_core::Ball;

    use super::*;
    use crate::settings::Settings;

    fn screen(opponent: Opponent, target_score: u8) -> GameplayScreen {
        let settings = SharedSettings::default();
        settings.set(Settings {
            opponent,
            target_score,
            ..Settings::default()
        });
        let mut screen = GameplayScreen::new(settings, Some(11));
        screen.init();
        screen
    }

    /// Put the ball one step away from leaving the right edge
    fn ball_about_to_exit(screen: &mut GameplayScreen) {
        screen.game.ball = Ball {
            x: 79.5,
            y: 12.0,
            vx: 60.0,
            vy: 0.0,
        };
    }

    fn screen_text(screen: &GameplayScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 28)).unwrap();
        terminal.draw(|frame| screen.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_init_starts_a_fresh_match() {
        let mut screen = screen(Opponent::Computer, 7);
        screen.game.score.left = 4;
        screen.paused = true;

        screen.init();
        assert_eq!(screen.game.score.left, 0);
        assert_eq!(screen.game.target_score, 7);
        assert!(!screen.paused);
        assert!(screen.game.is_serving());
    }

    #[test]
    fn test_held_key_moves_paddle_until_released() {
        let mut screen = screen(Opponent::Human, 7);
        let start = screen.game.left.y;

        screen.on_key_pressed(KeyCode::Char('w'));
        screen.update();
        let moved = screen.game.left.y;
        assert!(moved < start);

        screen.on_key_released(KeyCode::Char('w'));
        screen.update();
        assert_eq!(screen.game.left.y, moved);
    }

    #[test]
    fn test_press_without_release_expires() {
        let mut screen = screen(Opponent::Human, 7);
        screen.on_key_pressed(KeyCode::Char('s'));
        for _ in 0..30 {
            screen.update();
        }
        let settled = screen.game.left.y;
        screen.update();
        assert_eq!(screen.game.left.y, settled);
    }

    #[test]
    fn test_repeated_press_renews_hold() {
        let mut screen = screen(Opponent::Human, 7);
        screen.on_key_pressed(KeyCode::Char('s'));
        for _ in 0..30 {
            screen.update();
        }
        screen.game.left.y = 12.0;
        screen.update();
        assert_eq!(screen.game.left.y, 12.0);

        screen.on_key_pressed(KeyCode::Char('s'));
        screen.update();
        assert!(screen.game.left.y > 12.0);
    }

    #[test]
    fn test_arrows_follow_opponent_mode() {
        let mut two_player = screen(Opponent::Human, 7);
        let start = two_player.game.right.y;
        two_player.on_key_pressed(KeyCode::Down);
        two_player.update();
        assert!(two_player.game.right.y > start);

        let mut one_player = screen(Opponent::Computer, 7);
        let start = one_player.game.left.y;
        one_player.on_key_pressed(KeyCode::Down);
        one_player.update();
        assert!(one_player.game.left.y > start);
    }

    #[test]
    fn test_pause_freezes_the_match() {
        let mut screen = screen(Opponent::Human, 7);
        screen.on_key_pressed(KeyCode::Char('w'));
        screen.on_key_pressed(KeyCode::Char('p'));
        let frozen = screen.game.left.y;

        for _ in 0..10 {
            assert_eq!(screen.update(), None);
        }
        assert_eq!(screen.game.left.y, frozen);

        screen.on_key_pressed(KeyCode::Char('p'));
        screen.update();
        assert!(screen.game.left.y < frozen);
    }

    #[test]
    fn test_goal_and_win_become_cues() {
        let mut screen = screen(Opponent::Computer, 2);

        ball_about_to_exit(&mut screen);
        assert_eq!(screen.update(), Some(ScreenAction::Cue(Cue::Goal)));

        ball_about_to_exit(&mut screen);
        assert_eq!(screen.update(), Some(ScreenAction::Cue(Cue::MatchWon)));
        assert_eq!(screen.game.winner(), Some(Side::Left));
    }

    #[test]
    fn test_enter_after_win_requests_rematch() {
        let mut screen = screen(Opponent::Computer, 1);
        assert_eq!(screen.on_key_pressed(KeyCode::Enter), None);

        ball_about_to_exit(&mut screen);
        screen.update();
        assert_eq!(
            screen.on_key_pressed(KeyCode::Enter),
            Some(ScreenAction::SwitchTo(ScreenId::GAME))
        );
    }

    #[test]
    fn test_esc_returns_to_menu() {
        let mut screen = screen(Opponent::Computer, 7);
        assert_eq!(
            screen.on_key_pressed(KeyCode::Esc),
            Some(ScreenAction::SwitchTo(ScreenId::MENU))
        );
    }

    #[test]
    fn test_render_shows_scoreboard_and_overlays() {
        let mut screen = screen(Opponent::Computer, 1);
        let text = screen_text(&screen);
        assert!(text.contains("CPU"));
        assert!(!text.contains("PAUSED"));

        screen.on_key_pressed(KeyCode::Char('p'));
        assert!(screen_text(&screen).contains("PAUSED"));

        screen.on_key_pressed(KeyCode::Char('p'));
        ball_about_to_exit(&mut screen);
        screen.update();
        let text = screen_text(&screen);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("P1 wins 1 - 0"));
    }
}
