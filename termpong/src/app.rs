use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use ratatui::Frame;

use crate::controller::{ControllerError, ScreenAction, ScreenController, ScreenId};
use crate::effects::{self, FxManager};
use crate::screens::Cue;
use crate::settings::SharedSettings;

/// Host side of the game loop: feeds the controller and runs effects on top
pub struct App {
    controller: ScreenController,
    settings: SharedSettings,
    fx: FxManager,
    /// Controller activation the effects were last set up for
    shown: Option<u64>,
    last_frame: Instant,
}

impl App {
    pub fn new(controller: ScreenController, settings: SharedSettings) -> Self {
        let mut app = Self {
            controller,
            settings,
            fx: FxManager::default(),
            shown: None,
            last_frame: Instant::now(),
        };
        app.sync_effects();
        app
    }

    pub fn controller(&self) -> &ScreenController {
        &self.controller
    }

    /// Time budget for one frame at the current target rate
    pub fn frame_time(&self) -> Duration {
        self.settings.get().frame_time()
    }

    /// Route a terminal event. Returns true if the game should quit.
    pub fn handle_event(&mut self, event: Event) -> Result<bool, ControllerError> {
        let Event::Key(key) = event else {
            return Ok(false);
        };

        if is_interrupt(&key) {
            info!("interrupted");
            return Ok(true);
        }

        let action = match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.controller.on_key_pressed(key.code)?,
            KeyEventKind::Release => self.controller.on_key_released(key.code)?,
        };
        Ok(self.process_action(action))
    }

    /// Run one simulation tick. Returns true if the game should quit.
    pub fn tick(&mut self) -> Result<bool, ControllerError> {
        let action = self.controller.update()?;
        Ok(self.process_action(action))
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.controller.render(frame);

        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        // Apply running effects on top of the rendered screen
        let area = frame.area();
        let step = tachyonfx::Duration::from_millis(elapsed.as_millis().min(1000) as _);
        self.fx.process_effects(step, frame.buffer_mut(), area);
    }

    /// Returns true if the action asks to quit
    fn process_action(&mut self, action: Option<ScreenAction>) -> bool {
        let quit = match action {
            Some(ScreenAction::Quit) => {
                info!("quit requested from {}", self.controller.active_screen().name());
                true
            }
            Some(ScreenAction::Cue(Cue::Goal)) => {
                self.fx.add_unique_effect("goal_flash", effects::goal_flash());
                false
            }
            Some(ScreenAction::Cue(Cue::MatchWon)) => {
                self.fx.add_unique_effect("match_won", effects::match_won());
                false
            }
            // Transitions were already applied by the controller
            Some(ScreenAction::SwitchTo(_)) | None => false,
        };

        self.sync_effects();
        quit
    }

    /// Start or stop screen-bound effects after a screen was (re)activated
    fn sync_effects(&mut self) {
        let activation = self.controller.activations();
        if self.shown == Some(activation) {
            return;
        }
        let active = self.controller.active_id();
        debug!("effects follow screen {}", active);

        if active == ScreenId::MENU {
            self.fx.add_unique_effect("title_shimmer", effects::title_shimmer());
        } else {
            self.fx.cancel_unique_effect("title_shimmer");
        }
        self.fx.cancel_unique_effect("match_won");

        self.shown = Some(activation);
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}
