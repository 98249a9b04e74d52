use std::fmt;

use crossterm::event::KeyCode;
use log::{debug, warn};
use ratatui::Frame;
use thiserror::Error;

use crate::screens::{Cue, Screen};

/// Stable index of a screen in the controller's registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(pub usize);

impl ScreenId {
    pub const FPS: ScreenId = ScreenId(0);
    pub const MENU: ScreenId = ScreenId(1);
    pub const GAME: ScreenId = ScreenId(2);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Actions that screens can return from `update` and key handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// Make another screen active. Applied by the controller before the
    /// dispatching call returns.
    SwitchTo(ScreenId),
    /// Passed through to the host untouched. Screens define the variants.
    Cue(Cue),
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("screen {id} is not registered (registry holds {count} screens)")]
    InvalidScreen { id: ScreenId, count: usize },

    #[error("cannot build a screen controller without screens")]
    EmptyRegistry,
}

/// Owns every screen and routes ticks, frames and keys to the active one.
///
/// Exactly one screen is active at any time. Switching screens calls the new
/// screen's `init` before anything else reaches it.
pub struct ScreenController {
    screens: Vec<Box<dyn Screen>>,
    active: usize,
    activations: u64,
}

impl ScreenController {
    /// Build the registry and initialize `initial`.
    pub fn new(screens: Vec<Box<dyn Screen>>, initial: ScreenId) -> Result<Self, ControllerError> {
        if screens.is_empty() {
            return Err(ControllerError::EmptyRegistry);
        }

        let count = screens.len();
        if initial.index() >= count {
            return Err(ControllerError::InvalidScreen { id: initial, count });
        }

        let mut controller = Self {
            screens,
            active: initial.index(),
            activations: 1,
        };
        let screen = &mut controller.screens[controller.active];
        debug!("screen controller starting on {} {}", initial, screen.name());
        screen.init();
        Ok(controller)
    }

    /// Number of registered screens
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn active_id(&self) -> ScreenId {
        ScreenId(self.active)
    }

    /// Number of times a screen has been activated, re-selections included
    pub fn activations(&self) -> u64 {
        self.activations
    }

    pub fn active_screen(&self) -> &dyn Screen {
        self.screens[self.active].as_ref()
    }

    /// Make `id` the active screen and initialize it.
    ///
    /// Out-of-range ids are rejected and leave the controller untouched.
    /// Selecting the screen that is already active initializes it again.
    pub fn set_active_screen(&mut self, id: ScreenId) -> Result<(), ControllerError> {
        let count = self.screens.len();
        let from = self.screens[self.active].name();

        if id.index() >= count {
            warn!("rejected switch from {} to unknown screen {}", from, id);
            return Err(ControllerError::InvalidScreen { id, count });
        }

        self.active = id.index();
        self.activations += 1;
        let screen = &mut self.screens[self.active];
        debug!("switching screen {} -> {} {}", from, id, screen.name());
        screen.init();
        Ok(())
    }

    /// Run one simulation tick on the active screen
    pub fn update(&mut self) -> Result<Option<ScreenAction>, ControllerError> {
        let action = self.screens[self.active].update();
        self.apply(action)
    }

    pub fn render(&self, frame: &mut Frame) {
        self.screens[self.active].render(frame);
    }

    pub fn on_key_pressed(&mut self, code: KeyCode) -> Result<Option<ScreenAction>, ControllerError> {
        let action = self.screens[self.active].on_key_pressed(code);
        self.apply(action)
    }

    pub fn on_key_released(&mut self, code: KeyCode) -> Result<Option<ScreenAction>, ControllerError> {
        let action = self.screens[self.active].on_key_released(code);
        self.apply(action)
    }

    /// Consume transitions, hand everything else back to the caller
    fn apply(&mut self, action: Option<ScreenAction>) -> Result<Option<ScreenAction>, ControllerError> {
        match action {
            Some(ScreenAction::SwitchTo(id)) => {
                self.set_active_screen(id)?;
                Ok(None)
            }
            other => Ok(other),
        }
    }
}
