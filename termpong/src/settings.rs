use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use clap::ValueEnum;
use termpong_core::rally::DEFAULT_TARGET_SCORE;

/// Frame rates offered on the frame-rate screen
pub const FRAME_RATES: [u32; 3] = [30, 60, 120];
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Opponent {
    #[default]
    Computer,
    Human,
}

/// Choices shared between the host loop and the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub opponent: Opponent,
    pub frame_rate: u32,
    pub target_score: u8,
}

impl Settings {
    /// Wall-clock budget for one frame
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }

    /// Simulation step in seconds
    pub fn dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opponent: Opponent::default(),
            frame_rate: DEFAULT_FRAME_RATE,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

/// Everything runs on the game-loop thread, so a `Cell` is enough
pub type SharedSettings = Rc<Cell<Settings>>;
