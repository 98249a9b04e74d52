use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::controller::ScreenId;
use crate::settings::{Opponent, Settings, DEFAULT_FRAME_RATE, FRAME_RATES};

#[derive(Parser, Debug)]
#[command(name = "termpong")]
#[command(about = "Pong for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Screen shown at startup
    #[arg(long, value_enum, default_value_t = StartScreen::Fps)]
    pub start: StartScreen,

    /// Target frame rate (also the simulation tick rate): 30, 60 or 120
    #[arg(long, default_value_t = DEFAULT_FRAME_RATE, value_parser = parse_frame_rate)]
    pub fps: u32,

    /// Who plays the right paddle when a match is started with --start game
    #[arg(long, value_enum, default_value_t = Opponent::Computer)]
    pub opponent: Opponent,

    /// Points needed to win a match
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=99))]
    pub points: u8,

    /// Seed for serve angles, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// File that receives log output
    #[arg(long, default_value = "termpong.log")]
    pub log_file: PathBuf,

    /// Log filter in env_logger syntax (e.g. "debug"), overrides RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartScreen {
    Fps,
    Menu,
    Game,
}

impl StartScreen {
    pub fn id(self) -> ScreenId {
        match self {
            StartScreen::Fps => ScreenId::FPS,
            StartScreen::Menu => ScreenId::MENU,
            StartScreen::Game => ScreenId::GAME,
        }
    }
}

/// Only the rates the frame-rate screen can show are accepted
fn parse_frame_rate(value: &str) -> Result<u32, String> {
    let rate: u32 = value
        .parse()
        .map_err(|_| format!("`{}` is not a frame rate", value))?;
    if FRAME_RATES.contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("frame rate must be one of {:?}", FRAME_RATES))
    }
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            opponent: self.opponent,
            frame_rate: self.fps,
            target_score: self.points,
        }
    }
}
