mod app;
mod cli;
mod controller;
mod effects;
mod logging;
mod screens;
mod settings;

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Instant;

use clap::Parser;
use crossterm::event::{
    self, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use log::{info, warn};
use ratatui::prelude::*;

use app::App;
use cli::Cli;
use controller::ScreenController;
use logging::LoggingConfig;
use settings::SharedSettings;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_logging(&LoggingConfig {
        filter: cli.log_level.clone(),
        file: cli.log_file.clone(),
    })?;

    let settings: SharedSettings = Rc::new(Cell::new(cli.settings()));
    let controller = ScreenController::new(screens::registry(&settings, cli.seed), cli.start.id())?;
    info!(
        "termpong starting on {:?} at {} fps, {} screens registered",
        cli.start,
        cli.fps,
        controller.len()
    );
    let mut app = App::new(controller, settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Without this most terminals never report key releases
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    } else {
        warn!("terminal does not report key releases, paddles stop on a timer");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(
        "termpong exiting from {}",
        app.controller().active_screen().name()
    );
    result
}

/// Frame loop: drain input until the frame deadline, then update and draw
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> color_eyre::Result<()> {
    let mut deadline = Instant::now();

    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if app.handle_event(event::read()?)? {
                break;
            }
            continue;
        }

        if app.tick()? {
            break;
        }
        terminal.draw(|frame| app.render(frame))?;

        // Skip missed frames instead of racing to catch up
        deadline += app.frame_time();
        let now = Instant::now();
        if deadline < now {
            deadline = now;
        }
    }

    Ok(())
}
