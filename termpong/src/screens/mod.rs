pub mod frame_rate;
pub mod gameplay;
pub mod menu;

use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::controller::ScreenAction;
use crate::settings::SharedSettings;

use self::frame_rate::FrameRateScreen;
use self::gameplay::GameplayScreen;
use self::menu::MenuScreen;

/// Cosmetic requests a screen can hand to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Goal,
    MatchWon,
}

/// One mode of the game, driven by the screen controller.
///
/// `init` runs every time the screen becomes active, before any other call.
pub trait Screen {
    /// Short label for log output
    fn name(&self) -> &'static str;

    fn init(&mut self);

    /// Advance one simulation tick
    fn update(&mut self) -> Option<ScreenAction>;

    /// Draw the current state. Must not change it.
    fn render(&self, frame: &mut Frame);

    fn on_key_pressed(&mut self, code: KeyCode) -> Option<ScreenAction>;

    fn on_key_released(&mut self, _code: KeyCode) -> Option<ScreenAction> {
        None
    }
}

/// Every screen of the game, in `ScreenId` order
pub fn registry(settings: &SharedSettings, seed: Option<u64>) -> Vec<Box<dyn Screen>> {
    vec![
        Box::new(FrameRateScreen::new(settings.clone())),
        Box::new(MenuScreen::new(settings.clone())),
        Box::new(GameplayScreen::new(settings.clone(), seed)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ScreenId;

    #[test]
    fn test_registry_matches_screen_ids() {
        let screens = registry(&SharedSettings::default(), Some(1));
        assert_eq!(screens.len(), 3);
        assert_eq!(screens[ScreenId::FPS.index()].name(), "frame rate");
        assert_eq!(screens[ScreenId::MENU.index()].name(), "menu");
        assert_eq!(screens[ScreenId::GAME.index()].name(), "gameplay");
    }
}
