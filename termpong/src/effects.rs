use ratatui::style::Color;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation};

/// Keyed effect manager, one running effect per key
pub type FxManager = EffectManager<&'static str>;

// ─── Effect Factories ────────────────────────────────────────────────

const FLASH: Color = Color::Rgb(255, 255, 255);

/// Quick white flash over the court when a point is scored
pub fn goal_flash() -> Effect {
    let flash = fx::fade_to_fg(FLASH, (120, Interpolation::QuadOut));
    let settle = fx::fade_from_fg(FLASH, (380, Interpolation::QuadIn));
    fx::sequence(&[flash, settle])
}

/// Celebration shimmer when the winning point lands
pub fn match_won() -> Effect {
    let shift = fx::hsl_shift_fg([30.0, 0.0, 0.15], (800, Interpolation::SineInOut));
    fx::ping_pong(shift)
}

/// Gentle pulse on the menu title
pub fn title_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([15.0, 0.1, 0.1], (1200, Interpolation::SineInOut));
    fx::repeating(fx::ping_pong(shift))
}
