use ratatui::style::Color;

/// Phosphor-green arcade palette for the TUI
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(8, 12, 10);
    pub const COURT: Color = Color::Rgb(12, 20, 16);

    // Court pieces
    pub const PADDLE_LEFT: Color = Color::Rgb(76, 201, 240);
    pub const PADDLE_RIGHT: Color = Color::Rgb(230, 57, 70);
    pub const BALL: Color = Color::Rgb(240, 240, 240);
    pub const NET: Color = Color::Rgb(60, 80, 70);
    pub const WALL: Color = Color::Rgb(90, 120, 100);

    // Meter
    pub const METER_GOOD: Color = Color::Rgb(6, 214, 160);
    pub const METER_WARN: Color = Color::Rgb(255, 183, 3);
    pub const METER_BAD: Color = Color::Rgb(230, 57, 70);

    // UI elements
    pub const ACCENT: Color = Color::Rgb(57, 255, 20);
    pub const SELECTED: Color = Color::Rgb(255, 214, 10);
    pub const DIM_TEXT: Color = Color::Rgb(100, 110, 105);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const MUTED_TEXT: Color = Color::Rgb(160, 175, 165);
}
