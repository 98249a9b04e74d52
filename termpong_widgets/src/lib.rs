pub mod court;
pub mod fps_meter;
pub mod option_list;
pub mod popup;
pub mod scoreboard;
pub mod theme;

pub use theme::Theme;
