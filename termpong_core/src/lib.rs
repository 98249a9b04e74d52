pub mod ai;
pub mod court;
pub mod fps;
pub mod rally;
pub mod selector;

pub use court::{Ball, Direction, Paddle, Side};
pub use fps::FrameRateMeter;
pub use rally::{Match, MatchEvent, PaddleInput, Score};
pub use selector::Selector;
