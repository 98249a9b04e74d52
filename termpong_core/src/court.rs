/// Court size in world units. Widgets scale this to the terminal area.
pub const COURT_WIDTH: f32 = 80.0;
pub const COURT_HEIGHT: f32 = 24.0;

pub const PADDLE_HEIGHT: f32 = 5.0;
pub const PADDLE_SPEED: f32 = 30.0;
/// Distance from each side wall to the paddle face
pub const PADDLE_INSET: f32 = 2.0;

pub const BALL_RADIUS: f32 = 0.5;

/// Which half of the court a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign of a ball travelling toward this side
    pub fn heading(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Vertical paddle command for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Still,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
            Direction::Still => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    /// Vertical centre in world units
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            y: COURT_HEIGHT / 2.0,
        }
    }

    /// X coordinate of the face the ball bounces off
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Left => PADDLE_INSET,
            Side::Right => COURT_WIDTH - PADDLE_INSET,
        }
    }

    pub fn top(&self) -> f32 {
        self.y - PADDLE_HEIGHT / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    /// Whether a ball centred at `y` overlaps the paddle span
    pub fn covers(&self, y: f32) -> bool {
        y + BALL_RADIUS >= self.top() && y - BALL_RADIUS <= self.bottom()
    }

    pub fn advance(&mut self, direction: Direction, dt: f32) {
        let half = PADDLE_HEIGHT / 2.0;
        self.y = (self.y + direction.sign() * PADDLE_SPEED * dt).clamp(half, COURT_HEIGHT - half);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Ball {
    pub fn centered() -> Self {
        Self {
            x: COURT_WIDTH / 2.0,
            y: COURT_HEIGHT / 2.0,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    pub fn is_moving(&self) -> bool {
        self.vx != 0.0 || self.vy != 0.0
    }

    /// Side the ball is currently travelling toward, if any
    pub fn heading(&self) -> Option<Side> {
        if self.vx < 0.0 {
            Some(Side::Left)
        } else if self.vx > 0.0 {
            Some(Side::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_is_clamped_to_court() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.advance(Direction::Up, 10.0);
        assert_eq!(paddle.top(), 0.0);

        paddle.advance(Direction::Down, 10.0);
        assert_eq!(paddle.bottom(), COURT_HEIGHT);
    }

    #[test]
    fn test_still_paddle_does_not_move() {
        let mut paddle = Paddle::new(Side::Right);
        let before = paddle.y;
        paddle.advance(Direction::Still, 1.0);
        assert_eq!(paddle.y, before);
    }

    #[test]
    fn test_paddle_faces() {
        assert_eq!(Paddle::new(Side::Left).face_x(), PADDLE_INSET);
        assert_eq!(Paddle::new(Side::Right).face_x(), COURT_WIDTH - PADDLE_INSET);
    }

    #[test]
    fn test_covers_includes_ball_radius() {
        let paddle = Paddle::new(Side::Left);
        assert!(paddle.covers(paddle.top() - BALL_RADIUS));
        assert!(!paddle.covers(paddle.top() - BALL_RADIUS - 0.1));
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
    }
}
