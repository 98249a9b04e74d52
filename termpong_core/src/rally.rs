use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::court::{Ball, Direction, Paddle, Side, BALL_RADIUS, COURT_HEIGHT, COURT_WIDTH, PADDLE_HEIGHT};

/// Seconds the ball rests at the centre before each serve
pub const SERVE_DELAY: f32 = 1.0;
pub const SERVE_SPEED: f32 = 28.0;
/// Largest serve angle off the horizontal, in radians
pub const MAX_SERVE_ANGLE: f32 = 0.6;
/// Speed multiplier applied on every paddle hit
pub const SPEEDUP: f32 = 1.06;
pub const MAX_BALL_SPEED: f32 = 60.0;
/// Deflection angle for a hit on the very edge of a paddle
pub const MAX_ENGLISH: f32 = 0.8;
pub const DEFAULT_TARGET_SCORE: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn add(&mut self, side: Side) -> u8 {
        let points = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *points = points.saturating_add(1);
        *points
    }
}

/// Paddle commands for a single simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaddleInput {
    pub left: Direction,
    pub right: Direction,
}

/// Notable things that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    PaddleHit(Side),
    WallBounce,
    /// A point was scored by the given side
    Goal(Side),
    /// The given side reached the target score
    Won(Side),
}

/// A single game of Pong, first to `target_score` points
#[derive(Debug, Clone)]
pub struct Match {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Side the next serve travels toward
    pub serving: Side,
    pub target_score: u8,
    serve_timer: f32,
    winner: Option<Side>,
    rng: StdRng,
}

impl Match {
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let serving = if rng.gen_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };

        Self {
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::centered(),
            score: Score::default(),
            serving,
            target_score: DEFAULT_TARGET_SCORE,
            serve_timer: SERVE_DELAY,
            winner: None,
            rng,
        }
    }

    pub fn with_target_score(mut self, target: u8) -> Self {
        self.target_score = target.max(1);
        self
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Ball is resting at the centre waiting for the next serve
    pub fn is_serving(&self) -> bool {
        self.winner.is_none() && !self.ball.is_moving()
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Returns the most significant event of the step. A finished match no
    /// longer moves.
    pub fn step(&mut self, dt: f32, input: PaddleInput) -> Option<MatchEvent> {
        if self.winner.is_some() {
            return None;
        }

        self.left.advance(input.left, dt);
        self.right.advance(input.right, dt);

        if !self.ball.is_moving() {
            self.serve_timer -= dt;
            if self.serve_timer <= 0.0 {
                self.launch();
            }
            return None;
        }

        let prev_x = self.ball.x;
        self.ball.x += self.ball.vx * dt;
        self.ball.y += self.ball.vy * dt;

        let mut event = None;

        // Top and bottom walls
        if self.ball.y - BALL_RADIUS < 0.0 {
            self.ball.y = BALL_RADIUS;
            self.ball.vy = self.ball.vy.abs();
            event = Some(MatchEvent::WallBounce);
        } else if self.ball.y + BALL_RADIUS > COURT_HEIGHT {
            self.ball.y = COURT_HEIGHT - BALL_RADIUS;
            self.ball.vy = -self.ball.vy.abs();
            event = Some(MatchEvent::WallBounce);
        }

        if let Some(side) = self.paddle_contact(prev_x) {
            self.deflect(side);
            event = Some(MatchEvent::PaddleHit(side));
        }

        if self.ball.x < 0.0 {
            return Some(self.award(Side::Right));
        }
        if self.ball.x > COURT_WIDTH {
            return Some(self.award(Side::Left));
        }

        event
    }

    /// Paddle whose face the ball crossed this step while overlapping it
    fn paddle_contact(&self, prev_x: f32) -> Option<Side> {
        match self.ball.heading()? {
            Side::Left => {
                let face = self.left.face_x();
                let crossed = prev_x - BALL_RADIUS >= face && self.ball.x - BALL_RADIUS < face;
                (crossed && self.left.covers(self.ball.y)).then_some(Side::Left)
            }
            Side::Right => {
                let face = self.right.face_x();
                let crossed = prev_x + BALL_RADIUS <= face && self.ball.x + BALL_RADIUS > face;
                (crossed && self.right.covers(self.ball.y)).then_some(Side::Right)
            }
        }
    }

    fn deflect(&mut self, side: Side) {
        let paddle = self.paddle(side);
        let reach = PADDLE_HEIGHT / 2.0 + BALL_RADIUS;
        let offset = ((self.ball.y - paddle.y) / reach).clamp(-1.0, 1.0);
        let face = paddle.face_x();

        let speed = (self.ball.speed() * SPEEDUP).min(MAX_BALL_SPEED);
        let angle = offset * MAX_ENGLISH;

        self.ball.vx = side.opponent().heading() * speed * angle.cos();
        self.ball.vy = speed * angle.sin();
        self.ball.x = face - side.heading() * BALL_RADIUS;
    }

    fn award(&mut self, scorer: Side) -> MatchEvent {
        let points = self.score.add(scorer);
        self.ball = Ball::centered();
        self.serving = scorer.opponent();
        self.serve_timer = SERVE_DELAY;

        if points >= self.target_score {
            self.winner = Some(scorer);
            MatchEvent::Won(scorer)
        } else {
            MatchEvent::Goal(scorer)
        }
    }

    fn launch(&mut self) {
        let angle = self.rng.gen_range(-MAX_SERVE_ANGLE..=MAX_SERVE_ANGLE);
        self.ball.vx = self.serving.heading() * SERVE_SPEED * angle.cos();
        self.ball.vy = SERVE_SPEED * angle.sin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolling_match() -> Match {
        let mut game = Match::with_seed(7);
        game.ball = Ball {
            x: 40.0,
            y: 12.0,
            vx: 20.0,
            vy: 0.0,
        };
        game
    }

    #[test]
    fn test_serve_waits_for_delay() {
        let mut game = Match::with_seed(42);
        assert!(game.is_serving());

        game.step(0.5, PaddleInput::default());
        assert!(!game.ball.is_moving());

        game.step(0.6, PaddleInput::default());
        assert!(game.ball.is_moving());
        assert_eq!(game.ball.heading(), Some(game.serving));
        assert!((game.ball.speed() - SERVE_SPEED).abs() < 0.01);
    }

    #[test]
    fn test_same_seed_serves_the_same_way() {
        let mut a = Match::with_seed(99);
        let mut b = Match::with_seed(99);
        a.step(SERVE_DELAY, PaddleInput::default());
        b.step(SERVE_DELAY, PaddleInput::default());
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let mut game = rolling_match();
        game.ball.y = 0.6;
        game.ball.vy = -10.0;

        let event = game.step(0.1, PaddleInput::default());
        assert_eq!(event, Some(MatchEvent::WallBounce));
        assert!(game.ball.vy > 0.0);
        assert_eq!(game.ball.y, BALL_RADIUS);
    }

    #[test]
    fn test_centre_hit_returns_ball_faster() {
        let mut game = rolling_match();
        game.ball.x = 3.0;
        game.ball.vx = -20.0;

        let event = game.step(0.1, PaddleInput::default());
        assert_eq!(event, Some(MatchEvent::PaddleHit(Side::Left)));
        assert!(game.ball.vx > 0.0);
        assert!((game.ball.speed() - 20.0 * SPEEDUP).abs() < 0.01);
        assert!(game.ball.vy.abs() < 0.01);
    }

    #[test]
    fn test_edge_hit_adds_english() {
        let mut game = rolling_match();
        game.ball.x = 76.0;
        game.ball.y = game.right.bottom();

        let event = game.step(0.1, PaddleInput::default());
        assert_eq!(event, Some(MatchEvent::PaddleHit(Side::Right)));
        assert!(game.ball.vx < 0.0);
        assert!(game.ball.vy > 0.0);
    }

    #[test]
    fn test_ball_speed_is_capped() {
        let mut game = rolling_match();
        game.ball.x = 3.0;
        game.ball.vx = -MAX_BALL_SPEED;

        game.step(0.02, PaddleInput::default());
        assert!((game.ball.speed() - MAX_BALL_SPEED).abs() < 0.01);
    }

    #[test]
    fn test_miss_scores_for_opponent() {
        let mut game = rolling_match();
        game.left.y = PADDLE_HEIGHT / 2.0;
        game.ball.x = 1.0;
        game.ball.y = 20.0;
        game.ball.vx = -20.0;

        let event = game.step(0.1, PaddleInput::default());
        assert_eq!(event, Some(MatchEvent::Goal(Side::Right)));
        assert_eq!(game.score.get(Side::Right), 1);
        assert_eq!(game.score.get(Side::Left), 0);
        assert_eq!(game.serving, Side::Left);
        assert!(game.is_serving());
    }

    #[test]
    fn test_reaching_target_wins_and_freezes() {
        let mut game = rolling_match().with_target_score(1);
        game.ball.x = 79.5;

        let event = game.step(0.1, PaddleInput::default());
        assert_eq!(event, Some(MatchEvent::Won(Side::Left)));
        assert_eq!(game.winner(), Some(Side::Left));
        assert!(!game.is_serving());

        let paddle_y = game.left.y;
        assert_eq!(
            game.step(
                5.0,
                PaddleInput {
                    left: Direction::Up,
                    right: Direction::Down,
                }
            ),
            None
        );
        assert_eq!(game.left.y, paddle_y);
        assert!(!game.ball.is_moving());
    }

    #[test]
    fn test_paddles_follow_input() {
        let mut game = Match::with_seed(1);
        let start = game.left.y;
        game.step(
            0.1,
            PaddleInput {
                left: Direction::Up,
                right: Direction::Down,
            },
        );
        assert!(game.left.y < start);
        assert!(game.right.y > start);
    }
}
