use crate::court::{Ball, Direction, Paddle, COURT_HEIGHT};

/// How far the ball may be from the paddle centre before the CPU reacts
pub const DEAD_ZONE: f32 = 1.0;

/// Pick a direction for a computer-controlled paddle.
///
/// The paddle chases the ball only while it is coming toward it, otherwise it
/// drifts back to the middle of the court.
pub fn steer(paddle: &Paddle, ball: &Ball) -> Direction {
    let target = if ball.heading() == Some(paddle.side) {
        ball.y
    } else {
        COURT_HEIGHT / 2.0
    };

    let delta = target - paddle.y;
    if delta < -DEAD_ZONE {
        Direction::Up
    } else if delta > DEAD_ZONE {
        Direction::Down
    } else {
        Direction::Still
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::Side;

    fn ball_at(y: f32, vx: f32) -> Ball {
        Ball {
            x: 40.0,
            y,
            vx,
            vy: 0.0,
        }
    }

    #[test]
    fn test_chases_incoming_ball() {
        let paddle = Paddle::new(Side::Right);
        assert_eq!(steer(&paddle, &ball_at(2.0, 10.0)), Direction::Up);
        assert_eq!(steer(&paddle, &ball_at(22.0, 10.0)), Direction::Down);
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        let paddle = Paddle::new(Side::Right);
        assert_eq!(steer(&paddle, &ball_at(paddle.y + 0.5, 10.0)), Direction::Still);
    }

    #[test]
    fn test_recentres_when_ball_leaves() {
        let mut paddle = Paddle::new(Side::Right);
        paddle.y = 4.0;
        assert_eq!(steer(&paddle, &ball_at(2.0, -10.0)), Direction::Down);

        paddle.y = COURT_HEIGHT / 2.0;
        assert_eq!(steer(&paddle, &ball_at(2.0, -10.0)), Direction::Still);
    }
}
