use crate::{Config, Paddle, SpeedMultiplier};

/// Per-frame distance the opponent paddle moves at a given speed
pub fn opponent_step(speed: SpeedMultiplier, config: &Config) -> f32 {
    (config.opponent_base_speed + speed.as_f32()) * config.opponent_speed_scale
}

/// Move the opponent paddle toward the ball's height.
///
/// The paddle holds still while its center is within the slack band around
/// the ball.
pub fn track_ball(paddle: &mut Paddle, ball_y: f32, speed: SpeedMultiplier, config: &Config) {
    let center = paddle.center(config.paddle_height);
    let step = opponent_step(speed, config);

    if center < ball_y - config.opponent_slack {
        paddle.y += step;
    } else if center > ball_y + config.opponent_slack {
        paddle.y -= step;
    }

    paddle.y = config.clamp_paddle_y(paddle.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_opponent_moves_down_toward_ball() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Opponent, 100.0);
        let speed = SpeedMultiplier::new(3);

        track_ball(&mut paddle, 400.0, speed, &config);

        assert!((paddle.y - (100.0 + 5.0 * 0.7)).abs() < 1e-4);
    }

    #[test]
    fn test_opponent_moves_up_toward_ball() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Opponent, 300.0);
        let speed = SpeedMultiplier::new(5);

        track_ball(&mut paddle, 50.0, speed, &config);

        assert!((paddle.y - (300.0 - 7.0 * 0.7)).abs() < 1e-4);
    }

    #[test]
    fn test_opponent_holds_inside_slack() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Opponent, 200.0); // center 240

        track_ball(&mut paddle, 250.0, SpeedMultiplier::new(3), &config);
        assert_eq!(paddle.y, 200.0, "Exactly at slack edge holds");

        track_ball(&mut paddle, 235.0, SpeedMultiplier::new(3), &config);
        assert_eq!(paddle.y, 200.0);
    }

    #[test]
    fn test_opponent_clamped_to_playfield() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Opponent, 1.0);
        track_ball(&mut paddle, 0.0, SpeedMultiplier::new(10), &config);
        assert_eq!(paddle.y, 0.0);

        let mut paddle = Paddle::new(Side::Opponent, config.paddle_max_y() - 1.0);
        track_ball(&mut paddle, config.height, SpeedMultiplier::new(10), &config);
        assert_eq!(paddle.y, config.paddle_max_y());
    }
}
