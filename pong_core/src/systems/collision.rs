use crate::{Ball, Config, Events, GameState, Side};

/// Result of testing the ball against one end of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleContact {
    /// Ball has not reached the paddle plane, or is between it and the wall
    Clear,
    /// Ball was returned
    Hit,
    /// Ball passed the outer wall without a hit
    Miss,
}

/// Bounce the ball off the top and bottom walls
pub fn check_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let r = config.ball_radius;

    if ball.pos.y - r < 0.0 {
        ball.pos.y = r;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
    if ball.pos.y + r > config.height {
        ball.pos.y = config.height - r;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Test the ball against the paddle guarding `side`.
///
/// The span test is strict, so a ball level with a paddle edge is not returned
/// and may go on to score.
pub fn check_paddle(
    state: &mut GameState,
    side: Side,
    config: &Config,
    events: &mut Events,
) -> PaddleContact {
    let r = config.ball_radius;
    let face_x = config.paddle_face_x(side);
    let paddle = *state.paddle(side);
    let ball = &mut state.ball;

    let (crossed, past_wall) = match side {
        Side::Player => (ball.pos.x - r < face_x, ball.pos.x - r < 0.0),
        Side::Opponent => (ball.pos.x + r > face_x, ball.pos.x + r > config.width),
    };

    if !crossed {
        return PaddleContact::Clear;
    }

    if paddle.spans(ball.pos.y, config.paddle_height) {
        ball.pos.x = match side {
            Side::Player => face_x + r,
            Side::Opponent => face_x - r,
        };
        ball.vel.x = -ball.vel.x;

        // Spin: offset from paddle center, -1 at the top edge to 1 at the bottom
        let half = config.paddle_height / 2.0;
        let hit_pos = (ball.pos.y - paddle.center(config.paddle_height)) / half;
        ball.vel.y += hit_pos * config.spin_factor;

        events.ball_hit_paddle = true;
        PaddleContact::Hit
    } else if past_wall {
        PaddleContact::Miss
    } else {
        PaddleContact::Clear
    }
}
