use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::{GameRng, Score};

/// Complete simulation state. Everything a frame reads or writes lives here.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// Paddles centered, ball launched from the center at base speed
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        let paddle_y = config.centered_paddle_y();
        Self {
            player: Paddle::new(Side::Player, paddle_y),
            opponent: Paddle::new(Side::Opponent, paddle_y),
            ball: Ball::launch(config.center(), config.ball_base_speed, rng),
            score: Score::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }
}
