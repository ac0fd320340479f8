use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub speed_divisor: f32,
    pub spin_factor: f32,
    pub serve_max_angle: f32,
    pub opponent_slack: f32,
    pub opponent_base_speed: f32,
    pub opponent_speed_scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::PLAYFIELD_WIDTH,
            height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_base_speed: Params::BALL_BASE_SPEED,
            speed_divisor: Params::SPEED_DIVISOR,
            spin_factor: Params::SPIN_FACTOR,
            serve_max_angle: Params::SERVE_MAX_ANGLE,
            opponent_slack: Params::OPPONENT_SLACK,
            opponent_base_speed: Params::OPPONENT_BASE_SPEED,
            opponent_speed_scale: Params::OPPONENT_SPEED_SCALE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Playfield center, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Left edge of the paddle rectangle for a side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => self.width - self.paddle_margin - self.paddle_width,
        }
    }

    /// X-plane the ball's leading edge must cross to reach a paddle
    pub fn paddle_face_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin + self.paddle_width,
            Side::Opponent => self.width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Largest valid paddle top
    pub fn paddle_max_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    /// Clamp paddle top to playfield bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.max(0.0).min(self.paddle_max_y())
    }

    /// Paddle top that centers the paddle vertically
    pub fn centered_paddle_y(&self) -> f32 {
        (self.height - self.paddle_height) / 2.0
    }
}
