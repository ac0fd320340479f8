use glam::Vec2;
use rand::Rng;

use crate::resources::GameRng;

/// Which end of the playfield a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,   // left, pointer controlled
    Opponent, // right, tracks the ball
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Paddle - `y` is the top edge, always inside the playfield
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Vertical center of the paddle
    pub fn center(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }

    /// Strict span test: touching either edge is not a hit
    pub fn spans(&self, y: f32, height: f32) -> bool {
        y > self.y && y < self.y + height
    }
}

/// Ball - velocity is in pixels per frame before the speed multiplier
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Opening serve: any direction at base speed
    pub fn launch(center: Vec2, speed: f32, rng: &mut GameRng) -> Self {
        let angle: f32 = rng.0.gen_range(0.0..std::f32::consts::TAU);
        Self::new(center, Vec2::new(angle.cos(), angle.sin()) * speed)
    }

    /// Re-serve from the center after a point.
    ///
    /// The horizontal direction is the reverse of the current one, so a ball
    /// that left through the player's wall is served back toward the opponent.
    pub fn reset(&mut self, center: Vec2, speed: f32, max_angle: f32, rng: &mut GameRng) {
        self.pos = center;

        let direction = if self.vel.x > 0.0 { -1.0 } else { 1.0 };
        let angle: f32 = rng.0.gen_range(-max_angle..max_angle);

        self.vel = Vec2::new(direction * speed * angle.cos(), speed * angle.sin());
    }
}
