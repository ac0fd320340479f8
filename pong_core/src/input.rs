//! Input adapter: pointer position and speed control to simulation input

use std::fmt;

use crate::config::Config;
use crate::params::Params;

/// Error produced when a speed control value cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    NotAnInteger(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotAnInteger(raw) => write!(f, "speed value {:?} is not an integer", raw),
        }
    }
}

impl std::error::Error for InputError {}

/// User-controlled integer that scales ball and opponent speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpeedMultiplier(u32);

impl SpeedMultiplier {
    /// Clamp into the range the speed control offers
    pub fn new(value: u32) -> Self {
        Self(value.clamp(Params::SPEED_MIN, Params::SPEED_MAX))
    }

    /// Parse the speed control's value.
    ///
    /// Out-of-range values are clamped rather than rejected.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| InputError::NotAnInteger(raw.to_string()))?;
        let value = value.clamp(Params::SPEED_MIN as i64, Params::SPEED_MAX as i64) as u32;
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl Default for SpeedMultiplier {
    fn default() -> Self {
        Self(Params::SPEED_DEFAULT)
    }
}

impl fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Latest host input, passed explicitly to every simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    pub player_y: f32, // paddle top, already clamped
    pub speed: SpeedMultiplier,
}

impl InputSnapshot {
    /// Paddle centered, default speed
    pub fn new(config: &Config) -> Self {
        Self {
            player_y: config.centered_paddle_y(),
            speed: SpeedMultiplier::default(),
        }
    }

    /// Pointer moved; `pointer_y` is relative to the surface top
    pub fn pointer_moved(&mut self, pointer_y: f32, config: &Config) {
        self.player_y = paddle_top_from_pointer(pointer_y, config);
    }

    pub fn set_speed(&mut self, speed: SpeedMultiplier) {
        self.speed = speed;
    }
}

/// Center the paddle on the pointer, clamped to the playfield
pub fn paddle_top_from_pointer(pointer_y: f32, config: &Config) -> f32 {
    config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0)
}

/// Translate absolute pointer coordinates into surface coordinates
pub fn surface_relative(client_y: f32, surface_top: f32) -> f32 {
    client_y - surface_top
}
