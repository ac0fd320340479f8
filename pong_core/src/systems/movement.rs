use crate::{Ball, Config, GameState, InputSnapshot, SpeedMultiplier};

/// Copy the pointer-driven paddle position into the state
pub fn apply_player_input(state: &mut GameState, input: &InputSnapshot, config: &Config) {
    state.player.y = config.clamp_paddle_y(input.player_y);
}

/// Move ball based on velocity, scaled by the speed multiplier
pub fn move_ball(ball: &mut Ball, speed: SpeedMultiplier, config: &Config) {
    ball.pos += ball.vel * speed.as_f32() / config.speed_divisor;
}
