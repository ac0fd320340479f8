pub mod components;
pub mod config;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use input::*;
pub use params::*;
pub use render::{build_frame, Color, DrawCmd, Frame};
pub use resources::*;
pub use simulation::*;
pub use state::*;

use systems::*;

/// Advance the game by one frame.
///
/// Order is fixed: player input, ball motion, walls, player end, opponent
/// end, opponent tracking. `events` is cleared first and describes only this
/// frame.
pub fn step(
    state: &mut GameState,
    input: &InputSnapshot,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    events.clear();

    // 1. Pointer-driven paddle
    apply_player_input(state, input, config);

    // 2. Move ball
    move_ball(&mut state.ball, input.speed, config);

    // 3. Top/bottom walls
    check_walls(&mut state.ball, config, events);

    // 4. Paddle ends; a miss scores for the other side
    for side in [Side::Player, Side::Opponent] {
        if check_paddle(state, side, config, events) == PaddleContact::Miss {
            award_point(state, side.other(), input.speed, config, rng, events);
        }
    }

    // 5. Opponent follows the ball
    let ball_y = state.ball.pos.y;
    track_ball(&mut state.opponent, ball_y, input.speed, config);
}
