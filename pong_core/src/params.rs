/// Game tuning parameters for canvas Pong (pixel units, per-frame velocities)
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (canvas size in pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between outer wall and paddle

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_BASE_SPEED: f32 = 5.0;
    pub const SPEED_DIVISOR: f32 = 3.0; // ball travel = vel * multiplier / 3
    pub const SPIN_FACTOR: f32 = 2.0;
    pub const SERVE_MAX_ANGLE: f32 = std::f32::consts::FRAC_PI_6; // +-30 degrees

    // Opponent
    pub const OPPONENT_SLACK: f32 = 10.0;
    pub const OPPONENT_BASE_SPEED: f32 = 2.0;
    pub const OPPONENT_SPEED_SCALE: f32 = 0.7;

    // Speed multiplier (range control)
    pub const SPEED_MIN: u32 = 1;
    pub const SPEED_MAX: u32 = 10;
    pub const SPEED_DEFAULT: u32 = 3;

    // Net
    pub const NET_DASH: f32 = 10.0;
    pub const NET_SPACING: f32 = 15.0;

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
    pub const MAX_STEPS_PER_ADVANCE: u32 = 6;
}
