//! Frame description for renderers
//!
//! Turns a `GameState` into an ordered list of draw commands in playfield
//! pixel coordinates (origin top-left, y down). Renderers only consume this;
//! building a frame never touches the simulation.

use glam::Vec2;

use crate::{Config, GameState, Params, Side};

/// RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BACKGROUND: Color = Color::opaque(0.0, 0.0, 0.0);
    pub const NET: Color = Color::opaque(68.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0); // #444
    pub const PADDLE: Color = Color::opaque(1.0, 1.0, 1.0);
    pub const BALL: Color = Color::opaque(76.0 / 255.0, 175.0 / 255.0, 80.0 / 255.0); // #4caf50

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from a 0xRRGGBB literal
    pub fn from_rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    /// One pixel wide stroke
    Line { from: Vec2, to: Vec2, color: Color },
    /// Filled rectangle, `pos` is the top-left corner
    Rect { pos: Vec2, size: Vec2, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCmd>,
}

impl Frame {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }
}

/// Describe the current state: clear, net, paddles, ball
pub fn build_frame(state: &GameState, config: &Config) -> Frame {
    let mut frame = Frame::new(config.width, config.height);

    frame.push(DrawCmd::Clear(Color::BACKGROUND));

    let net_x = config.width / 2.0;
    let mut y = 0.0;
    while y < config.height {
        frame.push(DrawCmd::Line {
            from: Vec2::new(net_x, y),
            to: Vec2::new(net_x, y + Params::NET_DASH),
            color: Color::NET,
        });
        y += Params::NET_SPACING;
    }

    for side in [Side::Player, Side::Opponent] {
        frame.push(DrawCmd::Rect {
            pos: Vec2::new(config.paddle_x(side), state.paddle(side).y),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            color: Color::PADDLE,
        });
    }

    frame.push(DrawCmd::Circle {
        center: state.ball.pos,
        radius: config.ball_radius,
        color: Color::BALL,
    });

    frame
}
