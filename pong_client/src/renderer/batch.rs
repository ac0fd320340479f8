use pong_core::{Color, DrawCmd, Frame};

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

/// Frame commands sorted into one instanced draw per mesh.
///
/// Quads are drawn before circles. That matches the frame order (net and
/// paddles come before the ball) so no reordering is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub clear: Color,
    pub quads: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
}

pub fn batch_frame(frame: &Frame) -> Batch {
    let mut batch = Batch {
        clear: Color::BACKGROUND,
        quads: Vec::new(),
        circles: Vec::new(),
    };

    for cmd in &frame.commands {
        match *cmd {
            DrawCmd::Clear(color) => batch.clear = color,
            DrawCmd::Line { from, to, color } => {
                // Axis-aligned strokes only; the thin axis is one pixel
                let center = (from + to) * 0.5;
                let extent = (to - from).abs().max(glam::Vec2::ONE);
                batch.quads.push(InstanceData {
                    transform: [center.x, center.y, extent.x, extent.y],
                    tint: color.to_array(),
                });
            }
            DrawCmd::Rect { pos, size, color } => {
                let center = pos + size * 0.5;
                batch.quads.push(InstanceData {
                    transform: [center.x, center.y, size.x, size.y],
                    tint: color.to_array(),
                });
            }
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => {
                batch.circles.push(InstanceData {
                    transform: [center.x, center.y, radius * 2.0, radius * 2.0],
                    tint: color.to_array(),
                });
            }
        }
    }

    batch
}
