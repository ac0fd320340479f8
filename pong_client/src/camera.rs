//! Camera for Pong game
//!
//! 2D orthographic camera in canvas pixel space (origin top-left, y down)

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Orthographic camera covering a `width` x `height` pixel playfield
    pub fn pixel_space(width: f32, height: f32) -> Self {
        // Looking down -Z at the z = 0 plane
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);

        // bottom = height, top = 0 flips Y so rows grow downward like the canvas
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, 0.1, 100.0);

        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
