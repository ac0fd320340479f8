use super::batch::InstanceData;
use crate::camera::{Camera, CameraUniform};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Net dashes for the tallest supported canvas plus both paddles
pub const MAX_QUADS: usize = 128;
pub const MAX_CIRCLES: usize = 4;

pub struct GameBuffers {
    pub camera: Buffer,
    pub quads: Buffer,
    pub circles: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instance_size = std::mem::size_of::<InstanceData>() as u64;

    let quads = device.create_buffer(&BufferDescriptor {
        label: Some("Quad Instance Buffer"),
        size: instance_size * MAX_QUADS as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let circles = device.create_buffer(&BufferDescriptor {
        label: Some("Circle Instance Buffer"),
        size: instance_size * MAX_CIRCLES as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        quads,
        circles,
    }
}
