use super::batch::{Batch, InstanceData};
use super::resources::{MAX_CIRCLES, MAX_QUADS};
use super::Renderer;
use crate::error::ClientError;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, batch: &Batch) -> Result<(), ClientError> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| ClientError::Surface(format!("Failed to get current texture: {:?}", e)))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let quad_count = upload(renderer, &renderer.buffers.quads, &batch.quads, MAX_QUADS);
    let circle_count = upload(renderer, &renderer.buffers.circles, &batch.circles, MAX_CIRCLES);

    let clear = Color {
        r: batch.clear.r as f64,
        g: batch.clear.g as f64,
        b: batch.clear.b as f64,
        a: batch.clear.a as f64,
    };

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(clear),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, quad_count, circle_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Write instances into a fixed-size buffer, returning how many fit
fn upload(renderer: &Renderer, buffer: &Buffer, instances: &[InstanceData], capacity: usize) -> u32 {
    let count = instances.len().min(capacity);
    if count < instances.len() {
        log::warn!("Dropping {} instances over capacity", instances.len() - count);
    }
    if count > 0 {
        renderer
            .queue
            .write_buffer(buffer, 0, bytemuck::cast_slice(&instances[..count]));
    }
    count as u32
}

fn draw_objects(
    renderer: &Renderer,
    pass: &mut RenderPass<'_>,
    quad_count: u32,
    circle_count: u32,
) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (net, paddles)
    if quad_count > 0 {
        let rect = &renderer.meshes.0;
        pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
        pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.quads.slice(..));
        pass.draw_indexed(0..rect.index_count, 0, 0..quad_count);
    }

    // Circle (ball)
    if circle_count > 0 {
        let circle = &renderer.meshes.1;
        pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
        pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.circles.slice(..));
        pass.draw_indexed(0..circle.index_count, 0, 0..circle_count);
    }
}
