pub mod batch;
#[cfg(target_arch = "wasm32")]
pub mod draw;
#[cfg(target_arch = "wasm32")]
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

#[cfg(target_arch = "wasm32")]
pub use gpu::Renderer;

#[cfg(target_arch = "wasm32")]
mod gpu {
    use super::batch::Batch;
    use super::{draw, init, pipeline, resources};
    use crate::camera::Camera;
    use crate::error::ClientError;
    use crate::mesh::{create_circle, create_rectangle, Mesh};
    use resources::GameBuffers;
    use wgpu::*;

    pub struct Renderer {
        pub device: Device,
        pub queue: Queue,
        pub surface: Surface<'static>,
        pub surface_config: SurfaceConfiguration,
        pub size: (u32, u32),

        pub main_pipeline: RenderPipeline,
        pub camera_bind_group: BindGroup,

        pub buffers: GameBuffers,
        pub meshes: (Mesh, Mesh), // rect, circle
    }

    impl Renderer {
        pub async fn new(
            canvas: web_sys::HtmlCanvasElement,
            width: f32,
            height: f32,
        ) -> Result<Self, ClientError> {
            let ctx = init::init_wgpu(canvas).await?;
            let camera = Camera::pixel_space(width, height);

            let buffers = resources::create_buffers(&ctx.device, &camera);
            let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

            let rect_mesh = create_rectangle(&ctx.device);
            let circle_mesh = create_circle(&ctx.device, 32);

            let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &pipes.camera_layout,
                entries: &[BindGroupEntry {
                    binding: 0,
                    resource: buffers.camera.as_entire_binding(),
                }],
            });

            log::info!("Renderer ready at {}x{}", ctx.size.0, ctx.size.1);

            Ok(Self {
                device: ctx.device,
                queue: ctx.queue,
                surface: ctx.surface,
                surface_config: ctx.config,
                size: ctx.size,
                main_pipeline: pipes.main_pipeline,
                camera_bind_group,
                buffers,
                meshes: (rect_mesh, circle_mesh),
            })
        }

        pub fn draw(&mut self, batch: &Batch) -> Result<(), ClientError> {
            draw::draw_frame(self, batch)
        }
    }
}
