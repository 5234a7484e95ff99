use crate::gpu::RendererError;
use crate::scene::SphereScene;

use super::helpers::log_first_frame;
use super::state::RenderState;

/// What happened to a requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// The surface was lost or outdated and has been reconfigured.
    Skipped,
}

impl RenderState {
    /// Flush the scene's staged uniforms and draw one frame.
    pub fn render(&mut self, scene: &mut SphereScene) -> Result<FrameOutcome, RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(FrameOutcome::Skipped);
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        scene.flush(
            &self.gpu.queue,
            &self.sphere.camera_buffer,
            &self.sphere.sphere_buffer,
        );

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("morph frame encoder"),
            });

        self.sphere.render(&mut encoder, &view, self.clear_color);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size, self.gpu.format());

        Ok(FrameOutcome::Presented)
    }
}
