use std::sync::Arc;
use winit::window::Window;

use morph_common::Color;

use crate::gpu::{GpuContext, RendererError};
use crate::scene::SphereScene;
use crate::sphere::SpherePipeline;

/// GPU context plus the sphere pipeline built from a scene's mesh.
pub struct RenderState {
    pub gpu: GpuContext,
    pub sphere: SpherePipeline,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state for `scene` on `window`.
    pub async fn new(window: Arc<Window>, scene: &SphereScene) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let sphere = SpherePipeline::new(
            &gpu.device,
            gpu.format(),
            scene.mesh(),
            gpu.size.width,
            gpu.size.height,
        )?;

        Ok(Self {
            gpu,
            sphere,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Handle a window resize by reconfiguring the surface and depth target.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.sphere
            .resize(&self.gpu.device, self.gpu.size.width, self.gpu.size.height);
    }

    /// Set the background clear color (linear, from an sRGB color).
    pub fn set_clear_color(&mut self, color: Color) {
        let [r, g, b] = color.to_linear();
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };
    }
}
