//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use morph_common::Color;
use morph_renderer::{RenderState, RendererError};

use super::core::MorphApp;

impl MorphApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        match pollster::block_on(RenderState::new(window.clone(), &self.scene)) {
            Ok(mut rs) => {
                match Color::from_hex(&self.config.window.clear_color) {
                    Some(color) => rs.set_clear_color(color),
                    None => tracing::warn!(
                        "Invalid clear color {:?}, using black",
                        self.config.window.clear_color
                    ),
                }
                let size = rs.gpu.size;
                self.scene.resize(size.width, size.height);
                self.render_state = Some(rs);
            }
            Err(RendererError::UniformBinding(e)) => {
                tracing::error!("Shader uniform binding fault: {e}");
                self.fatal = Some(RendererError::UniformBinding(e));
                return false;
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                self.fatal = Some(e);
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
        true
    }
}
