//! MorphApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;

use winit::window::Window;

use morph_config::MorphConfig;
use morph_renderer::{Camera, FrameClock, ParameterSet, RenderState, RendererError, SphereScene};

use super::panel::KeyboardPanel;

/// Top-level application state.
pub struct MorphApp {
    pub(super) config: MorphConfig,
    /// Where `S` saves to; the platform default when `None`.
    pub(super) config_path: Option<PathBuf>,

    pub(super) scene: SphereScene,
    pub(super) panel: KeyboardPanel,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) should_exit: bool,
    /// Set when the renderer could not start; reported by `main`.
    pub(super) fatal: Option<RendererError>,
}

impl MorphApp {
    pub fn new(config: MorphConfig, config_path: Option<PathBuf>, params: ParameterSet) -> Self {
        let mut panel = KeyboardPanel::default();
        let camera = Camera::from_config(&config.camera, config.window.width, config.window.height);
        let clock = FrameClock::new(config.clock.delta_scale as f32);
        let scene = SphereScene::new(params, camera, Box::new(clock), &mut panel);

        Self {
            config,
            config_path,
            scene,
            panel,
            window: None,
            render_state: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            fatal: None,
        }
    }

    /// The error that stopped the renderer from starting, if any.
    pub fn take_fatal(&mut self) -> Option<RendererError> {
        self.fatal.take()
    }
}
