//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use morph_renderer::FrameOutcome;

use super::core::MorphApp;
use super::input::{panel_command, PanelCommand};

impl ApplicationHandler for MorphApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                    self.scene.resize(size.width, size.height);
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        // Continuous animation: one frame per vsync.
        self.request_redraw();
    }
}

impl MorphApp {
    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    /// Advance the scene and draw it.
    fn render_frame(&mut self) {
        self.scene.tick();

        let Some(ref mut rs) = self.render_state else {
            return;
        };
        match rs.render(&mut self.scene) {
            Ok(FrameOutcome::Presented) => {}
            Ok(FrameOutcome::Skipped) => {
                tracing::debug!("Frame {} skipped", self.scene.frame());
            }
            Err(e) => tracing::error!("Render error: {e}"),
        }
    }

    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        let Some(command) = panel_command(&logical_key, self.modifiers.shift_key()) else {
            return;
        };
        self.apply_command(command);
    }

    pub(super) fn apply_command(&mut self, command: PanelCommand) {
        match command {
            PanelCommand::SelectNext => self.panel.select_next(),
            PanelCommand::SelectPrev => self.panel.select_prev(),
            PanelCommand::Nudge(steps) => {
                self.panel.nudge(self.scene.params_mut(), steps);
            }
            PanelCommand::Palette(index) => {
                self.panel.apply_palette(self.scene.params_mut(), index);
            }
            PanelCommand::Reset => self.scene.reset(),
            PanelCommand::Save => self.save_tuning(),
            PanelCommand::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
        }
        self.update_window_title();
    }

    /// Write the current tuning back to the config file.
    fn save_tuning(&mut self) {
        self.scene.params().write_to_config(&mut self.config);
        let result = match self.config_path {
            Some(ref path) => morph_config::save_config_to_path(&self.config, path),
            None => morph_config::save_config(&self.config),
        };
        match result {
            Ok(()) => tracing::info!("Tuning saved"),
            Err(e) => tracing::error!("Failed to save tuning: {e}"),
        }
    }
}
