//! CPU side of the renderer: parameters, mesh, camera, clock and the
//! two uniform uplinks.
//!
//! Everything here runs without a GPU; [`crate::RenderState`] flushes the
//! staged uniform blocks and draws.

use glam::Mat4;

use crate::binding::{self, DebugPanel};
use crate::camera::Camera;
use crate::clock::Clock;
use crate::gpu::{CameraUniforms, SphereUniforms, UniformUplink};
use crate::params::ParameterSet;
use crate::sphere::{generate_sphere_mesh, SphereMesh};

pub struct SphereScene {
    params: ParameterSet,
    defaults: ParameterSet,
    mesh: SphereMesh,
    camera: Camera,
    model: Mat4,
    clock: Box<dyn Clock>,
    sphere_uplink: UniformUplink<SphereUniforms>,
    camera_uplink: UniformUplink<CameraUniforms>,
    frame: u64,
}

impl SphereScene {
    /// Build the mesh at the parameters' subdivision and hand the binding
    /// table to `panel`.
    pub fn new(
        params: ParameterSet,
        camera: Camera,
        clock: Box<dyn Clock>,
        panel: &mut dyn DebugPanel,
    ) -> Self {
        let mesh = generate_sphere_mesh(params.subdivision());
        binding::register_all(panel);

        tracing::info!(
            "Sphere scene built ({}x{} segments, {} vertices)",
            mesh.subdivision().width(),
            mesh.subdivision().height(),
            mesh.vertices().len(),
        );

        let mut scene = Self {
            defaults: params.clone(),
            params,
            mesh,
            camera,
            model: Mat4::IDENTITY,
            clock,
            sphere_uplink: UniformUplink::new(),
            camera_uplink: UniformUplink::new(),
            frame: 0,
        };
        scene.stage_camera();
        scene.stage_parameters();
        scene
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Mutable access for debug writes. Changes are picked up by the next
    /// [`Self::tick`].
    pub fn params_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }

    /// Parameters as they were at construction.
    pub fn defaults(&self) -> &ParameterSet {
        &self.defaults
    }

    pub fn mesh(&self) -> &SphereMesh {
        &self.mesh
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Reset every tunable to its construction value.
    pub fn reset(&mut self) {
        self.params.restore_tunables(&self.defaults);
        tracing::info!("Parameters reset to defaults");
    }

    /// One frame of CPU work: advance time, then stage any change.
    pub fn tick(&mut self) {
        let delta = self.clock.frame_delta();
        self.params.advance(delta);
        self.stage_parameters();
        self.frame += 1;
    }

    /// Update the camera aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.update_viewport(width, height);
        self.stage_camera();
    }

    fn stage_parameters(&mut self) {
        if self.params.take_dirty() {
            self.sphere_uplink.stage(self.params.uniforms());
        }
    }

    fn stage_camera(&mut self) {
        self.camera_uplink.stage(self.camera.uniforms(self.model));
    }

    /// Write whatever is staged. Returns the number of buffers written.
    pub fn flush(
        &mut self,
        queue: &wgpu::Queue,
        camera_buffer: &wgpu::Buffer,
        sphere_buffer: &wgpu::Buffer,
    ) -> usize {
        // Pick up writes made through `params_mut` since the last tick.
        self.stage_parameters();
        usize::from(self.camera_uplink.flush(queue, camera_buffer))
            + usize::from(self.sphere_uplink.flush(queue, sphere_buffer))
    }

    pub fn sphere_uplink(&self) -> &UniformUplink<SphereUniforms> {
        &self.sphere_uplink
    }

    pub fn sphere_uplink_mut(&mut self) -> &mut UniformUplink<SphereUniforms> {
        &mut self.sphere_uplink
    }

    pub fn camera_uplink_mut(&mut self) -> &mut UniformUplink<CameraUniforms> {
        &mut self.camera_uplink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Binding, NullPanel};
    use crate::clock::FixedClock;
    use crate::light::LightId;
    use morph_config::schema::CameraConfig;
    use morph_config::MorphConfig;

    fn scene_with(time_frequency: f64, panel: &mut dyn DebugPanel) -> SphereScene {
        let mut config = MorphConfig::default();
        config.surface.subdivision_width = 16;
        config.surface.subdivision_height = 12;
        config.surface.time_frequency = time_frequency;
        let params = ParameterSet::from_config(&config).unwrap();
        let camera = Camera::from_config(&CameraConfig::default(), 800, 600);
        SphereScene::new(params, camera, Box::new(FixedClock::new(16.0)), panel)
    }

    #[derive(Default)]
    struct CountingPanel(usize);

    impl DebugPanel for CountingPanel {
        fn register(&mut self, _binding: &'static Binding) {
            self.0 += 1;
        }
    }

    #[test]
    fn construction_registers_bindings_and_stages_both_blocks() {
        let mut panel = CountingPanel::default();
        let mut scene = scene_with(0.0002, &mut panel);
        assert_eq!(panel.0, binding::BINDINGS.len());
        assert_eq!(scene.mesh().vertices().len(), 17 * 13);
        assert!(scene.sphere_uplink_mut().take_pending().is_some());
        assert!(scene.camera_uplink_mut().take_pending().is_some());
    }

    #[test]
    fn tick_stages_when_time_moves() {
        let mut scene = scene_with(0.0002, &mut NullPanel);
        scene.sphere_uplink_mut().take_pending();
        scene.tick();
        let staged = scene.sphere_uplink_mut().take_pending().unwrap();
        assert!((staged.time - 16.0 * 0.0002).abs() < 1e-7);
        assert_eq!(scene.frame(), 1);
    }

    #[test]
    fn frozen_time_stages_nothing() {
        let mut scene = scene_with(0.0, &mut NullPanel);
        scene.sphere_uplink_mut().take_pending();
        for _ in 0..10 {
            scene.tick();
        }
        assert!(!scene.sphere_uplink().is_pending());
        assert_eq!(scene.sphere_uplink().upload_count(), 1);
    }

    #[test]
    fn debug_write_is_staged_before_next_frame() {
        let mut scene = scene_with(0.0, &mut NullPanel);
        scene.sphere_uplink_mut().take_pending();
        scene
            .params_mut()
            .write_scalar("lights.a.intensity", 4.0)
            .unwrap();
        scene.tick();
        let staged = scene.sphere_uplink_mut().take_pending().unwrap();
        assert_eq!(staged.light_a_intensity, 4.0);
    }

    #[test]
    fn reset_restores_tunables() {
        let mut scene = scene_with(0.0002, &mut NullPanel);
        scene.params_mut().set_light_intensity(LightId::B, 7.0);
        scene.tick();
        scene.reset();
        assert_eq!(scene.params().light(LightId::B).intensity(), 1.0);
        assert!(scene.params().time() > 0.0);
    }

    #[test]
    fn resize_restages_camera() {
        let mut scene = scene_with(0.0, &mut NullPanel);
        scene.camera_uplink_mut().take_pending();
        scene.resize(1000, 500);
        assert!((scene.camera().aspect() - 2.0).abs() < 1e-6);
        assert!(scene.camera_uplink_mut().take_pending().is_some());
    }
}
