//! Perspective camera looking at the origin from +Z.

use glam::{Mat4, Vec3};
use morph_config::schema::CameraConfig;

use crate::gpu::CameraUniforms;

const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    fov_y: f32,
    distance: f32,
    aspect: f32,
}

impl Camera {
    /// `fov_degrees` is the vertical field of view.
    pub fn new(fov_degrees: f32, distance: f32, aspect: f32) -> Self {
        Self {
            fov_y: fov_degrees.to_radians(),
            distance,
            aspect: sanitize_aspect(aspect),
        }
    }

    pub fn from_config(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut camera = Self::new(config.fov_degrees as f32, config.distance as f32, 1.0);
        camera.update_viewport(width, height);
        camera
    }

    /// Recompute the aspect ratio after a resize.
    pub fn update_viewport(&mut self, width: u32, height: u32) {
        self.aspect = if height == 0 {
            1.0
        } else {
            sanitize_aspect(width as f32 / height as f32)
        };
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y)
    }

    /// wgpu clip space (depth 0..1).
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, NEAR, FAR)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    pub fn uniforms(&self, model: Mat4) -> CameraUniforms {
        CameraUniforms {
            view_projection: self.view_projection().to_cols_array(),
            model: model.to_cols_array(),
            camera_position: self.position().extend(1.0).to_array(),
        }
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
