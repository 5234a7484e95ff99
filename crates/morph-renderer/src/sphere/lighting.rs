//! CPU reference of the fragment stage (`fs_main`).

use glam::Vec3;

/// Weight of the view-dependent rim term. Must match the shader.
pub const RIM_STRENGTH: f32 = 0.5;
/// Falloff exponent of the rim term. Must match the shader.
pub const RIM_POWER: f32 = 2.0;

/// One light as the fragment stage sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    /// Unit-sphere position; treated as a direction.
    pub direction: Vec3,
    /// Linear RGB.
    pub color: Vec3,
    pub intensity: f32,
}

/// `1 + RIM_STRENGTH * (1 - max(0, n·v))^RIM_POWER`, in `[1, 1 + RIM_STRENGTH]`.
pub fn rim_factor(normal: Vec3, view_dir: Vec3) -> f32 {
    let facing = normal.dot(view_dir).max(0.0);
    1.0 + RIM_STRENGTH * (1.0 - facing).clamp(0.0, 1.0).powf(RIM_POWER)
}

/// Contribution of a single light. Exactly zero when `intensity` is zero
/// or the light is behind the surface.
pub fn light_contribution(normal: Vec3, view_dir: Vec3, light: &LightSample) -> Vec3 {
    let lambert = normal.dot(light.direction.normalize_or_zero()).max(0.0);
    light.color * (light.intensity * lambert * rim_factor(normal, view_dir))
}

/// Final linear color: sum of both lights, never negative.
pub fn shade(normal: Vec3, view_dir: Vec3, lights: &[LightSample; 2]) -> Vec3 {
    let n = normal.normalize_or_zero();
    let v = view_dir.normalize_or_zero();
    lights
        .iter()
        .map(|light| light_contribution(n, v, light))
        .fold(Vec3::ZERO, |acc, c| acc + c)
        .max(Vec3::ZERO)
}
