//! Surface deformation parameters.

use serde::{Deserialize, Serialize};

/// Animation and displacement settings for the sphere surface.
///
/// `subdivision_*` is fixed once the mesh is built; every other field can
/// be tuned live from the debug panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Multiplier from clock delta to shader time (valid range: 0.0-0.001).
    pub time_frequency: f64,
    /// Domain-warp sampling frequency (valid range: 0.0-10.0).
    pub distortion_frequency: f64,
    /// Domain-warp amplitude (valid range: 0.0-5.0).
    pub distortion_strength: f64,
    /// Displacement noise frequency (valid range: 0.0-10.0).
    pub displacement_frequency: f64,
    /// Displacement amplitude along the normal (valid range: 0.0-1.0).
    pub displacement_strength: f64,
    /// Longitude segments of the base sphere.
    pub subdivision_width: u32,
    /// Latitude segments of the base sphere.
    pub subdivision_height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            time_frequency: 0.0002,
            distortion_frequency: 2.0,
            distortion_strength: 1.0,
            displacement_frequency: 2.0,
            displacement_strength: 0.2,
            subdivision_width: 512,
            subdivision_height: 512,
        }
    }
}
