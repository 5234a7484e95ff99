//! Window and camera configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title prefix.
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Background clear color (`#rrggbb`).
    pub clear_color: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "morph".into(),
            width: 1280,
            height: 800,
            clear_color: "#000000".into(),
        }
    }
}

/// Perspective camera looking at the sphere from +Z.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 10-120).
    pub fov_degrees: f64,
    /// Distance from the sphere center (valid range: 1.5-20).
    pub distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 35.0,
            distance: 6.0,
        }
    }
}
