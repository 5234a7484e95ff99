//! Light configuration types.

use serde::{Deserialize, Serialize};

/// One light, placed by spherical angles on the unit sphere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// `#rrggbb` sRGB color.
    pub color: String,
    /// Non-negative scale on the color (debug range: 0.0-10.0).
    pub intensity: f64,
    /// Polar angle in radians (valid range: 0-π).
    pub phi: f64,
    /// Azimuthal angle in radians (valid range: -π-π).
    pub theta: f64,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            color: "#ffffff".into(),
            intensity: 1.0,
            phi: std::f64::consts::FRAC_PI_2,
            theta: 0.0,
        }
    }
}

/// The two scene lights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightsConfig {
    pub a: LightConfig,
    pub b: LightConfig,
}

impl Default for LightsConfig {
    fn default() -> Self {
        Self {
            a: LightConfig {
                color: "#ff2900".into(),
                intensity: 1.0,
                phi: 0.615,
                theta: 2.049,
            },
            b: LightConfig {
                color: "#3158ff".into(),
                intensity: 1.0,
                phi: 2.561,
                theta: -1.844,
            },
        }
    }
}
