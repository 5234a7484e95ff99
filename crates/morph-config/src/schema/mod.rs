//! Configuration schema types for morph.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the reference scene defaults.

mod lights;
mod surface;
mod system;
mod window;

pub use lights::*;
pub use surface::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for morph.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct MorphConfig {
    pub surface: SurfaceConfig,
    pub lights: LightsConfig,
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub clock: ClockConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
