//! Full configuration validation.
//!
//! Validates every numeric range and color format. Each domain has its
//! own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod helpers;
mod lights;
mod misc;
mod surface;

#[cfg(test)]
mod tests;

use crate::schema::MorphConfig;
use morph_common::ConfigError;

pub use surface::MAX_SUBDIVISION;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MorphConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    surface::validate_surface(&mut errors, config);
    lights::validate_lights(&mut errors, config);
    misc::validate_window(&mut errors, config);
    misc::validate_camera(&mut errors, config);
    misc::validate_clock(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
