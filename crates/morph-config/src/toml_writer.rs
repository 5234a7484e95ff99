//! Persist tuned values back to TOML.
//!
//! The file is written to a sibling `.tmp` and renamed over the target,
//! so an interrupted save leaves the previous config intact.

use std::path::Path;

use morph_common::ConfigError;

use crate::schema::{MorphConfig, CONFIG_SCHEMA_VERSION};
use crate::toml_loader::{default_config_path, ensure_parent, io_error};

/// Save to the platform default config path.
pub fn save_config(config: &MorphConfig) -> Result<(), ConfigError> {
    save_config_to_path(config, &default_config_path()?)
}

/// Render a config as TOML with a schema header line.
pub fn config_to_toml(config: &MorphConfig) -> Result<String, ConfigError> {
    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;
    Ok(format!(
        "# morph configuration (schema version {CONFIG_SCHEMA_VERSION}), saved from the debug panel\n\n{body}"
    ))
}

/// Save to `path`, creating parent directories as needed.
pub fn save_config_to_path(config: &MorphConfig, path: &Path) -> Result<(), ConfigError> {
    let contents = config_to_toml(config)?;
    ensure_parent(path)?;

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &contents).map_err(|e| io_error("write config to", &tmp_path, e))?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Windows cannot rename over an existing file
        tracing::warn!(error = %e, "atomic rename failed, writing config in place");
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, &contents).map_err(|e| io_error("write config to", path, e))?;
    }

    tracing::info!(path = %path.display(), "tuning saved");
    Ok(())
}
