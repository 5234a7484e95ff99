//! Clock and logging configuration types.

use serde::{Deserialize, Serialize};

/// Frame clock settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Multiplier applied to the wall-clock frame delta (seconds) before
    /// it drives the sphere. 1000 turns it into a millisecond clock.
    pub delta_scale: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            delta_scale: 1000.0,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for this level, scoped to the morph crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "morph=trace",
            LogLevel::Debug => "morph=debug",
            LogLevel::Info => "morph=info",
            LogLevel::Warning => "morph=warn",
            LogLevel::Error => "morph=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
