use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Setup-time failures. Not recoverable; surfaced to the caller synchronously.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    #[error("invalid sphere subdivision {width}x{height}: segment counts must be between 1 and {max}")]
    InvalidSubdivision { width: u32, height: u32, max: u32 },

    #[error("invalid color value: {0}")]
    InvalidColor(String),
}

/// A uniform slot the CPU block declares is missing from a shader program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("uniform slot `{slot}` is not declared by shader program `{program}`")]
pub struct UniformBindingError {
    pub slot: &'static str,
    pub program: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    UniformBinding(#[from] UniformBindingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),
}
