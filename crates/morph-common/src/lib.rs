pub mod errors;
pub mod types;

pub use errors::{ConfigError, ConstructionError, MorphError, UniformBindingError};
pub use types::{Color, MAX_SUBDIVISION};

pub type Result<T> = std::result::Result<T, MorphError>;
