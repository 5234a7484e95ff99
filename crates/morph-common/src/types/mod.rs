mod color;

pub use color::*;

/// Largest sphere subdivision accepted per axis, shared by config
/// validation and the mesh builder.
pub const MAX_SUBDIVISION: u32 = 2048;
