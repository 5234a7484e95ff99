//! The displaced sphere: mesh generation, noise, CPU references of both
//! shader stages, and the wgpu pipeline that runs them.

mod displacement;
mod lighting;
mod mesh;
mod noise;
mod pipeline;
mod types;

pub use displacement::*;
pub use lighting::*;
pub use mesh::*;
pub use noise::gradient_noise;
pub use pipeline::*;
pub use types::*;
