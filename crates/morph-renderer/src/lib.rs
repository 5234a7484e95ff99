//! Procedurally displaced sphere lit by two lights.
//!
//! [`ParameterSet`] holds every tunable; [`SphereScene`] advances it once
//! per frame and stages the uniform blocks; [`RenderState`] uploads them
//! and draws the mesh through `shaders/sphere.wgsl`.

pub mod binding;
pub mod camera;
pub mod clock;
pub mod gpu;
pub mod light;
pub mod params;
pub mod render_state;
pub mod scene;
pub mod sphere;

pub use binding::{Binding, DebugPanel, BINDINGS};
pub use camera::Camera;
pub use clock::{AccumulatedTime, Clock, FixedClock, FrameClock};
pub use gpu::{GpuContext, RendererError, SphereUniforms};
pub use light::{Light, LightId};
pub use params::{ParameterSet, SurfaceParameters};
pub use render_state::{FrameOutcome, RenderState};
pub use scene::SphereScene;
