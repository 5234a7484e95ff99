mod context;
mod types;
mod uniforms;

pub use context::*;
pub use types::*;
pub use uniforms::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_uniform_binding_is_transparent() {
        let err: RendererError = morph_common::UniformBindingError {
            slot: "time",
            program: "sphere.wgsl",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "uniform slot `time` is not declared by shader program `sphere.wgsl`"
        );
    }

    #[test]
    fn renderer_error_converts_to_morph_error() {
        let err: morph_common::MorphError = RendererError::DeviceError("lost".into()).into();
        assert_eq!(err.to_string(), "renderer error: device error: lost");
    }

    #[test]
    fn physical_size_aspect_ratio() {
        let size = PhysicalSize {
            width: 1280,
            height: 800,
        };
        assert!((size.aspect_ratio() - 1.6).abs() < 1e-6);
        let flat = PhysicalSize {
            width: 800,
            height: 0,
        };
        assert_eq!(flat.aspect_ratio(), 1.0);
    }
}
