//! Surface parameter validation (debug ranges and subdivision).

use crate::schema::MorphConfig;

use super::helpers::{validate_range, validate_range_f64};

pub use morph_common::MAX_SUBDIVISION;

pub(crate) fn validate_surface(errors: &mut Vec<String>, config: &MorphConfig) {
    let s = &config.surface;
    validate_range_f64(errors, "surface.time_frequency", s.time_frequency, 0.0, 0.001);
    validate_range_f64(
        errors,
        "surface.distortion_frequency",
        s.distortion_frequency,
        0.0,
        10.0,
    );
    validate_range_f64(
        errors,
        "surface.distortion_strength",
        s.distortion_strength,
        0.0,
        5.0,
    );
    validate_range_f64(
        errors,
        "surface.displacement_frequency",
        s.displacement_frequency,
        0.0,
        10.0,
    );
    validate_range_f64(
        errors,
        "surface.displacement_strength",
        s.displacement_strength,
        0.0,
        1.0,
    );
    validate_range(
        errors,
        "surface.subdivision_width",
        s.subdivision_width,
        1,
        MAX_SUBDIVISION,
    );
    validate_range(
        errors,
        "surface.subdivision_height",
        s.subdivision_height,
        1,
        MAX_SUBDIVISION,
    );
}
