//! Window, camera and clock validation.

use crate::schema::MorphConfig;

use super::helpers::{validate_color, validate_range, validate_range_f64};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &MorphConfig) {
    validate_range(errors, "window.width", config.window.width, 64, 16384);
    validate_range(errors, "window.height", config.window.height, 64, 16384);
    validate_color(errors, "window.clear_color", &config.window.clear_color);
}

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &MorphConfig) {
    validate_range_f64(
        errors,
        "camera.fov_degrees",
        config.camera.fov_degrees,
        10.0,
        120.0,
    );
    validate_range_f64(errors, "camera.distance", config.camera.distance, 1.5, 20.0);
}

pub(crate) fn validate_clock(errors: &mut Vec<String>, config: &MorphConfig) {
    validate_range_f64(
        errors,
        "clock.delta_scale",
        config.clock.delta_scale,
        0.0,
        100_000.0,
    );
}
