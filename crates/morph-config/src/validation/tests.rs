//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = MorphConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_time_frequency_too_large() {
    let mut config = MorphConfig::default();
    config.surface.time_frequency = 0.01;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("surface.time_frequency"));
}

#[test]
fn catches_negative_distortion_strength() {
    let mut config = MorphConfig::default();
    config.surface.distortion_strength = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("surface.distortion_strength"));
}

#[test]
fn catches_displacement_strength_over_one() {
    let mut config = MorphConfig::default();
    config.surface.displacement_strength = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("surface.displacement_strength"));
}

#[test]
fn catches_nan_frequency() {
    let mut config = MorphConfig::default();
    config.surface.displacement_frequency = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("surface.displacement_frequency"));
}

#[test]
fn catches_zero_subdivision() {
    let mut config = MorphConfig::default();
    config.surface.subdivision_width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("surface.subdivision_width"));
}

#[test]
fn subdivision_limit_matches_mesh_builder() {
    let mut config = MorphConfig::default();
    config.surface.subdivision_width = MAX_SUBDIVISION;
    config.surface.subdivision_height = MAX_SUBDIVISION;
    assert!(validate(&config).is_ok());
    assert_eq!(MAX_SUBDIVISION, morph_common::MAX_SUBDIVISION);
}

#[test]
fn catches_subdivision_too_large() {
    let mut config = MorphConfig::default();
    config.surface.subdivision_height = MAX_SUBDIVISION + 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("surface.subdivision_height"));
}

#[test]
fn catches_invalid_light_color() {
    let mut config = MorphConfig::default();
    config.lights.b.color = "blue".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("lights.b.color"));
}

#[test]
fn catches_negative_intensity() {
    let mut config = MorphConfig::default();
    config.lights.a.intensity = -0.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("lights.a.intensity"));
}

#[test]
fn allows_intensity_above_debug_range() {
    let mut config = MorphConfig::default();
    config.lights.a.intensity = 25.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_phi_out_of_range() {
    let mut config = MorphConfig::default();
    config.lights.a.phi = 4.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("lights.a.phi"));
}

#[test]
fn catches_theta_out_of_range() {
    let mut config = MorphConfig::default();
    config.lights.b.theta = -3.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("lights.b.theta"));
}

#[test]
fn catches_camera_too_close() {
    let mut config = MorphConfig::default();
    config.camera.distance = 1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.distance"));
}

#[test]
fn catches_invalid_clear_color() {
    let mut config = MorphConfig::default();
    config.window.clear_color = "#12".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.clear_color"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = MorphConfig::default();
    config.surface.displacement_strength = 2.0;
    config.lights.a.color = "nope".into();
    config.clock.delta_scale = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("surface.displacement_strength"));
    assert!(err.contains("lights.a.color"));
    assert!(err.contains("clock.delta_scale"));
    assert_eq!(err.matches("; ").count(), 2);
}
