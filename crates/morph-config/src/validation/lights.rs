//! Light validation: colors, intensity, spherical angles.

use std::f64::consts::PI;

use crate::schema::{LightConfig, MorphConfig};

use super::helpers::{validate_color, validate_non_negative, validate_range_f64};

pub(crate) fn validate_lights(errors: &mut Vec<String>, config: &MorphConfig) {
    validate_light(errors, "lights.a", &config.lights.a);
    validate_light(errors, "lights.b", &config.lights.b);
}

fn validate_light(errors: &mut Vec<String>, prefix: &str, light: &LightConfig) {
    validate_color(errors, &format!("{prefix}.color"), &light.color);
    validate_non_negative(errors, &format!("{prefix}.intensity"), light.intensity);
    validate_range_f64(errors, &format!("{prefix}.phi"), light.phi, 0.0, PI);
    validate_range_f64(errors, &format!("{prefix}.theta"), light.theta, -PI, PI);
}
