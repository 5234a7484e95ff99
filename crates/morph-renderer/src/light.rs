//! The two scene lights.
//!
//! Placement is authoritative in spherical form; the Cartesian position the
//! shader reads is derived on every angular change and never set directly.
//! Likewise the linear color instance is derived from the hex value.

use std::f32::consts::PI;
use std::str::FromStr;

use glam::Vec3;
use morph_common::{Color, ConstructionError};
use morph_config::schema::LightConfig;

/// Which of the two lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightId {
    A,
    B,
}

impl LightId {
    pub const ALL: [LightId; 2] = [LightId::A, LightId::B];

    /// Lowercase name used in binding keys and config tables.
    pub fn name(self) -> &'static str {
        match self {
            LightId::A => "a",
            LightId::B => "b",
        }
    }

    pub fn index(self) -> usize {
        match self {
            LightId::A => 0,
            LightId::B => 1,
        }
    }
}

/// Spherical direction with the radius fixed at 1.
///
/// `phi` is the polar angle from +Y in `[0, π]`, `theta` the azimuth
/// around +Y in `[-π, π]`, measured from +Z toward +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    /// Clamp both angles into their ranges. NaN becomes 0.
    pub fn new(phi: f32, theta: f32) -> Self {
        Self {
            phi: clamp_angle(phi, 0.0, PI),
            theta: clamp_angle(theta, -PI, PI),
        }
    }

    pub fn to_cartesian(self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }
}

fn clamp_angle(v: f32, lo: f32, hi: f32) -> f32 {
    if v.is_nan() {
        0.0_f32.clamp(lo, hi)
    } else {
        v.clamp(lo, hi)
    }
}

/// Hex value plus the linear RGB instance uploaded to the GPU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightColor {
    value: Color,
    instance: Vec3,
}

impl LightColor {
    pub fn new(value: Color) -> Self {
        Self {
            value,
            instance: Vec3::from_array(value.to_linear()),
        }
    }

    pub fn value(&self) -> Color {
        self.value
    }

    /// Linear RGB, always `value` converted.
    pub fn instance(&self) -> Vec3 {
        self.instance
    }
}

/// One light: color, intensity and angular placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    id: LightId,
    color: LightColor,
    intensity: f32,
    angular: Spherical,
    position: Vec3,
}

impl Light {
    pub fn new(id: LightId, color: Color, intensity: f32, phi: f32, theta: f32) -> Self {
        let angular = Spherical::new(phi, theta);
        Self {
            id,
            color: LightColor::new(color),
            intensity: sanitize_intensity(intensity),
            angular,
            position: angular.to_cartesian(),
        }
    }

    /// Build from a config table. Fails only on an unparsable color.
    pub fn from_config(id: LightId, config: &LightConfig) -> Result<Self, ConstructionError> {
        let color = Color::from_str(&config.color)?;
        Ok(Self::new(
            id,
            color,
            config.intensity as f32,
            config.phi as f32,
            config.theta as f32,
        ))
    }

    pub fn id(&self) -> LightId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color.value()
    }

    pub fn color_instance(&self) -> Vec3 {
        self.color.instance()
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn angular(&self) -> Spherical {
        self.angular
    }

    pub fn phi(&self) -> f32 {
        self.angular.phi
    }

    pub fn theta(&self) -> f32 {
        self.angular.theta
    }

    /// Unit-sphere position handed to the shader.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_angular(&mut self, phi: f32, theta: f32) {
        self.angular = Spherical::new(phi, theta);
        self.position = self.angular.to_cartesian();
    }

    pub fn set_phi(&mut self, phi: f32) {
        self.set_angular(phi, self.angular.theta);
    }

    pub fn set_theta(&mut self, theta: f32) {
        self.set_angular(self.angular.phi, theta);
    }

    /// Parse and apply a hex color. The light is untouched on error.
    pub fn set_color(&mut self, hex: &str) -> Result<(), ConstructionError> {
        let color = Color::from_str(hex)?;
        self.set_color_value(color);
        Ok(())
    }

    pub fn set_color_value(&mut self, color: Color) {
        self.color = LightColor::new(color);
    }

    /// Negative and NaN intensities become 0.
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = sanitize_intensity(intensity);
    }

    /// Write back into a config table (for saving the current tuning).
    pub fn write_to_config(&self, config: &mut LightConfig) {
        config.color = self.color().to_hex();
        config.intensity = self.intensity as f64;
        config.phi = self.angular.phi as f64;
        config.theta = self.angular.theta as f64;
    }
}

fn sanitize_intensity(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.max(0.0)
    }
}
