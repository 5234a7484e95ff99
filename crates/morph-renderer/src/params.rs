//! All tunable state of the scene and its conversion to the uniform block.

use morph_common::{Color, ConstructionError};
use morph_config::MorphConfig;

use crate::binding::{self, Binding, BindingError};
use crate::clock::AccumulatedTime;
use crate::gpu::SphereUniforms;
use crate::light::{Light, LightId};
use crate::sphere::{DisplacementParams, LightSample, Subdivision};

/// Surface deformation scalars.
///
/// Setters keep every value finite and non-negative; the tighter UI
/// ranges are applied by the binding table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceParameters {
    time_frequency: f32,
    distortion_frequency: f32,
    distortion_strength: f32,
    displacement_frequency: f32,
    displacement_strength: f32,
}

impl Default for SurfaceParameters {
    fn default() -> Self {
        Self {
            time_frequency: 0.0002,
            distortion_frequency: 2.0,
            distortion_strength: 1.0,
            displacement_frequency: 2.0,
            displacement_strength: 0.2,
        }
    }
}

impl SurfaceParameters {
    pub fn time_frequency(&self) -> f32 {
        self.time_frequency
    }

    pub fn distortion_frequency(&self) -> f32 {
        self.distortion_frequency
    }

    pub fn distortion_strength(&self) -> f32 {
        self.distortion_strength
    }

    pub fn displacement_frequency(&self) -> f32 {
        self.displacement_frequency
    }

    pub fn displacement_strength(&self) -> f32 {
        self.displacement_strength
    }

    pub fn set_time_frequency(&mut self, v: f32) {
        self.time_frequency = non_negative(v);
    }

    pub fn set_distortion_frequency(&mut self, v: f32) {
        self.distortion_frequency = non_negative(v);
    }

    pub fn set_distortion_strength(&mut self, v: f32) {
        self.distortion_strength = non_negative(v);
    }

    pub fn set_displacement_frequency(&mut self, v: f32) {
        self.displacement_frequency = non_negative(v);
    }

    pub fn set_displacement_strength(&mut self, v: f32) {
        self.displacement_strength = non_negative(v);
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Surface scalars, both lights, mesh density and accumulated time.
///
/// Every mutation marks the uniform block dirty; the renderer re-stages
/// the block only after [`ParameterSet::take_dirty`] reports a change.
#[derive(Debug, Clone)]
pub struct ParameterSet {
    surface: SurfaceParameters,
    lights: [Light; 2],
    subdivision: Subdivision,
    time: AccumulatedTime,
    dirty: bool,
}

impl ParameterSet {
    pub fn new(surface: SurfaceParameters, lights: [Light; 2], subdivision: Subdivision) -> Self {
        Self {
            surface,
            lights,
            subdivision,
            time: AccumulatedTime::new(),
            dirty: true,
        }
    }

    /// Build from config. Fails on a bad light color or subdivision.
    ///
    /// Surface scalars go through their bindings, so out-of-range config
    /// values are clamped (with a warning) exactly like debug writes.
    pub fn from_config(config: &MorphConfig) -> Result<Self, ConstructionError> {
        let s = &config.surface;
        let lights = [
            Light::from_config(LightId::A, &config.lights.a)?,
            Light::from_config(LightId::B, &config.lights.b)?,
        ];
        let subdivision = Subdivision::new(s.subdivision_width, s.subdivision_height)?;

        let mut params = Self::new(SurfaceParameters::default(), lights, subdivision);
        let surface_values = [
            ("surface.time_frequency", s.time_frequency),
            ("surface.distortion_frequency", s.distortion_frequency),
            ("surface.distortion_strength", s.distortion_strength),
            ("surface.displacement_frequency", s.displacement_frequency),
            ("surface.displacement_strength", s.displacement_strength),
        ];
        for (key, value) in surface_values {
            if let Some(Binding::Scalar(b)) = binding::find(key) {
                b.write(&mut params, value as f32);
            }
        }
        Ok(params)
    }

    pub fn surface(&self) -> &SurfaceParameters {
        &self.surface
    }

    pub fn light(&self, id: LightId) -> &Light {
        &self.lights[id.index()]
    }

    pub fn lights(&self) -> &[Light; 2] {
        &self.lights
    }

    pub fn subdivision(&self) -> Subdivision {
        self.subdivision
    }

    /// Accumulated (already frequency-scaled) time.
    pub fn time(&self) -> f32 {
        self.time.value()
    }

    /// Whether anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // -- surface -------------------------------------------------------------

    pub fn set_time_frequency(&mut self, v: f32) {
        self.surface.set_time_frequency(v);
        self.dirty = true;
    }

    pub fn set_distortion_frequency(&mut self, v: f32) {
        self.surface.set_distortion_frequency(v);
        self.dirty = true;
    }

    pub fn set_distortion_strength(&mut self, v: f32) {
        self.surface.set_distortion_strength(v);
        self.dirty = true;
    }

    pub fn set_displacement_frequency(&mut self, v: f32) {
        self.surface.set_displacement_frequency(v);
        self.dirty = true;
    }

    pub fn set_displacement_strength(&mut self, v: f32) {
        self.surface.set_displacement_strength(v);
        self.dirty = true;
    }

    // -- lights --------------------------------------------------------------

    fn light_mut(&mut self, id: LightId) -> &mut Light {
        self.dirty = true;
        &mut self.lights[id.index()]
    }

    pub fn set_light_angular(&mut self, id: LightId, phi: f32, theta: f32) {
        self.light_mut(id).set_angular(phi, theta);
    }

    pub fn set_light_phi(&mut self, id: LightId, phi: f32) {
        self.light_mut(id).set_phi(phi);
    }

    pub fn set_light_theta(&mut self, id: LightId, theta: f32) {
        self.light_mut(id).set_theta(theta);
    }

    pub fn set_light_intensity(&mut self, id: LightId, intensity: f32) {
        self.light_mut(id).set_intensity(intensity);
    }

    pub fn set_light_color(&mut self, id: LightId, hex: &str) -> Result<(), ConstructionError> {
        let color: Color = hex.parse()?;
        self.set_light_color_value(id, color);
        Ok(())
    }

    pub fn set_light_color_value(&mut self, id: LightId, color: Color) {
        self.light_mut(id).set_color_value(color);
    }

    // -- per frame -----------------------------------------------------------

    /// Advance the accumulated time by `delta * time_frequency`.
    pub fn advance(&mut self, delta: f32) {
        if self.time.advance(delta, self.surface.time_frequency) {
            self.dirty = true;
        }
    }

    /// Copy surface scalars and lights from `defaults`. Time keeps running.
    pub fn restore_tunables(&mut self, defaults: &ParameterSet) {
        self.surface = defaults.surface;
        self.lights = defaults.lights.clone();
        self.dirty = true;
    }

    // -- debug writes --------------------------------------------------------

    /// Write a scalar tunable by key (e.g. `surface.distortion_strength`).
    /// The value is clamped to the binding's range; the applied value is
    /// returned.
    pub fn write_scalar(&mut self, key: &str, value: f32) -> Result<f32, BindingError> {
        match binding::find(key) {
            Some(Binding::Scalar(b)) => Ok(b.write(self, value)),
            Some(Binding::Color(_)) => Err(BindingError::NotScalar(key.to_string())),
            None => Err(BindingError::Unknown(key.to_string())),
        }
    }

    /// Write a color tunable by key (e.g. `lights.b.color`).
    pub fn write_color(&mut self, key: &str, hex: &str) -> Result<(), BindingError> {
        match binding::find(key) {
            Some(Binding::Color(b)) => b.write(self, hex),
            Some(Binding::Scalar(_)) => Err(BindingError::NotColor(key.to_string())),
            None => Err(BindingError::Unknown(key.to_string())),
        }
    }

    // -- uplink --------------------------------------------------------------

    /// The uniform block for the current state.
    pub fn uniforms(&self) -> SphereUniforms {
        let [a, b] = &self.lights;
        SphereUniforms {
            light_a_color: a.color_instance().extend(1.0).to_array(),
            light_a_position: a.position().extend(1.0).to_array(),
            light_b_color: b.color_instance().extend(1.0).to_array(),
            light_b_position: b.position().extend(1.0).to_array(),
            subdivision: self.subdivision.as_uniform(),
            light_a_intensity: a.intensity(),
            light_b_intensity: b.intensity(),
            time: self.time.value(),
            distortion_frequency: self.surface.distortion_frequency,
            distortion_strength: self.surface.distortion_strength,
            displacement_frequency: self.surface.displacement_frequency,
            displacement_strength: self.surface.displacement_strength,
            _pad0: 0.0,
            _pad1: 0.0,
            _pad2: 0.0,
        }
    }

    /// Inputs of the vertex stage, for CPU-side evaluation.
    pub fn displacement_params(&self) -> DisplacementParams {
        DisplacementParams::from(&self.uniforms())
    }

    /// Inputs of the fragment stage, for CPU-side evaluation.
    pub fn light_samples(&self) -> [LightSample; 2] {
        self.lights.each_ref().map(|light| LightSample {
            direction: light.position(),
            color: light.color_instance(),
            intensity: light.intensity(),
        })
    }

    /// Store the current tuning into `config` (subdivision is left alone).
    pub fn write_to_config(&self, config: &mut MorphConfig) {
        let s = &mut config.surface;
        s.time_frequency = self.surface.time_frequency as f64;
        s.distortion_frequency = self.surface.distortion_frequency as f64;
        s.distortion_strength = self.surface.distortion_strength as f64;
        s.displacement_frequency = self.surface.displacement_frequency as f64;
        s.displacement_strength = self.surface.displacement_strength as f64;
        self.lights[0].write_to_config(&mut config.lights.a);
        self.lights[1].write_to_config(&mut config.lights.b);
    }
}

#[cfg(test)]
mod tests;
