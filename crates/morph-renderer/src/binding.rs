//! Compile-time table of every live-tunable parameter.
//!
//! Each entry pairs a name and UI range with plain `fn` accessors on
//! [`ParameterSet`] and the uniform slot it feeds. Debug panels receive
//! the table through [`DebugPanel::register`]; writes go through
//! [`ScalarBinding::write`] / [`ColorBinding::write`], which clamp.

use std::f32::consts::PI;

use morph_common::{Color, ConstructionError};
use serde::Serialize;

use crate::light::LightId;
use crate::params::ParameterSet;

#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("unknown tunable: {0}")]
    Unknown(String),

    #[error("tunable `{0}` is not a scalar")]
    NotScalar(String),

    #[error("tunable `{0}` is not a color")]
    NotColor(String),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// UI grouping of a tunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folder {
    Surface,
    Light(LightId),
}

impl Folder {
    pub fn name(self) -> &'static str {
        match self {
            Folder::Surface => "surface",
            Folder::Light(LightId::A) => "lights.a",
            Folder::Light(LightId::B) => "lights.b",
        }
    }
}

pub struct ScalarBinding {
    pub name: &'static str,
    pub folder: Folder,
    /// `SphereUniforms` field this value reaches.
    pub slot: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub get: fn(&ParameterSet) -> f32,
    pub set: fn(&mut ParameterSet, f32),
}

impl ScalarBinding {
    pub fn value(&self, params: &ParameterSet) -> f32 {
        (self.get)(params)
    }

    /// Clamp `value` into `[min, max]` and apply it. NaN maps to `min`.
    pub fn write(&self, params: &mut ParameterSet, value: f32) -> f32 {
        let clamped = if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        };
        if clamped != value {
            tracing::warn!(
                "{}.{} = {value} is outside [{}, {}], clamped to {clamped}",
                self.folder.name(),
                self.name,
                self.min,
                self.max,
            );
        }
        (self.set)(params, clamped);
        tracing::debug!("{}.{} = {clamped}", self.folder.name(), self.name);
        clamped
    }

    /// Move by `steps` increments of `step`, clamped.
    pub fn nudge(&self, params: &mut ParameterSet, steps: f32) -> f32 {
        let target = (self.value(params) + self.step * steps).clamp(self.min, self.max);
        self.write(params, target)
    }
}

pub struct ColorBinding {
    pub name: &'static str,
    pub folder: Folder,
    pub slot: &'static str,
    pub get: fn(&ParameterSet) -> Color,
    pub set: fn(&mut ParameterSet, Color),
}

impl ColorBinding {
    pub fn value(&self, params: &ParameterSet) -> Color {
        (self.get)(params)
    }

    /// Parse and apply; the parameters are untouched on a bad value.
    pub fn write(&self, params: &mut ParameterSet, hex: &str) -> Result<(), BindingError> {
        let color: Color = hex.parse()?;
        self.write_value(params, color);
        Ok(())
    }

    pub fn write_value(&self, params: &mut ParameterSet, color: Color) {
        (self.set)(params, color);
        tracing::debug!("{}.{} = {color}", self.folder.name(), self.name);
    }
}

pub enum Binding {
    Scalar(ScalarBinding),
    Color(ColorBinding),
}

impl Binding {
    pub fn name(&self) -> &'static str {
        match self {
            Binding::Scalar(b) => b.name,
            Binding::Color(b) => b.name,
        }
    }

    pub fn folder(&self) -> Folder {
        match self {
            Binding::Scalar(b) => b.folder,
            Binding::Color(b) => b.folder,
        }
    }

    pub fn slot(&self) -> &'static str {
        match self {
            Binding::Scalar(b) => b.slot,
            Binding::Color(b) => b.slot,
        }
    }

    /// `folder.name`, e.g. `lights.a.intensity`.
    pub fn key(&self) -> String {
        format!("{}.{}", self.folder().name(), self.name())
    }

    fn matches(&self, key: &str) -> bool {
        key.rsplit_once('.')
            .is_some_and(|(folder, name)| folder == self.folder().name() && name == self.name())
    }

    /// Current value as display text.
    pub fn display_value(&self, params: &ParameterSet) -> String {
        match self {
            Binding::Scalar(b) => format_scalar(b.value(params), b.step),
            Binding::Color(b) => b.value(params).to_hex(),
        }
    }
}

/// Format with as many decimals as the step needs.
pub fn format_scalar(value: f32, step: f32) -> String {
    let decimals = if step > 0.0 {
        (-step.log10() - 1e-3).ceil().clamp(0.0, 8.0) as usize
    } else {
        3
    };
    format!("{value:.decimals$}")
}

/// Every tunable, in panel order.
pub static BINDINGS: [Binding; 13] = [
    Binding::Scalar(ScalarBinding {
        name: "time_frequency",
        folder: Folder::Surface,
        slot: "time",
        min: 0.0,
        max: 0.001,
        step: 0.000001,
        get: |p| p.surface().time_frequency(),
        set: |p, v| p.set_time_frequency(v),
    }),
    Binding::Scalar(ScalarBinding {
        name: "distortion_frequency",
        folder: Folder::Surface,
        slot: "distortion_frequency",
        min: 0.0,
        max: 10.0,
        step: 0.001,
        get: |p| p.surface().distortion_frequency(),
        set: |p, v| p.set_distortion_frequency(v),
    }),
    Binding::Scalar(ScalarBinding {
        name: "distortion_strength",
        folder: Folder::Surface,
        slot: "distortion_strength",
        min: 0.0,
        max: 5.0,
        step: 0.001,
        get: |p| p.surface().distortion_strength(),
        set: |p, v| p.set_distortion_strength(v),
    }),
    Binding::Scalar(ScalarBinding {
        name: "displacement_frequency",
        folder: Folder::Surface,
        slot: "displacement_frequency",
        min: 0.0,
        max: 10.0,
        step: 0.001,
        get: |p| p.surface().displacement_frequency(),
        set: |p, v| p.set_displacement_frequency(v),
    }),
    Binding::Scalar(ScalarBinding {
        name: "displacement_strength",
        folder: Folder::Surface,
        slot: "displacement_strength",
        min: 0.0,
        max: 1.0,
        step: 0.001,
        get: |p| p.surface().displacement_strength(),
        set: |p, v| p.set_displacement_strength(v),
    }),
    // Light A
    Binding::Color(ColorBinding {
        name: "color",
        folder: Folder::Light(LightId::A),
        slot: "light_a_color",
        get: |p| p.light(LightId::A).color(),
        set: |p, c| p.set_light_color_value(LightId::A, c),
    }),
    Binding::Scalar(ScalarBinding {
        name: "intensity",
        folder: Folder::Light(LightId::A),
        slot: "light_a_intensity",
        min: 0.0,
        max: 10.0,
        step: 0.01,
        get: |p| p.light(LightId::A).intensity(),
        set: |p, v| p.set_light_intensity(LightId::A, v),
    }),
    Binding::Scalar(ScalarBinding {
        name: "phi",
        folder: Folder::Light(LightId::A),
        slot: "light_a_position",
        min: 0.0,
        max: PI,
        step: 0.001,
        get: |p| p.light(LightId::A).phi(),
        set: |p, v| p.set_light_phi(LightId::A, v),
    }),
    Binding::Scalar(ScalarBinding {
        name: "theta",
        folder: Folder::Light(LightId::A),
        slot: "light_a_position",
        min: -PI,
        max: PI,
        step: 0.001,
        get: |p| p.light(LightId::A).theta(),
        set: |p, v| p.set_light_theta(LightId::A, v),
    }),
    // Light B
    Binding::Color(ColorBinding {
        name: "color",
        folder: Folder::Light(LightId::B),
        slot: "light_b_color",
        get: |p| p.light(LightId::B).color(),
        set: |p, c| p.set_light_color_value(LightId::B, c),
    }),
    Binding::Scalar(ScalarBinding {
        name: "intensity",
        folder: Folder::Light(LightId::B),
        slot: "light_b_intensity",
        min: 0.0,
        max: 10.0,
        step: 0.01,
        get: |p| p.light(LightId::B).intensity(),
        set: |p, v| p.set_light_intensity(LightId::B, v),
    }),
    Binding::Scalar(ScalarBinding {
        name: "phi",
        folder: Folder::Light(LightId::B),
        slot: "light_b_position",
        min: 0.0,
        max: PI,
        step: 0.001,
        get: |p| p.light(LightId::B).phi(),
        set: |p, v| p.set_light_phi(LightId::B, v),
    }),
    Binding::Scalar(ScalarBinding {
        name: "theta",
        folder: Folder::Light(LightId::B),
        slot: "light_b_position",
        min: -PI,
        max: PI,
        step: 0.001,
        get: |p| p.light(LightId::B).theta(),
        set: |p, v| p.set_light_theta(LightId::B, v),
    }),
];

/// Look up a binding by its dotted key.
pub fn find(key: &str) -> Option<&'static Binding> {
    BINDINGS.iter().find(|b| b.matches(key))
}

/// Receives the binding table once, at renderer construction.
pub trait DebugPanel {
    fn register(&mut self, binding: &'static Binding);
}

/// Hand every binding to `panel`, in table order.
pub fn register_all(panel: &mut dyn DebugPanel) {
    for binding in BINDINGS.iter() {
        panel.register(binding);
    }
}

/// A panel that ignores registrations (headless runs).
#[derive(Debug, Default)]
pub struct NullPanel;

impl DebugPanel for NullPanel {
    fn register(&mut self, _binding: &'static Binding) {}
}

/// Serializable view of one binding and its current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BindingSnapshot {
    pub key: String,
    pub slot: &'static str,
    #[serde(flatten)]
    pub value: SnapshotValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SnapshotValue {
    Scalar {
        value: f32,
        min: f32,
        max: f32,
        step: f32,
    },
    Color {
        value: String,
    },
}

/// Snapshot every binding against `params`.
pub fn snapshot(params: &ParameterSet) -> Vec<BindingSnapshot> {
    BINDINGS
        .iter()
        .map(|binding| BindingSnapshot {
            key: binding.key(),
            slot: binding.slot(),
            value: match binding {
                Binding::Scalar(b) => SnapshotValue::Scalar {
                    value: b.value(params),
                    min: b.min,
                    max: b.max,
                    step: b.step,
                },
                Binding::Color(b) => SnapshotValue::Color {
                    value: b.value(params).to_hex(),
                },
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::SphereUniforms;
    use morph_config::MorphConfig;

    fn params() -> ParameterSet {
        ParameterSet::from_config(&MorphConfig::default()).unwrap()
    }

    #[test]
    fn every_slot_exists_in_uniform_block() {
        for binding in BINDINGS.iter() {
            assert!(
                SphereUniforms::SLOTS.contains(&binding.slot()),
                "{} -> {}",
                binding.key(),
                binding.slot()
            );
        }
    }

    #[test]
    fn keys_are_unique_and_resolvable() {
        let keys: Vec<String> = BINDINGS.iter().map(Binding::key).collect();
        for key in &keys {
            assert_eq!(keys.iter().filter(|k| *k == key).count(), 1, "{key}");
            let found = find(key).unwrap();
            assert_eq!(&found.key(), key);
        }
        assert!(find("lights.c.phi").is_none());
        assert!(find("phi").is_none());
    }

    #[test]
    fn scalar_writes_are_clamped() {
        let mut p = params();
        let Some(Binding::Scalar(b)) = find("surface.displacement_strength") else {
            panic!("missing binding");
        };
        assert_eq!(b.write(&mut p, 3.0), 1.0);
        assert_eq!(p.surface().displacement_strength(), 1.0);
        assert_eq!(b.write(&mut p, -1.0), 0.0);
        assert_eq!(b.write(&mut p, f32::NAN), 0.0);
        assert_eq!(b.write(&mut p, 0.5), 0.5);
    }

    #[test]
    fn intensity_binding_clamps_to_ui_range() {
        let mut p = params();
        assert_eq!(p.write_scalar("lights.b.intensity", 25.0).unwrap(), 10.0);
        assert_eq!(p.light(LightId::B).intensity(), 10.0);
    }

    #[test]
    fn angle_bindings_reach_light_position() {
        let mut p = params();
        let before = p.light(LightId::A).position();
        p.write_scalar("lights.a.theta", 0.0).unwrap();
        assert_ne!(p.light(LightId::A).position(), before);
        assert_eq!(p.light(LightId::B).theta(), -1.844);
    }

    #[test]
    fn nudge_moves_by_step() {
        let mut p = params();
        let Some(Binding::Scalar(b)) = find("surface.distortion_strength") else {
            panic!("missing binding");
        };
        let v = b.nudge(&mut p, 10.0);
        assert!((v - 1.01).abs() < 1e-5);
        let v = b.nudge(&mut p, -10_000.0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn color_write_rejects_garbage() {
        let mut p = params();
        let err = p.write_color("lights.a.color", "#zzzzzz").unwrap_err();
        assert!(matches!(err, BindingError::Construction(_)));
        assert_eq!(p.light(LightId::A).color().to_hex(), "#ff2900");
        p.write_color("lights.a.color", "#00ff00").unwrap();
        assert_eq!(p.light(LightId::A).color().to_hex(), "#00ff00");
    }

    #[test]
    fn wrong_kind_is_reported() {
        let mut p = params();
        assert!(matches!(
            p.write_scalar("lights.a.color", 1.0),
            Err(BindingError::NotScalar(_))
        ));
        assert!(matches!(
            p.write_color("lights.a.phi", "#ffffff"),
            Err(BindingError::NotColor(_))
        ));
        assert!(matches!(
            p.write_scalar("surface.nope", 1.0),
            Err(BindingError::Unknown(_))
        ));
    }

    #[derive(Default)]
    struct RecordingPanel(Vec<String>);

    impl DebugPanel for RecordingPanel {
        fn register(&mut self, binding: &'static Binding) {
            self.0.push(binding.key());
        }
    }

    #[test]
    fn register_all_visits_table_in_order() {
        let mut panel = RecordingPanel::default();
        register_all(&mut panel);
        assert_eq!(panel.0.len(), BINDINGS.len());
        assert_eq!(panel.0[0], "surface.time_frequency");
        assert_eq!(panel.0[5], "lights.a.color");
        assert_eq!(panel.0[12], "lights.b.theta");
    }

    #[test]
    fn snapshot_serializes_kind_tag() {
        let snap = snapshot(&params());
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json[0]["key"], "surface.time_frequency");
        assert_eq!(json[0]["kind"], "scalar");
        assert_eq!(json[5]["kind"], "color");
        assert_eq!(json[5]["value"], "#ff2900");
    }

    #[test]
    fn scalar_display_uses_step_precision() {
        assert_eq!(format_scalar(0.0002, 0.000001), "0.000200");
        assert_eq!(format_scalar(2.0, 0.001), "2.000");
        assert_eq!(format_scalar(1.0, 0.01), "1.00");
    }
}
