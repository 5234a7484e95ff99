//! Keyboard-driven debug panel: one tunable selected at a time.

use morph_common::Color;
use morph_renderer::binding::{self, Binding, DebugPanel, Folder};
use morph_renderer::ParameterSet;

/// Colors offered by the number keys, in key order.
pub const PALETTE: [Color; 6] = [
    Color::from_rgb(0xff, 0x29, 0x00),
    Color::from_rgb(0x31, 0x58, 0xff),
    Color::from_rgb(0xff, 0xff, 0xff),
    Color::from_rgb(0x00, 0xff, 0x88),
    Color::from_rgb(0xff, 0xcc, 0x00),
    Color::from_rgb(0xff, 0x00, 0xaa),
];

#[derive(Default)]
pub struct KeyboardPanel {
    bindings: Vec<&'static Binding>,
    selected: usize,
}

impl DebugPanel for KeyboardPanel {
    fn register(&mut self, binding: &'static Binding) {
        self.bindings.push(binding);
    }
}

impl KeyboardPanel {
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn selected(&self) -> Option<&'static Binding> {
        self.bindings.get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        if !self.bindings.is_empty() {
            self.selected = (self.selected + 1) % self.bindings.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.bindings.is_empty() {
            self.selected = (self.selected + self.bindings.len() - 1) % self.bindings.len();
        }
    }

    /// Step the selected scalar by `steps` increments. Colors ignore this.
    pub fn nudge(&self, params: &mut ParameterSet, steps: f32) -> bool {
        match self.selected() {
            Some(Binding::Scalar(b)) => {
                b.nudge(params, steps);
                true
            }
            _ => false,
        }
    }

    /// Apply palette entry `index` to the light owning the selection.
    pub fn apply_palette(&self, params: &mut ParameterSet, index: usize) -> bool {
        let (Some(binding), Some(color)) = (self.selected(), PALETTE.get(index)) else {
            return false;
        };
        let Folder::Light(_) = binding.folder() else {
            tracing::debug!("Palette keys only apply to a light; selected {}", binding.key());
            return false;
        };
        match binding::find(&format!("{}.color", binding.folder().name())) {
            Some(Binding::Color(b)) => {
                b.write_value(params, *color);
                true
            }
            _ => false,
        }
    }

    /// `key = value` for the selection, for the window title.
    pub fn describe(&self, params: &ParameterSet) -> Option<String> {
        self.selected()
            .map(|b| format!("{} = {}", b.key(), b.display_value(params)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_config::MorphConfig;
    use morph_renderer::LightId;

    fn setup() -> (KeyboardPanel, ParameterSet) {
        let mut panel = KeyboardPanel::default();
        binding::register_all(&mut panel);
        let params = ParameterSet::from_config(&MorphConfig::default()).unwrap();
        (panel, params)
    }

    #[test]
    fn selection_wraps_both_ways() {
        let (mut panel, _) = setup();
        assert_eq!(panel.len(), 13);
        assert_eq!(panel.selected().unwrap().key(), "surface.time_frequency");
        panel.select_prev();
        assert_eq!(panel.selected().unwrap().key(), "lights.b.theta");
        panel.select_next();
        panel.select_next();
        assert_eq!(panel.selected().unwrap().key(), "surface.distortion_frequency");
    }

    #[test]
    fn empty_panel_is_inert() {
        let mut panel = KeyboardPanel::default();
        panel.select_next();
        panel.select_prev();
        assert!(panel.selected().is_none());
    }

    #[test]
    fn nudge_changes_selected_scalar() {
        let (mut panel, mut params) = setup();
        panel.select_next();
        panel.select_next();
        assert!(panel.nudge(&mut params, 100.0));
        assert!((params.surface().distortion_strength() - 1.1).abs() < 1e-5);
    }

    #[test]
    fn nudge_ignores_colors() {
        let (mut panel, mut params) = setup();
        for _ in 0..5 {
            panel.select_next();
        }
        assert_eq!(panel.selected().unwrap().key(), "lights.a.color");
        assert!(!panel.nudge(&mut params, 1.0));
    }

    #[test]
    fn palette_targets_selected_light() {
        let (mut panel, mut params) = setup();
        assert!(!panel.apply_palette(&mut params, 2));

        for _ in 0..11 {
            panel.select_next();
        }
        assert_eq!(panel.selected().unwrap().key(), "lights.b.phi");
        assert!(panel.apply_palette(&mut params, 2));
        assert_eq!(params.light(LightId::B).color(), Color::WHITE);
        assert_eq!(params.light(LightId::A).color().to_hex(), "#ff2900");
        assert!(!panel.apply_palette(&mut params, 9));
    }

    #[test]
    fn describe_formats_value() {
        let (panel, params) = setup();
        assert_eq!(
            panel.describe(&params).unwrap(),
            "surface.time_frequency = 0.000200"
        );
    }
}
