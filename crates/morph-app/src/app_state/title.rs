//! Window title: shows the selected tunable and its value.

use super::core::MorphApp;

/// `"{base} | {selection}"`, or just the base title.
pub(super) fn compose_title(base: &str, selection: Option<&str>) -> String {
    match selection {
        Some(s) => format!("{base} | {s}"),
        None => base.to_string(),
    }
}

impl MorphApp {
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        let selection = self.panel.describe(self.scene.params());
        window.set_title(&compose_title(&self.config.window.title, selection.as_deref()));
    }
}
