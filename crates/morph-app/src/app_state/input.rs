//! Key-to-command mapping for the debug panel.

use winit::keyboard::{Key, NamedKey};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelCommand {
    SelectNext,
    SelectPrev,
    /// Step the selection by this many increments (negative = down).
    Nudge(f32),
    /// Palette entry for the selected light.
    Palette(usize),
    Reset,
    Save,
    Quit,
}

/// Shift multiplies Up/Down steps by this.
const COARSE_STEPS: f32 = 10.0;

/// Translate a pressed key into a panel command.
pub fn panel_command(key: &Key, shift: bool) -> Option<PanelCommand> {
    let steps = if shift { COARSE_STEPS } else { 1.0 };
    match key {
        Key::Named(NamedKey::Tab) if shift => Some(PanelCommand::SelectPrev),
        Key::Named(NamedKey::Tab) => Some(PanelCommand::SelectNext),
        Key::Named(NamedKey::ArrowUp) => Some(PanelCommand::Nudge(steps)),
        Key::Named(NamedKey::ArrowDown) => Some(PanelCommand::Nudge(-steps)),
        Key::Named(NamedKey::Escape) => Some(PanelCommand::Quit),
        Key::Character(c) => match c.as_str() {
            "r" | "R" => Some(PanelCommand::Reset),
            "s" | "S" => Some(PanelCommand::Save),
            digit => digit
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=6).contains(n))
                .map(|n| PanelCommand::Palette(n - 1)),
        },
        _ => None,
    }
}
