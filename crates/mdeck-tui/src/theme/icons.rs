//! Icon glyphs for the TUI.
//!
//! Plain Unicode characters that work in all terminals; no Nerd Font
//! requirement.

use mdeck_core::StepKind;

// --- Status indicators ---
pub const ICON_ONLINE: &str = "\u{25cf}"; // ●
pub const ICON_OFFLINE: &str = "\u{25cb}"; // ○
pub const ICON_ALERT: &str = "\u{26a0}"; // ⚠
pub const ICON_CHECK: &str = "\u{2713}"; // ✓
pub const ICON_CROSS: &str = "\u{2717}"; // ✗
pub const ICON_CHEVRON: &str = "\u{203a}"; // ›
pub const ICON_DOC: &str = "\u{2261}"; // ≡

/// Braille spinner cycle for the loading indicator.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation frame counter.
pub fn spinner(frame: u8) -> &'static str {
    SPINNER_FRAMES[frame as usize % SPINNER_FRAMES.len()]
}

/// Glyph for a diagnostic step kind.
pub fn step_icon(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Safety => ICON_ALERT,
        StepKind::Inspection => "\u{25ce}", // ◎
        StepKind::Repair => "\u{2699}",     // ⚙
        StepKind::Test => ICON_CHECK,
        StepKind::Report => ICON_DOC,
        StepKind::Other => ICON_CHEVRON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner(0), spinner(10));
        assert_eq!(spinner(255), SPINNER_FRAMES[255 % 10]);
    }

    #[test]
    fn test_every_step_kind_has_an_icon() {
        for kind in [
            StepKind::Safety,
            StepKind::Inspection,
            StepKind::Repair,
            StepKind::Test,
            StepKind::Report,
            StepKind::Other,
        ] {
            assert!(!step_icon(kind).is_empty());
        }
    }

    #[test]
    fn test_safety_steps_use_the_alert_glyph() {
        assert_eq!(step_icon(StepKind::Safety), ICON_ALERT);
    }
}
