//! Semantic style builders for the dashboard theme.

use mdeck_app::report_view::{CauseSeverity, ConfidenceBucket};
use mdeck_app::QueryPhase;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::{icons, palette};

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Key hint style for shortcut letters.
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn panel_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Semantic color mapping ---

/// Fill color of the confidence gauge. Two discrete buckets, never
/// interpolated.
pub fn gauge_style(bucket: ConfidenceBucket) -> Style {
    let color = match bucket {
        ConfidenceBucket::Confident => palette::GAUGE_CONFIDENT,
        ConfidenceBucket::Tentative => palette::GAUGE_TENTATIVE,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Cause bar color for a severity rank.
pub fn severity_style(severity: CauseSeverity) -> Style {
    let color = match severity {
        CauseSeverity::High => palette::SEVERITY_HIGH,
        CauseSeverity::Medium => palette::SEVERITY_MEDIUM,
        CauseSeverity::Low => palette::SEVERITY_LOW,
    };
    Style::default().fg(color)
}

/// Phase indicator for the status bar.
///
/// Returns `(icon, label, Style)` for the given phase. Loading callers
/// substitute the animated spinner glyph for the icon.
pub fn phase_indicator(phase: &QueryPhase) -> (&'static str, &'static str, Style) {
    match phase {
        QueryPhase::Idle => (
            icons::ICON_OFFLINE,
            "Ready for query",
            Style::default().fg(palette::TEXT_MUTED),
        ),
        QueryPhase::Loading => (
            icons::SPINNER_FRAMES[0],
            "Diagnosing",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        QueryPhase::Failed(_) => (
            icons::ICON_CROSS,
            "Failed",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
        QueryPhase::Ready => (
            icons::ICON_CHECK,
            "Report ready",
            Style::default().fg(palette::STATUS_GREEN),
        ),
    }
}
