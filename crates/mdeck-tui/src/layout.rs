//! Screen layout definitions for the TUI
//!
//! Header bar on top, three-column body (machine context, report, sources),
//! composer under the report column, status bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header bar (title, backend indicator, panel shortcuts)
    pub header: Rect,

    /// Machine context form (left column)
    pub context_form: Rect,

    /// Diagnostic report (center column, above the composer)
    pub report: Rect,

    /// Query composer (center column, below the report)
    pub composer: Rect,

    /// Knowledge sources (right column)
    pub sources: Rect,

    /// Single-row status bar
    pub status: Rect,
}

/// Column width of the machine context form.
const FORM_WIDTH: u16 = 30;

/// Column width of the knowledge sources list.
const SOURCES_WIDTH: u16 = 34;

/// Height of the composer (border + chips row + input row + border).
const COMPOSER_HEIGHT: u16 = 5;

/// Create the main screen layout.
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // header
        Constraint::Min(8),    // body
        Constraint::Length(1), // status bar
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Length(FORM_WIDTH),
        Constraint::Min(30),
        Constraint::Length(SOURCES_WIDTH),
    ])
    .split(rows[1]);

    let center = Layout::vertical([Constraint::Min(3), Constraint::Length(COMPOSER_HEIGHT)])
        .split(columns[1]);

    ScreenAreas {
        header: rows[0],
        context_form: columns[0],
        report: center[0],
        composer: center[1],
        sources: columns[2],
        status: rows[2],
    }
}
