//! Header-anchored overlay panels: notifications, help, settings.
//!
//! At most one panel is open at a time; the state machine in `AppState`
//! enforces that, this widget only renders whichever is active.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mdeck_app::{AppState, HeaderPanel};

use crate::theme::styles;

use super::modal_overlay;

const PANEL_WIDTH: u16 = 48;
const PANEL_HEIGHT: u16 = 14;

pub struct HeaderPanelOverlay<'a> {
    state: &'a AppState,
    panel: HeaderPanel,
}

impl<'a> HeaderPanelOverlay<'a> {
    pub fn new(state: &'a AppState, panel: HeaderPanel) -> Self {
        Self { state, panel }
    }

    fn title(&self) -> &'static str {
        match self.panel {
            HeaderPanel::Notifications => " Notifications ",
            HeaderPanel::Help => " Help ",
            HeaderPanel::Settings => " Settings ",
        }
    }

    fn lines(&self) -> Vec<Line<'_>> {
        match self.panel {
            HeaderPanel::Notifications => match &self.state.notice {
                Some(notice) => vec![Line::from(Span::styled(
                    notice.as_str(),
                    styles::text_primary(),
                ))],
                None => vec![Line::from(Span::styled(
                    "No notifications.",
                    styles::text_muted(),
                ))],
            },
            HeaderPanel::Help => help_lines(),
            HeaderPanel::Settings => {
                let settings = &self.state.settings;
                vec![
                    setting_line("Backend URL", settings.backend.url.clone()),
                    setting_line("Timeout", format!("{}s", settings.backend.timeout_secs)),
                    setting_line("Excerpt lines", settings.ui.excerpt_lines.to_string()),
                    Line::default(),
                    Line::from(Span::styled(
                        "Edit .mdeck/config.toml and restart to change.",
                        styles::text_muted(),
                    )),
                ]
            }
        }
    }
}

fn setting_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), styles::text_secondary()),
        Span::styled(value, styles::text_primary()),
    ])
}

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:<10}"), styles::keybinding()),
        Span::styled(action, styles::text_secondary()),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        key_line("Tab", "Cycle focus (form, query, sources)"),
        key_line("Enter", "Commit field / submit query / open"),
        key_line("←/→", "Cycle machine type, select chip"),
        key_line("↑/↓", "Move within form or source list"),
        key_line("^N ^H ^S", "Toggle panels"),
        key_line("Esc", "Close panel or modal, clear notice"),
        key_line("^C", "Quit"),
    ]
}

impl Widget for HeaderPanelOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Anchor under the header's right edge rather than centering.
        let width = PANEL_WIDTH.min(area.width);
        let height = PANEL_HEIGHT.min(area.height.saturating_sub(3));
        let x = area.x + area.width.saturating_sub(width + 1);
        let y = area.y + 3;
        let panel_area = Rect::new(x, y, width, height);

        modal_overlay::clear_area(buf, panel_area);
        modal_overlay::render_shadow(buf, panel_area);

        let block = styles::modal_block(self.title());
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(panel_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_notifications_panel_empty() {
        let mut term = TestTerminal::new();
        let state = AppState::new();

        term.render_widget(
            HeaderPanelOverlay::new(&state, HeaderPanel::Notifications),
            term.area(),
        );

        assert!(term.buffer_contains("Notifications"));
        assert!(term.buffer_contains("No notifications."));
    }

    #[test]
    fn test_notifications_panel_shows_notice() {
        let mut term = TestTerminal::new();
        let mut state = AppState::new();
        state.notice = Some("Could not open the document viewer.".to_string());

        term.render_widget(
            HeaderPanelOverlay::new(&state, HeaderPanel::Notifications),
            term.area(),
        );

        assert!(term.buffer_contains("Could not open the document viewer."));
    }

    #[test]
    fn test_help_panel_lists_bindings() {
        let mut term = TestTerminal::new();
        let state = AppState::new();

        term.render_widget(HeaderPanelOverlay::new(&state, HeaderPanel::Help), term.area());

        assert!(term.buffer_contains("Cycle focus"));
        assert!(term.buffer_contains("Quit"));
    }

    #[test]
    fn test_settings_panel_shows_config() {
        let mut term = TestTerminal::new();
        let state = AppState::new();

        term.render_widget(
            HeaderPanelOverlay::new(&state, HeaderPanel::Settings),
            term.area(),
        );

        assert!(term.buffer_contains("http://localhost:8000"));
        assert!(term.buffer_contains("30s"));
    }
}
