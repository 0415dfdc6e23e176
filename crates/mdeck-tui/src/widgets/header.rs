//! Header bar widget
//!
//! App title, backend connectivity indicator, and the panel shortcut hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use mdeck_app::AppState;

use crate::theme::{icons, palette, styles};

/// Main header showing app title, backend state, and panel shortcuts
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn backend_indicator(&self) -> (&'static str, &'static str, Style) {
        match self.state.backend_online {
            Some(true) => (
                icons::ICON_ONLINE,
                "online",
                Style::default().fg(palette::STATUS_GREEN),
            ),
            Some(false) => (
                icons::ICON_ONLINE,
                "offline",
                Style::default().fg(palette::STATUS_RED),
            ),
            None => (
                icons::ICON_OFFLINE,
                "probing",
                Style::default().fg(palette::TEXT_MUTED),
            ),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("", false)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (status_icon, status_label, status_style) = self.backend_indicator();

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(status_icon, status_style),
            Span::raw(" "),
            Span::styled(
                "MaintDeck",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", Style::default().fg(palette::TEXT_MUTED)),
            Span::raw(" "),
            Span::styled(
                self.state.machine_context.machine_kind.label(),
                Style::default().fg(palette::TEXT_SECONDARY),
            ),
            Span::raw("  "),
            Span::styled(status_label, status_style),
        ]);
        let left_width = left_line.width() as u16;

        let shortcuts_line = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("^N", styles::keybinding()),
            Span::styled("] Notifications  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("^H", styles::keybinding()),
            Span::styled("] Help  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("^S", styles::keybinding()),
            Span::styled("] Settings", styles::text_muted()),
        ]);
        let shortcuts_width = shortcuts_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the shortcuts when they fit next to the title.
        if left_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width - 1;
            buf.set_line(x, inner.y, &shortcuts_line, shortcuts_width);
        }
    }
}
