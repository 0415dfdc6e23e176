//! Single-row status bar: query phase, transient notices, focus hint.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use mdeck_app::{AppState, Focus};

use crate::theme::{icons, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn focus_label(&self) -> &'static str {
        match self.state.focus {
            Focus::ContextForm => "context",
            Focus::Composer => "query",
            Focus::Sources => "sources",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let (icon, label, style) = styles::phase_indicator(&self.state.phase);
        let icon = if self.state.is_loading() {
            icons::spinner(self.state.spinner_frame)
        } else {
            icon
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(label, style),
        ];

        if let Some(notice) = &self.state.notice {
            spans.push(Span::styled("  │ ", styles::text_muted()));
            spans.push(Span::styled(notice.as_str(), styles::status_red()));
        }

        spans.push(Span::styled("  │ focus: ", styles::text_muted()));
        spans.push(Span::styled(self.focus_label(), styles::accent()));
        spans.push(Span::styled("  [Tab] switch  [^C] quit", styles::text_muted()));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
