//! Knowledge sources panel (right column).
//!
//! Lists the current report's sources with display-only excerpt clamping.
//! Enter opens the selected source in the viewer modal.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mdeck_app::report_view::truncate_excerpt;
use mdeck_app::{AppState, Focus};

use crate::theme::{icons, styles};

pub struct SourcesPanel<'a> {
    state: &'a AppState,
}

impl<'a> SourcesPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for SourcesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Sources;
        let sources = self.state.sources();
        let title = format!(" Sources ({}) ", sources.len());
        let block = styles::panel_block(title.as_str(), focused);
        let excerpt_lines = self.state.settings.ui.excerpt_lines;

        let mut lines: Vec<Line> = Vec::new();
        if sources.is_empty() {
            lines.push(Line::from(Span::styled(
                "No sources yet.",
                styles::text_muted(),
            )));
        }

        for (index, source) in sources.iter().enumerate() {
            let under_cursor = focused && index == self.state.source_cursor;
            let title_style = if under_cursor {
                styles::focused_selected()
            } else {
                styles::text_primary().add_modifier(Modifier::BOLD)
            };

            let mut title_spans = vec![
                Span::styled(format!("{} ", icons::ICON_DOC), styles::accent()),
                Span::styled(source.title.clone(), title_style),
            ];
            if source.file_url.is_some() {
                title_spans.push(Span::styled(" ↗", styles::accent()));
            }
            lines.push(Line::from(title_spans));

            let mut meta = source.kind.clone();
            if let Some(page) = &source.page {
                meta.push_str(&format!(" · {page}"));
            }
            lines.push(Line::from(Span::styled(meta, styles::text_secondary())));

            for excerpt_line in truncate_excerpt(&source.excerpt, excerpt_lines).lines() {
                lines.push(Line::from(Span::styled(
                    excerpt_line.to_string(),
                    styles::text_muted(),
                )));
            }
            lines.push(Line::default());
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
