//! Source viewer modal.
//!
//! Shows one knowledge source in full (no excerpt clamping) over a dimmed
//! background. Independent of the header panels.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mdeck_core::KnowledgeSource;

use crate::theme::styles;

use super::modal_overlay;

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 18;

pub struct SourceModal<'a> {
    source: &'a KnowledgeSource,
}

impl<'a> SourceModal<'a> {
    pub fn new(source: &'a KnowledgeSource) -> Self {
        Self { source }
    }
}

impl Widget for SourceModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);
        let modal_area = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::clear_area(buf, modal_area);
        modal_overlay::render_shadow(buf, modal_area);

        let mut lines = vec![Line::from(Span::styled(
            self.source.title.clone(),
            styles::text_primary().add_modifier(Modifier::BOLD),
        ))];

        let mut meta = self.source.kind.clone();
        if let Some(page) = &self.source.page {
            meta.push_str(&format!(" · {page}"));
        }
        if let Some(id) = &self.source.source_id {
            meta.push_str(&format!(" · {id}"));
        }
        lines.push(Line::from(Span::styled(meta, styles::text_secondary())));
        lines.push(Line::default());

        // Full excerpt here; clamping is for the list only.
        for excerpt_line in self.source.excerpt.lines() {
            lines.push(Line::from(Span::styled(
                excerpt_line.to_string(),
                styles::text_primary(),
            )));
        }
        lines.push(Line::default());

        let open_hint = if self.source.file_url.is_some() {
            Line::from(vec![
                Span::styled("[o]", styles::keybinding()),
                Span::styled(" Open document  ", styles::text_muted()),
                Span::styled("[Esc]", styles::keybinding()),
                Span::styled(" Close", styles::text_muted()),
            ])
        } else {
            Line::from(vec![
                Span::styled("No full document linked  ", styles::text_muted()),
                Span::styled("[Esc]", styles::keybinding()),
                Span::styled(" Close", styles::text_muted()),
            ])
        };
        lines.push(open_hint);

        Paragraph::new(lines)
            .block(styles::modal_block(" Source "))
            .wrap(Wrap { trim: false })
            .render(modal_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn source(file_url: Option<&str>) -> KnowledgeSource {
        KnowledgeSource {
            title: "Motor Maintenance Manual".to_string(),
            kind: "Technical Manual".to_string(),
            excerpt: "line one\nline two\nline three\nline four\nline five".to_string(),
            page: Some("p. 112".to_string()),
            source_id: Some("MAN-001".to_string()),
            file_url: file_url.map(String::from),
        }
    }

    #[test]
    fn test_modal_shows_full_excerpt() {
        let mut term = TestTerminal::new();
        let src = source(None);

        term.render_widget(SourceModal::new(&src), term.area());

        assert!(term.buffer_contains("Motor Maintenance Manual"));
        // No clamping in the modal.
        assert!(term.buffer_contains("line five"));
    }

    #[test]
    fn test_modal_open_hint_requires_file_url() {
        let mut term = TestTerminal::new();
        let linked = source(Some("manuals/m3aa.pdf"));
        term.render_widget(SourceModal::new(&linked), term.area());
        assert!(term.buffer_contains("Open document"));

        let mut term = TestTerminal::new();
        let unlinked = source(None);
        term.render_widget(SourceModal::new(&unlinked), term.area());
        assert!(term.buffer_contains("No full document linked"));
    }
}
