//! Machine context form panel (left column).
//!
//! Renders the raw edit buffers, not the committed context, so in-progress
//! edits are visible. Invalid numeric buffers are flagged inline.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mdeck_app::state::ContextField;
use mdeck_app::{AppState, Focus};

use crate::theme::styles;

pub struct ContextFormPanel<'a> {
    state: &'a AppState,
}

impl<'a> ContextFormPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn field_line(&self, field: ContextField, label: &'a str, value: String, invalid: bool) -> Line<'a> {
        let focused = self.state.focus == Focus::ContextForm;
        let active = focused && self.state.context_form.field == field;

        let value_style = if active {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };

        let mut spans = vec![
            Span::styled(format!("{label:<9}"), styles::text_secondary()),
            Span::styled(value, value_style),
        ];
        if invalid {
            spans.push(Span::styled("  invalid number", styles::status_red()));
        }
        Line::from(spans)
    }
}

impl Widget for ContextFormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::ContextForm;
        let block = styles::panel_block(" Machine Context ", focused);
        let form = &self.state.context_form;
        let kind = self.state.machine_context.machine_kind;

        let lines = vec![
            self.field_line(ContextField::Kind, "Type", format!("‹ {} ›", kind.label()), false),
            Line::default(),
            self.field_line(ContextField::Model, "Model", form.model.clone(), false),
            Line::default(),
            self.field_line(
                ContextField::AgeYears,
                "Age (y)",
                form.age_years.clone(),
                form.age_invalid,
            ),
            Line::default(),
            self.field_line(
                ContextField::OperatingHours,
                "Hours",
                form.operating_hours.clone(),
                form.hours_invalid,
            ),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
