//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use mdeck_app::AppState;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI. Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);
    frame.render_widget(widgets::ContextFormPanel::new(state), areas.context_form);
    frame.render_widget(widgets::ReportPanel::new(state), areas.report);
    frame.render_widget(widgets::Composer::new(state), areas.composer);
    frame.render_widget(widgets::SourcesPanel::new(state), areas.sources);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Overlays: header panel first, then the source modal on top.
    if let Some(panel) = state.active_panel {
        frame.render_widget(widgets::HeaderPanelOverlay::new(state, panel), area);
    }
    if let Some(source) = state.viewed_source() {
        frame.render_widget(widgets::SourceModal::new(source), area);
    }
}
