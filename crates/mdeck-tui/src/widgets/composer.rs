//! Query composer widget: quick-action chips and the free-text input.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mdeck_app::state::QUICK_SYMPTOMS;
use mdeck_app::{AppState, Focus};

use crate::theme::{icons, styles};

pub struct Composer<'a> {
    state: &'a AppState,
}

impl<'a> Composer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn chips_line(&self) -> Line<'static> {
        let focused = self.state.focus == Focus::Composer;
        let mut spans = Vec::with_capacity(QUICK_SYMPTOMS.len() * 2);
        for (index, symptom) in QUICK_SYMPTOMS.iter().enumerate() {
            let selected = index == self.state.composer.quick_cursor;
            let style = if selected && focused {
                styles::focused_selected()
            } else if selected {
                styles::accent()
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(format!(" {symptom} "), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn input_line(&self) -> Line<'static> {
        if self.state.is_loading() {
            return Line::from(vec![
                Span::styled(
                    icons::spinner(self.state.spinner_frame).to_string(),
                    styles::accent_bold(),
                ),
                Span::styled(" Diagnosing...", styles::text_secondary()),
            ]);
        }

        let input = &self.state.composer.input;
        if input.is_empty() {
            Line::from(Span::styled(
                "Describe the symptom, or Enter for the selected chip",
                styles::text_muted(),
            ))
        } else {
            Line::from(vec![
                Span::styled(input.clone(), styles::text_primary()),
                Span::styled("▏", styles::accent()),
            ])
        }
    }
}

impl Widget for Composer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Composer;
        let block = styles::panel_block(" Query ", focused);

        Paragraph::new(vec![self.chips_line(), self.input_line()])
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mdeck_app::{update, InputKey, Message};

    #[test]
    fn test_composer_lists_all_quick_actions() {
        let mut term = TestTerminal::new();
        let state = AppState::new();

        term.render_widget(Composer::new(&state), term.area());

        for symptom in QUICK_SYMPTOMS {
            assert!(term.buffer_contains(symptom), "missing chip {symptom}");
        }
    }

    #[test]
    fn test_composer_shows_typed_text() {
        let mut term = TestTerminal::new();
        let mut state = AppState::new();
        state.focus = Focus::Composer;
        for c in "Grinding noise".chars() {
            update(&mut state, Message::Key(InputKey::Char(c)));
        }

        term.render_widget(Composer::new(&state), term.area());

        assert!(term.buffer_contains("Grinding noise"));
    }

    #[test]
    fn test_composer_shows_spinner_while_loading() {
        let mut term = TestTerminal::new();
        let mut state = AppState::new();
        state.begin_query("Overheating issue detected").unwrap();

        term.render_widget(Composer::new(&state), term.area());

        assert!(term.buffer_contains("Diagnosing..."));
    }
}
