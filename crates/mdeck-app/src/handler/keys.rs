//! Key routing per focus region.
//!
//! Ctrl shortcuts and panel toggles work everywhere; plain characters belong
//! to whichever region owns focus (the form and composer are text fields, so
//! letters must never double as commands there).

use crate::input_key::InputKey;
use crate::state::{AppState, Focus, HeaderPanel};

use super::{composer, context_form, overlay, UpdateResult};

pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    // Global shortcuts, valid regardless of focus or open overlays.
    match key {
        InputKey::CharCtrl('c') => {
            state.request_quit();
            return UpdateResult::none();
        }
        InputKey::CharCtrl('n') => {
            state.toggle_panel(HeaderPanel::Notifications);
            return UpdateResult::none();
        }
        InputKey::CharCtrl('h') => {
            state.toggle_panel(HeaderPanel::Help);
            return UpdateResult::none();
        }
        InputKey::CharCtrl('s') => {
            state.toggle_panel(HeaderPanel::Settings);
            return UpdateResult::none();
        }
        _ => {}
    }

    // The source viewer modal captures input while open.
    if state.viewed_source().is_some() {
        return overlay::handle_modal_key(state, key);
    }

    match key {
        InputKey::Esc => {
            // Close the open panel first; otherwise clear any notice.
            if state.active_panel.is_some() {
                state.active_panel = None;
            } else {
                state.notice = None;
            }
            UpdateResult::none()
        }

        InputKey::Tab => {
            leave_focus(state);
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        InputKey::BackTab => {
            leave_focus(state);
            state.focus = state.focus.prev();
            UpdateResult::none()
        }

        _ => match state.focus {
            Focus::ContextForm => context_form::handle_key(state, key),
            Focus::Composer => composer::handle_key(state, key),
            Focus::Sources => handle_sources_key(state, key),
        },
    }
}

/// Commit pending edits when keyboard focus leaves a region.
fn leave_focus(state: &mut AppState) {
    if state.focus == Focus::ContextForm {
        context_form::commit_active(state);
    }
}

fn handle_sources_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let len = state.sources().len();
    match key {
        InputKey::Char('q') => {
            state.request_quit();
            UpdateResult::none()
        }
        InputKey::Up => {
            state.source_cursor = state.source_cursor.saturating_sub(1);
            UpdateResult::none()
        }
        InputKey::Down => {
            if len > 0 && state.source_cursor + 1 < len {
                state.source_cursor += 1;
            }
            UpdateResult::none()
        }
        InputKey::Home => {
            state.source_cursor = 0;
            UpdateResult::none()
        }
        InputKey::End => {
            state.source_cursor = len.saturating_sub(1);
            UpdateResult::none()
        }
        InputKey::Enter => {
            state.select_source(state.source_cursor);
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}
