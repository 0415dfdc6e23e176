//! Machine context form editing.
//!
//! Fields edit a raw string buffer; the buffer is committed into the session
//! context on Enter and whenever the cursor leaves the field. Numeric fields
//! are validated on commit: an unparseable or non-finite number flags the
//! field and the previous valid value stays in the context, so NaN can never
//! reach a request payload. The machine kind merges immediately on cycle.

use crate::input_key::InputKey;
use crate::state::{AppState, ContextField};

use super::UpdateResult;

pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Up => {
            commit_active(state);
            state.context_form.field = state.context_form.field.prev();
        }
        InputKey::Down => {
            commit_active(state);
            state.context_form.field = state.context_form.field.next();
        }
        InputKey::Enter => commit_active(state),

        InputKey::Left if state.context_form.field == ContextField::Kind => {
            let kind = state.machine_context.machine_kind.prev();
            state.set_machine_kind(kind);
        }
        InputKey::Right if state.context_form.field == ContextField::Kind => {
            let kind = state.machine_context.machine_kind.next();
            state.set_machine_kind(kind);
        }

        InputKey::Char(c) => {
            if let Some(buffer) = active_buffer(state) {
                buffer.push(c);
            }
        }
        InputKey::Backspace => {
            if let Some(buffer) = active_buffer(state) {
                buffer.pop();
            }
        }

        _ => {}
    }
    UpdateResult::none()
}

fn active_buffer(state: &mut AppState) -> Option<&mut String> {
    match state.context_form.field {
        ContextField::Kind => None,
        ContextField::Model => Some(&mut state.context_form.model),
        ContextField::AgeYears => Some(&mut state.context_form.age_years),
        ContextField::OperatingHours => Some(&mut state.context_form.operating_hours),
    }
}

/// Commit the focused field's buffer into the machine context.
pub(crate) fn commit_active(state: &mut AppState) {
    match state.context_form.field {
        ContextField::Kind => {}
        ContextField::Model => {
            state.machine_context.model = state.context_form.model.clone();
        }
        ContextField::AgeYears => {
            match parse_number(&state.context_form.age_years) {
                Some(value) => {
                    state.machine_context.age_years = value;
                    state.context_form.age_invalid = false;
                }
                None => state.context_form.age_invalid = true,
            }
        }
        ContextField::OperatingHours => {
            match parse_number(&state.context_form.operating_hours) {
                Some(value) => {
                    state.machine_context.operating_hours = value;
                    state.context_form.hours_invalid = false;
                }
                None => state.context_form.hours_invalid = true,
            }
        }
    }
}

/// Float parse accepting only finite, non-negative values.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
