//! Query composer: quick-action chips and the free-text field.
//!
//! Both paths feed the same submission contract. While a request is in
//! flight the composer is inert, but the real guard lives in
//! `AppState::begin_query` so a bypassed control still cannot issue a
//! concurrent request.

use crate::input_key::InputKey;
use crate::state::{quick_phrase, AppState, QUICK_SYMPTOMS};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    if state.is_loading() {
        return UpdateResult::none();
    }

    match key {
        InputKey::Char(c) => {
            state.composer.input.push(c);
            UpdateResult::none()
        }
        InputKey::Backspace => {
            state.composer.input.pop();
            UpdateResult::none()
        }
        InputKey::Left => {
            state.composer.quick_cursor = state.composer.quick_cursor.saturating_sub(1);
            UpdateResult::none()
        }
        InputKey::Right => {
            if state.composer.quick_cursor + 1 < QUICK_SYMPTOMS.len() {
                state.composer.quick_cursor += 1;
            }
            UpdateResult::none()
        }
        InputKey::Enter => {
            // Free text wins when present; an empty field activates the
            // selected quick-action chip, which submits immediately.
            let text = if state.composer.input.trim().is_empty() {
                quick_phrase(QUICK_SYMPTOMS[state.composer.quick_cursor])
            } else {
                state.composer.input.clone()
            };
            submit(state, &text)
        }
        _ => UpdateResult::none(),
    }
}

/// Submit a query if the lifecycle guards allow it.
pub(crate) fn submit(state: &mut AppState, text: &str) -> UpdateResult {
    match state.begin_query(text) {
        Some((generation, request)) => {
            tracing::info!("submitting query (gen {generation}): {:?}", request.query);
            UpdateResult::action(UpdateAction::SubmitQuery {
                generation,
                request,
            })
        }
        None => UpdateResult::none(),
    }
}
