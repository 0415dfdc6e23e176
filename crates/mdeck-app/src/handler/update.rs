//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{keys, query, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action for the event loop.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => keys::handle_key(state, key),

        Message::Tick => {
            if state.is_loading() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::QueryCompleted { generation, report } => {
            query::handle_completed(state, generation, report)
        }

        Message::QueryFailed { generation, reason } => {
            query::handle_failed(state, generation, reason)
        }

        Message::HealthProbed { online } => {
            state.backend_online = Some(online);
            UpdateResult::none()
        }

        Message::DocumentOpenFailed { reason } => {
            tracing::warn!("document opener failed: {reason}");
            state.notice = Some("Could not open the document viewer.".to_string());
            UpdateResult::none()
        }
    }
}
