//! Source viewer modal keys and document opening.

use crate::input_key::InputKey;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Keys while the source viewer modal is open. Esc (or q) is the only way
/// out; panel shortcuts are handled before we get here and do not touch the
/// modal.
pub(crate) fn handle_modal_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Esc | InputKey::Char('q') => {
            state.clear_source();
            UpdateResult::none()
        }
        InputKey::Enter | InputKey::Char('o') => open_viewed_document(state),
        _ => UpdateResult::none(),
    }
}

/// Open the viewed source's linked document.
///
/// A source without a `file_url` is a no-op with a notice, not an error
/// state.
fn open_viewed_document(state: &mut AppState) -> UpdateResult {
    let Some(source) = state.viewed_source() else {
        return UpdateResult::none();
    };

    match mdeck_client::doc_url(&state.settings.backend.url, source) {
        Ok(url) => UpdateResult::action(UpdateAction::OpenDocument { url }),
        Err(_) => {
            state.notice = Some("No full document is linked for this source.".to_string());
            UpdateResult::none()
        }
    }
}
