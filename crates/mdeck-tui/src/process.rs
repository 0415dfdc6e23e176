//! Message processing and action dispatch.
//!
//! `process_message` runs the update function, loops any follow-up message,
//! and hands resulting actions to the event loop's background tasks. Network
//! work never blocks the render loop: submissions are spawned onto the
//! runtime and report back over the message channel, tagged with their
//! generation.

use tokio::sync::mpsc;

use mdeck_app::{update, AppState, Message, UpdateAction};
use mdeck_client::{open_document, DiagnosticBackend, HttpBackend};

/// Process one message to completion, including follow-ups and actions.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &HttpBackend,
) {
    let mut current = Some(message);
    while let Some(message) = current.take() {
        let result = update(state, message);
        if let Some(action) = result.action {
            dispatch_action(action, msg_tx, backend);
        }
        current = result.message;
    }
}

fn dispatch_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>, backend: &HttpBackend) {
    match action {
        UpdateAction::SubmitQuery {
            generation,
            request,
        } => {
            let backend = backend.clone();
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let message = match backend.diagnose(request).await {
                    Ok(report) => Message::QueryCompleted { generation, report },
                    Err(e) => Message::QueryFailed {
                        generation,
                        reason: e.to_string(),
                    },
                };
                let _ = tx.send(message).await;
            });
        }

        UpdateAction::OpenDocument { url } => {
            if let Err(e) = open_document(&url) {
                let _ = msg_tx.try_send(Message::DocumentOpenFailed {
                    reason: e.to_string(),
                });
            }
        }
    }
}
