//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key routing per focus region
//! - `context_form`: Machine context form editing and commit
//! - `composer`: Query composer (quick actions + free text)
//! - `overlay`: Source viewer modal and document opening
//! - `query`: Query lifecycle completions and probes

pub(crate) mod composer;
pub(crate) mod context_form;
pub(crate) mod keys;
pub(crate) mod overlay;
pub(crate) mod query;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use mdeck_core::QueryRequest;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Dispatch exactly one diagnostic request to the backend.
    /// The completion message must carry `generation` back.
    SubmitQuery {
        generation: u64,
        request: QueryRequest,
    },

    /// Open a document URL in the platform viewer
    OpenDocument { url: String },
}

/// Result of processing a message: an optional follow-up message and/or an
/// action for the event loop.
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
