//! mdeck-app - Application state and orchestration for MaintDeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for session
//! state: the single source of truth for machine context, the request
//! lifecycle, overlay/modal selection, the pure report transform, and
//! configuration loading. It knows nothing about terminals; the TUI crate
//! feeds it [`Message`]s and renders [`AppState`].

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod report_view;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, ComposerState, ContextFormState, Focus, HeaderPanel, QueryPhase};
