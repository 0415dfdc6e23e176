//! Configuration file parsing for MaintDeck
//!
//! Supports `.mdeck/config.toml` in the working directory. Every field is
//! optional; loading never fails fatally.

pub mod settings;
pub mod types;

pub use settings::load_settings;
pub use types::{BackendSettings, Settings, UiSettings};
