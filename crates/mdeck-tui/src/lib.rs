//! mdeck-tui - Terminal presentation layer for MaintDeck
//!
//! Organized into focused submodules:
//!
//! - `runner`: Main entry point and event loop
//! - `process`: Message processing and action dispatch
//! - `event`: Terminal event polling and key translation
//! - `layout`: Screen layout calculation
//! - `render`: Frame rendering
//! - `terminal`: Terminal setup/restore
//! - `theme`: Palette, icons, and style builders
//! - `widgets`: UI components

pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main entry point
pub use runner::run;
