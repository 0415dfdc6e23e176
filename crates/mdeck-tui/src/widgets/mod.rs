//! UI components.
//!
//! One struct per widget, each implementing `Widget` over borrowed state.
//! Widgets only read; all display rules they depend on are computed in
//! `mdeck_app::report_view`.

pub mod composer;
pub mod context_form;
pub mod header;
pub mod modal_overlay;
pub mod panels;
pub mod report;
pub mod source_modal;
pub mod sources;
pub mod status_bar;

pub use composer::Composer;
pub use context_form::ContextFormPanel;
pub use header::MainHeader;
pub use panels::HeaderPanelOverlay;
pub use report::ReportPanel;
pub use source_modal::SourceModal;
pub use sources::SourcesPanel;
pub use status_bar::StatusBar;
