//! # mdeck-core - Core Domain Types
//!
//! Foundation crate for MaintDeck. Provides the machine-context and
//! diagnostic-report domain types, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`MachineKind`] - Machine category (Motor, CNC Machine, ...)
//! - [`MachineContext`] - The structured machine attributes sent with every query
//! - [`QueryRequest`] - Wire shape of an outbound diagnostic query
//!
//! ### Diagnostic Report (`report`)
//! - [`DiagnosticReport`] - The backend's diagnostic payload, decoded tolerantly
//! - [`ProbableCause`], [`DiagnosticStep`], [`KnowledgeSource`]
//! - [`StepKind`] - Case-insensitive classification of a step's type string
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mdeck_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod report;
pub mod types;

/// Prelude for common imports used throughout all MaintDeck crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use report::{
    clamp_unit, DiagnosticReport, DiagnosticStep, KnowledgeSource, ProbableCause, StepKind,
};
pub use types::{MachineContext, MachineKind, QueryRequest};
