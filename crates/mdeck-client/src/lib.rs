//! mdeck-client - Diagnostic backend HTTP client for MaintDeck
//!
//! Owns every network interaction of the client: the `POST /query` round
//! trip, the startup `GET /health` probe, and opening a knowledge source's
//! linked document. The rest of the application talks to the backend only
//! through the [`DiagnosticBackend`] trait so handlers stay testable without
//! a network.

pub mod backend;
pub mod docs;

pub use backend::{DiagnosticBackend, HttpBackend};
pub use docs::{doc_url, open_document};
