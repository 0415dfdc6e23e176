//! Message types for the application (TEA pattern)

use mdeck_core::DiagnosticReport;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Query lifecycle completions (from the network task)
    // ─────────────────────────────────────────────────────────
    /// The in-flight query resolved with a report
    QueryCompleted {
        generation: u64,
        report: DiagnosticReport,
    },
    /// The in-flight query failed (transport, timeout, or backend status)
    QueryFailed { generation: u64, reason: String },

    // ─────────────────────────────────────────────────────────
    // Background probes
    // ─────────────────────────────────────────────────────────
    /// Startup health probe landed
    HealthProbed { online: bool },

    /// The document opener could not be spawned
    DocumentOpenFailed { reason: String },
}
