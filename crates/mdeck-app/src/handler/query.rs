//! Query lifecycle completion handlers.
//!
//! Completions arrive from the network task over the message channel, tagged
//! with the generation of the submission they belong to; `AppState` drops
//! anything stale. Failures surface the fixed operator-facing message -- the
//! underlying reason is only logged.

use mdeck_core::error::QUERY_FAILED_NOTICE;
use mdeck_core::DiagnosticReport;

use crate::state::AppState;

use super::UpdateResult;

pub(crate) fn handle_completed(
    state: &mut AppState,
    generation: u64,
    report: DiagnosticReport,
) -> UpdateResult {
    tracing::info!(
        "query completed (gen {generation}): {} causes, {} steps, confidence {:.2}",
        report.possible_causes.len(),
        report.diagnostic_steps.len(),
        report.confidence_score,
    );
    state.complete_query(generation, report);
    UpdateResult::none()
}

pub(crate) fn handle_failed(
    state: &mut AppState,
    generation: u64,
    reason: String,
) -> UpdateResult {
    tracing::warn!("query failed (gen {generation}): {reason}");
    state.fail_query(generation, QUERY_FAILED_NOTICE.to_string());
    UpdateResult::none()
}
