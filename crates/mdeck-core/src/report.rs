//! The backend's diagnostic report payload.
//!
//! The report is an untrusted external contract: every sequence defaults to
//! empty and a missing confidence score decodes as 0, so a partial payload
//! renders as empty sections instead of failing. [`DiagnosticReport::normalize`]
//! clamps out-of-range values at the boundary; nothing downstream re-validates.
//!
//! Ordering is significant and preserved verbatim: the position of a cause in
//! `possible_causes` IS its rank, and `diagnostic_steps` are displayed in
//! payload order (`step_id` is a display label, not a sort key).

use serde::{Deserialize, Serialize};

/// One probable cause with the backend's probability estimate.
///
/// Severity is derived from the cause's position in the payload, never from
/// the probability value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProbableCause {
    pub cause: String,
    #[serde(default)]
    pub probability: f64,
}

/// One step of the recommended action plan.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DiagnosticStep {
    pub step_id: i64,
    #[serde(default)]
    pub step_type: String,
    pub instruction: String,
}

impl DiagnosticStep {
    /// Classify this step's type string.
    pub fn kind(&self) -> StepKind {
        StepKind::parse(&self.step_type)
    }
}

/// Known step categories, plus a fallback for anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Safety,
    Inspection,
    Repair,
    Test,
    Report,
    Other,
}

impl StepKind {
    /// Case-insensitive classification. Total: unknown or empty strings map
    /// to [`StepKind::Other`].
    pub fn parse(raw: &str) -> StepKind {
        match raw.trim().to_ascii_lowercase().as_str() {
            "safety" => StepKind::Safety,
            "inspection" => StepKind::Inspection,
            "repair" => StepKind::Repair,
            "test" => StepKind::Test,
            "report" => StepKind::Report,
            _ => StepKind::Other,
        }
    }

    /// Display label for the step header ("Action" for unrecognized types,
    /// as the original report rendered them).
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Safety => "Safety",
            StepKind::Inspection => "Inspection",
            StepKind::Repair => "Repair",
            StepKind::Test => "Test",
            StepKind::Report => "Report",
            StepKind::Other => "Action",
        }
    }
}

/// A citation record backing a diagnostic claim.
///
/// Immutable once received; the session selects sources by index into the
/// report's `knowledge_sources`, never by cloning.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KnowledgeSource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub excerpt: String,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
}

/// Structured diagnostic payload returned by `POST /query`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct DiagnosticReport {
    #[serde(default)]
    pub issue_summary: String,

    /// Backend certainty in [0, 1]. Clamped by [`normalize`](Self::normalize).
    #[serde(default)]
    pub confidence_score: f64,

    /// Ranked causes; payload order is the rank.
    #[serde(default)]
    pub possible_causes: Vec<ProbableCause>,

    /// Ordered action-plan timeline; payload order is the display order.
    #[serde(default)]
    pub diagnostic_steps: Vec<DiagnosticStep>,

    #[serde(default)]
    pub safety_warnings: Vec<String>,

    #[serde(default)]
    pub knowledge_sources: Vec<KnowledgeSource>,

    /// Count of similar historical cases in the knowledge base.
    #[serde(default)]
    pub historical_count: u64,

    // The backend also sends corrective_actions / related_cases / sources;
    // they are accepted so decoding stays tolerant but have no dedicated
    // section in the UI (the step timeline covers remediation).
    #[serde(default)]
    pub corrective_actions: Vec<String>,

    #[serde(default)]
    pub related_cases: Vec<String>,
}

impl DiagnosticReport {
    /// Normalize untrusted fields in place.
    ///
    /// Clamps `confidence_score` and each cause probability into [0, 1]
    /// (non-finite values become 0). Order of causes and steps is preserved.
    pub fn normalize(mut self) -> Self {
        self.confidence_score = clamp_unit(self.confidence_score);
        for cause in &mut self.possible_causes {
            cause.probability = clamp_unit(cause.probability);
        }
        self
    }
}

/// Clamp into [0, 1], mapping NaN/infinite input to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
