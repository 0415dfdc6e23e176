//! Pure transform from a diagnostic report to render-ready values.
//!
//! Recomputed from scratch for every report; holds no state of its own and
//! never mutates the underlying payload. The widgets consume these values
//! verbatim, so every display rule lives here where it is testable:
//!
//! - gauge geometry along a fixed sweep, two-bucket color classification
//! - cause bars colored strictly by rank (payload index), never by value
//! - step rows with a total icon classification
//! - display-only excerpt clamping

use std::borrow::Cow;

use mdeck_core::{clamp_unit, DiagnosticReport, StepKind};

/// Fixed sweep length of the confidence gauge, in arc units.
pub const GAUGE_SWEEP: f64 = 175.0;

/// Confidence score above which the gauge uses the confident color.
pub const CONFIDENT_THRESHOLD: f64 = 0.8;

/// Unfilled arc length for a score: `sweep - sweep * score`.
///
/// Monotonically decreasing over [0, 1]; 0 maps to the full sweep (empty
/// arc) and 1 maps to 0 (full arc). Input is clamped.
pub fn gauge_offset(score: f64) -> f64 {
    GAUGE_SWEEP - GAUGE_SWEEP * clamp_unit(score)
}

/// Two-bucket gauge color classification. Discrete, not interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBucket {
    /// score > 0.8
    Confident,
    /// everything else
    Tentative,
}

/// Render-ready confidence gauge values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeView {
    /// Clamped score in [0, 1].
    pub ratio: f64,
    /// Rounded percentage label.
    pub percent: u16,
    /// Unfilled arc length along [`GAUGE_SWEEP`].
    pub offset: f64,
    pub bucket: ConfidenceBucket,
}

impl GaugeView {
    pub fn from_score(score: f64) -> Self {
        let ratio = clamp_unit(score);
        Self {
            ratio,
            percent: (ratio * 100.0).round() as u16,
            offset: gauge_offset(ratio),
            bucket: if ratio > CONFIDENT_THRESHOLD {
                ConfidenceBucket::Confident
            } else {
                ConfidenceBucket::Tentative
            },
        }
    }
}

/// Severity bucket of a cause bar, assigned by rank alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CauseSeverity {
    High,
    Medium,
    Low,
}

impl CauseSeverity {
    /// Index 0 is the backend's top-ranked cause, index 1 the runner-up,
    /// everything after that is low. The probability value plays no part.
    pub fn for_rank(index: usize) -> CauseSeverity {
        match index {
            0 => CauseSeverity::High,
            1 => CauseSeverity::Medium,
            _ => CauseSeverity::Low,
        }
    }
}

/// One probable-cause bar.
#[derive(Debug, Clone, PartialEq)]
pub struct CauseBar<'a> {
    pub label: &'a str,
    /// Clamped probability in [0, 1]; the bar's fill fraction.
    pub ratio: f64,
    /// Rounded percentage label.
    pub percent: u16,
    pub severity: CauseSeverity,
}

/// One row of the action-plan timeline, in payload order.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRow<'a> {
    /// Display label only; payload order decides position.
    pub step_id: i64,
    pub kind: StepKind,
    pub instruction: &'a str,
}

/// Render-ready view of a diagnostic report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView<'a> {
    pub summary: &'a str,
    pub gauge: GaugeView,
    pub causes: Vec<CauseBar<'a>>,
    pub steps: Vec<StepRow<'a>>,
    pub warnings: &'a [String],
    pub historical_count: u64,
}

impl<'a> ReportView<'a> {
    /// Build the view. Empty payload sequences produce empty sections.
    pub fn build(report: &'a DiagnosticReport) -> Self {
        let causes = report
            .possible_causes
            .iter()
            .enumerate()
            .map(|(index, cause)| {
                let ratio = clamp_unit(cause.probability);
                CauseBar {
                    label: cause.cause.as_str(),
                    ratio,
                    percent: (ratio * 100.0).round() as u16,
                    severity: CauseSeverity::for_rank(index),
                }
            })
            .collect();

        let steps = report
            .diagnostic_steps
            .iter()
            .map(|step| StepRow {
                step_id: step.step_id,
                kind: step.kind(),
                instruction: step.instruction.as_str(),
            })
            .collect();

        Self {
            summary: report.issue_summary.as_str(),
            gauge: GaugeView::from_score(report.confidence_score),
            causes,
            steps,
            warnings: &report.safety_warnings,
            historical_count: report.historical_count,
        }
    }
}

/// Clamp an excerpt to at most `max_lines` lines for display.
///
/// Returns the original borrowed when it already fits; the underlying data
/// is never mutated.
pub fn truncate_excerpt(excerpt: &str, max_lines: usize) -> Cow<'_, str> {
    let line_count = excerpt.lines().count();
    if line_count <= max_lines {
        return Cow::Borrowed(excerpt);
    }

    let mut clamped = excerpt
        .lines()
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n");
    clamped.push('…');
    Cow::Owned(clamped)
}
