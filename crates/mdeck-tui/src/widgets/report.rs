//! Diagnostic report panel (center column).
//!
//! Renders the render-ready values from `mdeck_app::report_view` verbatim:
//! confidence gauge, ranked cause bars, the action-plan timeline, safety
//! warnings, and the historical-case count. A failed submission shows an
//! error banner above the last good report instead of collapsing it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mdeck_app::report_view::{CauseBar, GaugeView, ReportView, StepRow, GAUGE_SWEEP};
use mdeck_app::{AppState, QueryPhase};

use crate::theme::{icons, styles};

/// Cell width of the confidence gauge bar.
const GAUGE_WIDTH: usize = 32;

/// Cell width of a cause bar.
const CAUSE_BAR_WIDTH: usize = 18;

pub struct ReportPanel<'a> {
    state: &'a AppState,
}

impl<'a> ReportPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for ReportPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(" Diagnosis ", false);

        let mut lines: Vec<Line> = Vec::new();

        if let QueryPhase::Failed(message) = &self.state.phase {
            lines.push(Line::from(Span::styled(
                format!("{} {message}", icons::ICON_CROSS),
                styles::status_red().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
        }

        match &self.state.report {
            Some(report) => {
                let view = ReportView::build(report);
                push_report_lines(&mut lines, &view);
            }
            None => {
                if lines.is_empty() {
                    lines.push(Line::from(Span::styled(
                        "Submit a symptom to run a diagnosis.",
                        styles::text_muted(),
                    )));
                }
            }
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

fn push_report_lines<'a>(lines: &mut Vec<Line<'a>>, view: &ReportView<'a>) {
    lines.push(Line::from(Span::styled(
        view.summary,
        styles::text_primary().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    lines.push(gauge_line(&view.gauge));
    lines.push(Line::default());

    if !view.causes.is_empty() {
        lines.push(section_title("Probable causes"));
        for cause in &view.causes {
            lines.push(cause_line(cause));
        }
        lines.push(Line::default());
    }

    if !view.steps.is_empty() {
        lines.push(section_title("Action plan"));
        for step in &view.steps {
            lines.push(step_line(step));
        }
        lines.push(Line::default());
    }

    if !view.warnings.is_empty() {
        lines.push(section_title("Safety warnings"));
        for warning in view.warnings {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", icons::ICON_ALERT), styles::status_red()),
                Span::styled(warning.as_str(), styles::text_primary()),
            ]));
        }
        lines.push(Line::default());
    }

    if view.historical_count > 0 {
        lines.push(Line::from(Span::styled(
            format!("Seen in {} similar cases", view.historical_count),
            styles::text_muted(),
        )));
    }
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        styles::text_secondary().add_modifier(Modifier::BOLD),
    ))
}

/// Confidence gauge as a horizontal bar. The fill is derived from the arc
/// offset along the fixed sweep, so the bar and the offset always agree.
fn gauge_line(gauge: &GaugeView) -> Line<'static> {
    let filled_fraction = (GAUGE_SWEEP - gauge.offset) / GAUGE_SWEEP;
    let filled = (filled_fraction * GAUGE_WIDTH as f64).round() as usize;
    let bucket_label = match gauge.bucket {
        mdeck_app::report_view::ConfidenceBucket::Confident => "Confident",
        mdeck_app::report_view::ConfidenceBucket::Tentative => "Tentative",
    };

    Line::from(vec![
        Span::styled(bar_text(filled, GAUGE_WIDTH), styles::gauge_style(gauge.bucket)),
        Span::styled(
            format!(" {}% {bucket_label}", gauge.percent),
            styles::gauge_style(gauge.bucket),
        ),
    ])
}

fn cause_line(cause: &CauseBar<'_>) -> Line<'static> {
    let filled = (cause.ratio * CAUSE_BAR_WIDTH as f64).round() as usize;
    Line::from(vec![
        Span::styled(
            bar_text(filled, CAUSE_BAR_WIDTH),
            styles::severity_style(cause.severity),
        ),
        Span::styled(format!(" {:>3}% ", cause.percent), styles::text_secondary()),
        Span::styled(cause.label.to_string(), styles::text_primary()),
    ])
}

fn step_line(step: &StepRow<'_>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>2}. ", step.step_id), styles::text_muted()),
        Span::styled(format!("{} ", icons::step_icon(step.kind)), styles::accent()),
        Span::styled(format!("{:<10} ", step.kind.label()), styles::text_secondary()),
        Span::styled(step.instruction.to_string(), styles::text_primary()),
    ])
}

fn bar_text(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mdeck_core::{DiagnosticReport, DiagnosticStep, ProbableCause};

    fn sample_report() -> DiagnosticReport {
        DiagnosticReport {
            issue_summary: "Probable bearing wear in the drive end".to_string(),
            confidence_score: 0.92,
            possible_causes: vec![
                ProbableCause {
                    cause: "Bearing wear".to_string(),
                    probability: 0.7,
                },
                ProbableCause {
                    cause: "Misalignment".to_string(),
                    probability: 0.2,
                },
            ],
            diagnostic_steps: vec![DiagnosticStep {
                step_id: 1,
                step_type: "safety".to_string(),
                instruction: "Lock out power before inspection".to_string(),
            }],
            safety_warnings: vec!["Housing may be hot".to_string()],
            historical_count: 12,
            ..Default::default()
        }
    }

    fn state_with_report() -> AppState {
        let mut state = AppState::new();
        let (generation, _) = state.begin_query("q").unwrap();
        state.complete_query(generation, sample_report());
        state
    }

    #[test]
    fn test_empty_state_shows_placeholder() {
        let mut term = TestTerminal::new();
        let state = AppState::new();

        term.render_widget(ReportPanel::new(&state), term.area());

        assert!(term.buffer_contains("Submit a symptom"));
    }

    #[test]
    fn test_report_renders_all_sections() {
        let mut term = TestTerminal::new();
        let state = state_with_report();

        term.render_widget(ReportPanel::new(&state), term.area());

        assert!(term.buffer_contains("Probable bearing wear"));
        assert!(term.buffer_contains("92% Confident"));
        assert!(term.buffer_contains("70% Bearing wear"));
        assert!(term.buffer_contains("Lock out power"));
        assert!(term.buffer_contains("Housing may be hot"));
        assert!(term.buffer_contains("Seen in 12 similar cases"));
    }

    #[test]
    fn test_failed_query_banners_over_last_report()  {
        let mut term = TestTerminal::new();
        let mut state = state_with_report();
        let (generation, _) = state.begin_query("again").unwrap();
        state.fail_query(generation, "Failed to get a response".to_string());

        term.render_widget(ReportPanel::new(&state), term.area());

        assert!(term.buffer_contains("Failed to get a response"));
        // Last good report still on screen.
        assert!(term.buffer_contains("Probable bearing wear"));
    }

    #[test]
    fn test_gauge_line_fill_matches_offset() {
        let gauge = GaugeView::from_score(0.5);
        let line = gauge_line(&gauge);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text.matches('█').count(), GAUGE_WIDTH / 2);
        assert!(text.contains("50% Tentative"));
    }

    #[test]
    fn test_bar_text_clamps_overflow() {
        assert_eq!(bar_text(10, 4), "████");
        assert_eq!(bar_text(0, 4), "░░░░");
    }
}
