//! Full-frame rendering tests for `view`.

use mdeck_app::{update, AppState, Focus, InputKey, Message};
use mdeck_core::{DiagnosticReport, KnowledgeSource, ProbableCause};

use crate::test_utils::TestTerminal;

use super::view;

fn sample_report() -> DiagnosticReport {
    DiagnosticReport {
        issue_summary: "Probable bearing wear".to_string(),
        confidence_score: 0.92,
        possible_causes: vec![ProbableCause {
            cause: "Bearing wear".to_string(),
            probability: 0.7,
        }],
        knowledge_sources: vec![KnowledgeSource {
            title: "Motor Manual".to_string(),
            kind: "Technical Manual".to_string(),
            excerpt: "Inspect bearings.".to_string(),
            page: None,
            source_id: None,
            file_url: Some("manuals/m3aa.pdf".to_string()),
        }],
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
fn test_initial_frame_renders_all_regions() {
    let mut term = TestTerminal::new();
    let state = AppState::new();

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("MaintDeck"));
    assert!(term.buffer_contains("Machine Context"));
    assert!(term.buffer_contains("Diagnosis"));
    assert!(term.buffer_contains("Query"));
    assert!(term.buffer_contains("Sources (0)"));
    assert!(term.buffer_contains("Ready for query"));
}

#[test]
fn test_report_frame_shows_gauge_and_sources() {
    let mut term = TestTerminal::new();
    let state = state_with_report();

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("92% Confident"));
    assert!(term.buffer_contains("Motor Manual"));
    assert!(term.buffer_contains("Report ready"));
}

#[test]
fn test_panel_overlay_draws_over_body() {
    let mut term = TestTerminal::new();
    let mut state = AppState::new();
    update(&mut state, Message::Key(InputKey::CharCtrl('h')));

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Help"));
    assert!(term.buffer_contains("Cycle focus"));
}

#[test]
fn test_source_modal_draws_on_top() {
    let mut term = TestTerminal::new();
    let mut state = state_with_report();
    state.focus = Focus::Sources;
    update(&mut state, Message::Key(InputKey::Enter));
    assert!(state.viewed_source().is_some());

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Open document"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut term = TestTerminal::with_size(40, 12);
    let state = state_with_report();

    term.draw_with(|frame| view(frame, &state));
}
