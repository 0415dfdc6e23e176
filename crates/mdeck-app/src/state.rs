//! Application state (Model in TEA pattern)
//!
//! `AppState` is the single source of truth for machine context, the request
//! lifecycle, and overlay/modal selection. All mutation goes through the
//! handlers; the TUI only reads.

use mdeck_core::{DiagnosticReport, KnowledgeSource, MachineContext, MachineKind, QueryRequest};

use crate::config::Settings;

/// Symptoms offered as quick actions, in display order.
pub const QUICK_SYMPTOMS: [&str; 4] = ["Overheating", "Vibration", "Unusual Noise", "Power Loss"];

/// The fixed phrase a quick action submits.
pub fn quick_phrase(symptom: &str) -> String {
    format!("{symptom} issue detected")
}

/// Request lifecycle of the current diagnostic session.
///
/// The last good report lives outside this enum (`AppState::report`) so a
/// failure overlays an error notice without collapsing the report view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryPhase {
    /// No query submitted yet.
    #[default]
    Idle,

    /// Exactly one request is in flight; further submissions are rejected.
    Loading,

    /// The last submission failed. Terminal for that submission; the
    /// operator must resubmit.
    Failed(String),

    /// The last submission produced the report in `AppState::report`.
    Ready,
}

/// Header-anchored overlay panels. At most one is open at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPanel {
    Notifications,
    Help,
    Settings,
}

/// Which region owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    ContextForm,
    Composer,
    Sources,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::ContextForm => Focus::Composer,
            Focus::Composer => Focus::Sources,
            Focus::Sources => Focus::ContextForm,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::ContextForm => Focus::Sources,
            Focus::Composer => Focus::ContextForm,
            Focus::Sources => Focus::Composer,
        }
    }
}

/// Editable fields of the machine context form, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextField {
    #[default]
    Kind,
    Model,
    AgeYears,
    OperatingHours,
}

impl ContextField {
    pub fn next(&self) -> ContextField {
        match self {
            ContextField::Kind => ContextField::Model,
            ContextField::Model => ContextField::AgeYears,
            ContextField::AgeYears => ContextField::OperatingHours,
            ContextField::OperatingHours => ContextField::Kind,
        }
    }

    pub fn prev(&self) -> ContextField {
        match self {
            ContextField::Kind => ContextField::OperatingHours,
            ContextField::Model => ContextField::Kind,
            ContextField::AgeYears => ContextField::Model,
            ContextField::OperatingHours => ContextField::AgeYears,
        }
    }
}

/// Raw editable buffers for the machine context form.
///
/// Numeric buffers are validated with a float parse on commit; an invalid
/// buffer flags the field and the previous valid value stays in the session
/// context (an invalid number is never forwarded into a request payload).
#[derive(Debug, Clone)]
pub struct ContextFormState {
    /// Field currently holding the form cursor.
    pub field: ContextField,

    pub model: String,
    pub age_years: String,
    pub operating_hours: String,

    pub age_invalid: bool,
    pub hours_invalid: bool,
}

impl ContextFormState {
    fn from_context(context: &MachineContext) -> Self {
        Self {
            field: ContextField::default(),
            model: context.model.clone(),
            age_years: format_number(context.age_years),
            operating_hours: format_number(context.operating_hours),
            age_invalid: false,
            hours_invalid: false,
        }
    }
}

/// Render whole numbers without a trailing ".0" so buffers round-trip cleanly.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Free-text input plus quick-action chip selection.
#[derive(Debug, Clone, Default)]
pub struct ComposerState {
    /// Free-text symptom description.
    pub input: String,

    /// Selected quick-action chip (index into [`QUICK_SYMPTOMS`]).
    pub quick_cursor: usize,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,

    /// Current machine context; a full copy accompanies every query.
    pub machine_context: MachineContext,

    pub context_form: ContextFormState,
    pub composer: ComposerState,

    /// Request lifecycle. See [`QueryPhase`].
    pub phase: QueryPhase,

    /// Last good diagnostic report. Survives failed submissions.
    pub report: Option<DiagnosticReport>,

    /// Submission counter. Completion messages carry the generation they
    /// belong to; anything stale is dropped so a response can never attach
    /// to the wrong request.
    pub generation: u64,

    /// Open overlay panel, if any. Single-selection: toggling the open panel
    /// closes it, toggling another switches.
    pub active_panel: Option<HeaderPanel>,

    /// Source selected into the viewer modal, independent of `active_panel`.
    /// Index into the current report's `knowledge_sources`.
    pub selected_source: Option<usize>,

    /// Cursor position in the source list.
    pub source_cursor: usize,

    /// Result of the startup health probe. `None` until the probe lands.
    pub backend_online: Option<bool>,

    /// Transient operator notice (e.g. "source has no linked document").
    pub notice: Option<String>,

    /// Animation frame for the loading spinner, advanced on Tick.
    pub spinner_frame: u8,

    pub focus: Focus,

    quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let machine_context = MachineContext::default();
        Self {
            settings,
            context_form: ContextFormState::from_context(&machine_context),
            machine_context,
            composer: ComposerState::default(),
            phase: QueryPhase::default(),
            report: None,
            generation: 0,
            active_panel: None,
            selected_source: None,
            source_cursor: 0,
            backend_online: None,
            notice: None,
            spinner_frame: 0,
            focus: Focus::default(),
            quit: false,
        }
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_loading(&self) -> bool {
        self.phase == QueryPhase::Loading
    }

    /// Merge a new machine kind into the context. No network effect.
    pub fn set_machine_kind(&mut self, kind: MachineKind) {
        self.machine_context.machine_kind = kind;
    }

    // ─────────────────────────────────────────────────────────
    // Request lifecycle
    // ─────────────────────────────────────────────────────────

    /// Begin a submission if the guards allow it.
    ///
    /// Guards: trimmed text must be non-empty, and no request may already be
    /// in flight. The guard lives here, not only in the composer's disabled
    /// state, so a bypassing caller still cannot issue concurrent requests.
    ///
    /// Returns the request to dispatch, tagged with the new generation.
    pub fn begin_query(&mut self, text: &str) -> Option<(u64, QueryRequest)> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_loading() {
            return None;
        }

        self.generation += 1;
        self.phase = QueryPhase::Loading;
        self.notice = None;

        Some((
            self.generation,
            QueryRequest {
                query: trimmed.to_string(),
                machine_context: self.machine_context.clone(),
            },
        ))
    }

    /// Record a successful response, unless it is stale.
    pub fn complete_query(&mut self, generation: u64, report: DiagnosticReport) {
        if generation != self.generation {
            tracing::debug!("dropping stale response (gen {generation} != {})", self.generation);
            return;
        }
        self.phase = QueryPhase::Ready;
        self.selected_source = None;
        self.source_cursor = 0;
        self.report = Some(report);
    }

    /// Record a failed submission, unless it is stale.
    ///
    /// The last good report is deliberately kept: the error notice overlays
    /// it instead of collapsing the report view.
    pub fn fail_query(&mut self, generation: u64, message: String) {
        if generation != self.generation {
            tracing::debug!("dropping stale failure (gen {generation} != {})", self.generation);
            return;
        }
        self.phase = QueryPhase::Failed(message);
    }

    // ─────────────────────────────────────────────────────────
    // Overlay panels and source modal
    // ─────────────────────────────────────────────────────────

    /// Toggle a header panel: same panel closes, different panel switches.
    pub fn toggle_panel(&mut self, panel: HeaderPanel) {
        self.active_panel = if self.active_panel == Some(panel) {
            None
        } else {
            Some(panel)
        };
    }

    /// Knowledge sources of the current report (empty before the first one).
    pub fn sources(&self) -> &[KnowledgeSource] {
        self.report
            .as_ref()
            .map(|r| r.knowledge_sources.as_slice())
            .unwrap_or(&[])
    }

    /// Select a source into the viewer modal. Out-of-range indices are
    /// ignored. Panel state is untouched.
    pub fn select_source(&mut self, index: usize) {
        if index < self.sources().len() {
            self.selected_source = Some(index);
        }
    }

    pub fn clear_source(&mut self) {
        self.selected_source = None;
    }

    /// The source currently open in the viewer modal.
    pub fn viewed_source(&self) -> Option<&KnowledgeSource> {
        self.selected_source.and_then(|idx| self.sources().get(idx))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
