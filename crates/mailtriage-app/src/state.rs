//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use mailtriage_client::HealthStatus;
use mailtriage_core::AnalysisResult;

use crate::config::Settings;
use crate::history::HistoryStore;
use crate::input::InputController;
use crate::toast::Notifier;

/// How long the copy button shows its check mark
pub const COPY_INDICATOR_DURATION: Duration = Duration::from_secs(2);

/// Lines moved per scroll step in the result view
const SCROLL_STEP: u16 = 1;

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Panel receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    #[default]
    Input,
    Result,
    History,
}

impl FocusPane {
    /// Next pane in Tab order; the result pane is skipped while hidden
    pub fn next(self, result_visible: bool) -> Self {
        match self {
            FocusPane::Input if result_visible => FocusPane::Result,
            FocusPane::Input => FocusPane::History,
            FocusPane::Result => FocusPane::History,
            FocusPane::History => FocusPane::Input,
        }
    }

    /// Previous pane in Tab order; the result pane is skipped while hidden
    pub fn previous(self, result_visible: bool) -> Self {
        match self {
            FocusPane::Input => FocusPane::History,
            FocusPane::Result => FocusPane::Input,
            FocusPane::History if result_visible => FocusPane::Result,
            FocusPane::History => FocusPane::Input,
        }
    }
}

/// Whether a classification request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
}

/// Service reachability as last observed by the health check
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApiStatus {
    /// Not checked yet (or checks disabled)
    #[default]
    Unknown,
    Online(HealthStatus),
    Offline,
}

/// The displayed analysis
#[derive(Debug, Clone, Default)]
pub struct ResultView {
    result: Option<AnalysisResult>,
    visible: bool,
    pub scroll: u16,
    /// Furthest scroll offset for the last drawn layout
    max_scroll: Option<u16>,
    copied_at: Option<Instant>,
    /// Incremented on every display
    seq: u64,
}

impl ResultView {
    /// Show `result`, scrolled to the top
    pub fn display(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.visible = true;
        self.scroll = 0;
        self.max_scroll = None;
        self.copied_at = None;
        self.seq = self.seq.wrapping_add(1);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Hide and forget the displayed result
    pub fn clear(&mut self) {
        self.result = None;
        self.visible = false;
        self.scroll = 0;
        self.max_scroll = None;
        self.copied_at = None;
    }

    /// The result, only while visible
    pub fn current(&self) -> Option<&AnalysisResult> {
        self.result.as_ref().filter(|_| self.visible)
    }

    pub fn is_visible(&self) -> bool {
        self.visible && self.result.is_some()
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
    }

    /// Scroll towards the end, stopping at the last drawn layout's limit
    pub fn scroll_down(&mut self) {
        let next = self.scroll.saturating_add(SCROLL_STEP);
        self.scroll = match self.max_scroll {
            Some(max) => next.min(max),
            None => next,
        };
    }

    /// Record how many wrapped rows the result takes and how many fit
    pub fn update_content_size(&mut self, content_rows: u16, visible_rows: u16) {
        let max = content_rows.saturating_sub(visible_rows);
        self.max_scroll = Some(max);
        self.scroll = self.scroll.min(max);
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// True while the copy check mark should show
    pub fn is_copied(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Drop the check mark once its time is up
    pub fn expire_copied(&mut self, now: Instant) {
        if self
            .copied_at
            .is_some_and(|at| now.saturating_duration_since(at) >= COPY_INDICATOR_DURATION)
        {
            self.copied_at = None;
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Application settings from config file (plus CLI overrides)
    pub settings: Settings,

    pub focus: FocusPane,

    pub input: InputController,

    pub submission: SubmissionPhase,

    /// Reason the last submission failed, cleared on the next submit
    pub submission_error: Option<String>,

    pub result_view: ResultView,

    pub history: HistoryStore,

    /// Highlighted row in the history panel
    pub history_selected: usize,

    pub toast: Notifier,

    pub api_status: ApiStatus,

    /// Spinner frame, advanced on Tick while submitting
    pub loading_frame: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default settings and an in-memory history
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), HistoryStore::in_memory())
    }

    pub fn with_settings(settings: Settings, history: HistoryStore) -> Self {
        Self {
            phase: AppPhase::Running,
            settings,
            focus: FocusPane::Input,
            input: InputController::new(),
            submission: SubmissionPhase::Idle,
            submission_error: None,
            result_view: ResultView::default(),
            history,
            history_selected: 0,
            toast: Notifier::default(),
            api_status: ApiStatus::Unknown,
            loading_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionPhase::Submitting
    }

    /// Submit control state: input present and nothing in flight
    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting() && self.input.can_submit()
    }

    /// Id of the highlighted history row
    pub fn selected_history_id(&self) -> Option<i64> {
        self.history
            .entries()
            .get(self.history_selected)
            .map(|e| e.id)
    }

    /// Keep the history highlight inside the list
    pub fn clamp_history_selection(&mut self) {
        let len = self.history.len();
        if len == 0 {
            self.history_selected = 0;
        } else if self.history_selected >= len {
            self.history_selected = len - 1;
        }
    }

    /// Advance time-based state: spinner, toast and copy indicator
    pub fn tick(&mut self, now: Instant) {
        if self.is_submitting() {
            self.loading_frame = self.loading_frame.wrapping_add(1);
        }
        self.toast.expire(now);
        self.result_view.expire_copied(now);
    }
}
