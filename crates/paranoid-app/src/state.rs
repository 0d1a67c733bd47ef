//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use paranoid_core::{AnalysisResult, ContractAnalyzer, MockAnalyzer};

use crate::config::{Settings, StartPage};
use crate::intake::IntakeState;
use crate::navigator::{Navigator, Page, Transition};
use crate::report_view::ReportViewState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Transient message shown in the footer until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Active page and last report
    pub navigator: Navigator,

    /// Analyze page component
    pub intake: IntakeState,

    /// Results page selection/expansion
    pub report_view: ReportViewState,

    /// Settings from config file
    pub settings: Settings,

    pub notice: Option<Notice>,

    pub phase: AppPhase,

    /// Analyzer invoked when the progress timer elapses
    pub analyzer: Box<dyn ContractAnalyzer>,

    /// Spinner frame, advanced on every tick
    pub animation_frame: u64,

    /// Last issued analysis run id
    last_run_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// State opening on the configured start page
    pub fn with_settings(settings: Settings) -> Self {
        let start = match settings.behavior.start_page {
            StartPage::Landing => Page::Landing,
            StartPage::Analyze => Page::Analyze,
        };

        Self {
            navigator: Navigator::starting_at(start),
            intake: IntakeState::new(),
            report_view: ReportViewState::new(),
            settings,
            notice: None,
            phase: AppPhase::Running,
            analyzer: Box::new(MockAnalyzer),
            animation_frame: 0,
            last_run_id: 0,
        }
    }

    /// State opening on Analyze with `text` in the buffer
    pub fn with_contract(settings: Settings, text: impl Into<String>) -> Self {
        let mut state = Self::with_settings(settings);
        state.navigator.go_to(Page::Analyze);
        state.intake.set_text(text);
        state
    }

    pub fn current_page(&self) -> Page {
        self.navigator.current_page()
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.navigator.last_result()
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Switch page and tear down the page being left.
    ///
    /// Returns the id of the analysis run cancelled by leaving Analyze.
    pub fn navigate(&mut self, page: Page) -> Option<u64> {
        let transition = self.navigator.go_to(page);
        self.tear_down(transition)
    }

    /// Store a finished report and show it.
    pub fn complete_analysis(&mut self, result: AnalysisResult) {
        let transition = self.navigator.complete_analysis(result);
        self.tear_down(transition);
        self.report_view.reset();
    }

    fn tear_down(&mut self, transition: Transition) -> Option<u64> {
        let mut cancelled = None;

        if transition.leaves(Page::Analyze) {
            if self.intake.is_running() {
                cancelled = self.intake.progress.run_id();
            }
            self.intake.reset();
        }

        if transition.leaves(Page::Results) {
            self.report_view.reset();
        }

        cancelled
    }

    // ─────────────────────────────────────────────────────────
    // Analysis Runs
    // ─────────────────────────────────────────────────────────

    /// Start a run on the intake, returning its id.
    pub fn begin_analysis(&mut self) -> u64 {
        self.last_run_id += 1;
        self.intake.progress.start(self.last_run_id);
        self.last_run_id
    }

    // ─────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::new(message, self.settings.ui.notice_duration()));
    }

    pub fn notice_text(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.message.as_str())
    }

    /// Drop the notice if it expired at `now`
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.expire_notice(Instant::now());
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
