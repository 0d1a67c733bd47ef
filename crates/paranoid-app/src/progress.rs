//! Simulated analysis progress
//!
//! The progress sequence is purely cosmetic: a timer task emits one label per
//! step on a fixed schedule, then signals that the total duration elapsed.
//! [`AnalysisProgress`] is the state machine the timer messages drive:
//!
//! ```text
//! Idle ──start──▶ Running { steps_emitted: 0..=6 } ──finish──▶ Done
//!   ▲                          │
//!   └──────────cancel──────────┘
//! ```

use std::time::Duration;

/// Labels shown while the mock analysis "runs", in emission order.
pub const ANALYSIS_STEPS: [&str; 6] = [
    "Parsing the document...",
    "Semantic analysis...",
    "Detecting risky clauses...",
    "Evaluating penalties...",
    "Computing the risk score...",
    "Generating recommendations...",
];

/// Number of progress steps in one run
pub const STEP_COUNT: usize = ANALYSIS_STEPS.len();

/// Timing of the progress timer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSchedule {
    /// Delay before each step label
    pub step_interval: Duration,
    /// Delay between start and result
    pub total_duration: Duration,
}

impl Default for ProgressSchedule {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(3000))
    }
}

impl ProgressSchedule {
    pub fn new(step_interval: Duration, total_duration: Duration) -> Self {
        Self {
            step_interval,
            total_duration,
        }
    }

    /// Time left after the last label before the result is produced.
    ///
    /// The result never precedes the last label, so a total shorter than
    /// all steps collapses to zero.
    pub fn settle_delay(&self) -> Duration {
        let steps_time = self.step_interval.saturating_mul(STEP_COUNT as u32);
        self.total_duration.saturating_sub(steps_time)
    }
}

/// Progress state machine for one intake component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisProgress {
    #[default]
    Idle,
    Running {
        run_id: u64,
        steps_emitted: usize,
    },
    Done {
        run_id: u64,
    },
}

impl AnalysisProgress {
    /// Enter `Running` for a fresh run.
    pub fn start(&mut self, run_id: u64) {
        *self = AnalysisProgress::Running {
            run_id,
            steps_emitted: 0,
        };
    }

    /// Record the emission of step `step` (0-based) for `run_id`.
    ///
    /// Returns false for stale, duplicate or out-of-order steps, which leave
    /// the state untouched.
    pub fn advance(&mut self, run_id: u64, step: usize) -> bool {
        match self {
            AnalysisProgress::Running {
                run_id: current,
                steps_emitted,
            } if *current == run_id && *steps_emitted == step && step < STEP_COUNT => {
                *steps_emitted += 1;
                true
            }
            _ => false,
        }
    }

    /// Move a running `run_id` to `Done`. Returns false if it was not running.
    pub fn finish(&mut self, run_id: u64) -> bool {
        match *self {
            AnalysisProgress::Running {
                run_id: current, ..
            } if current == run_id => {
                *self = AnalysisProgress::Done { run_id };
                true
            }
            _ => false,
        }
    }

    /// Drop back to `Idle`. Returns true if a run was in flight.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        *self = AnalysisProgress::Idle;
        was_running
    }

    pub fn is_running(&self) -> bool {
        matches!(self, AnalysisProgress::Running { .. })
    }

    pub fn run_id(&self) -> Option<u64> {
        match *self {
            AnalysisProgress::Idle => None,
            AnalysisProgress::Running { run_id, .. } | AnalysisProgress::Done { run_id } => {
                Some(run_id)
            }
        }
    }

    pub fn steps_emitted(&self) -> usize {
        match *self {
            AnalysisProgress::Idle => 0,
            AnalysisProgress::Running { steps_emitted, .. } => steps_emitted,
            AnalysisProgress::Done { .. } => STEP_COUNT,
        }
    }

    /// Completion percentage, `100 / 6` per emitted step.
    pub fn percent(&self) -> f64 {
        self.steps_emitted() as f64 * (100.0 / STEP_COUNT as f64)
    }

    /// Most recently emitted label
    pub fn current_label(&self) -> Option<&'static str> {
        self.steps_emitted()
            .checked_sub(1)
            .map(|index| ANALYSIS_STEPS[index])
    }

    /// Labels emitted so far, in order
    pub fn emitted_labels(&self) -> &'static [&'static str] {
        &ANALYSIS_STEPS[..self.steps_emitted()]
    }
}
