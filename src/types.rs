// src/types.rs

use std::fmt;
use std::time::Duration;

/// How a single release step finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Success,
    /// Non-zero exit code, or `-1` when the process could not be spawned or
    /// was terminated by a signal.
    Failed(i32),
}

impl StepOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, StepOutcome::Success)
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Success => write!(f, "ok"),
            StepOutcome::Failed(code) => write!(f, "failed (exit code {code})"),
        }
    }
}

/// Record of one step that was started by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: String,
    pub outcome: StepOutcome,
    pub elapsed: Duration,
}

/// Result of running an executor to completion (or to its first failure).
///
/// `steps` only contains steps that were actually started; steps after a
/// failure are never run and therefore never reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub project: String,
    pub steps: Vec<StepReport>,
}

impl RunReport {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            steps: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.steps.iter().all(|s| s.outcome.is_success())
    }

    /// The step that stopped the run, if any.
    pub fn failed_step(&self) -> Option<&StepReport> {
        self.steps.iter().find(|s| !s.outcome.is_success())
    }

    /// Process exit status for this run.
    ///
    /// `0` on success; otherwise the failing step's exit code, or `1` when
    /// that code cannot be used as a process status.
    pub fn exit_code(&self) -> i32 {
        match self.failed_step().map(|s| s.outcome) {
            None | Some(StepOutcome::Success) => 0,
            Some(StepOutcome::Failed(code)) if code > 0 && code < 256 => code,
            Some(StepOutcome::Failed(_)) => 1,
        }
    }
}
