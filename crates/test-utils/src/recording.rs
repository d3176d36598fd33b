use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use apibuilder_release::exec::{StepBackend, StepFuture};
use apibuilder_release::executor::{Collaborator, ReleaseExecutor, RunFuture};
use apibuilder_release::types::{RunReport, StepOutcome, StepReport};

/// One call made against the executor API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(String),
    Add(String),
    Run,
}

/// Mock collaborator that records every `create` / `add` / `run` call.
///
/// `run` reports every added step as successful without executing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingCollaborator {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

pub struct RecordingExecutor {
    project: String,
    steps: Vec<String>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Collaborator for RecordingCollaborator {
    type Executor = RecordingExecutor;

    fn create(&self, project: &str) -> RecordingExecutor {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Create(project.to_string()));
        RecordingExecutor {
            project: project.to_string(),
            steps: Vec::new(),
            calls: Arc::clone(&self.calls),
        }
    }
}

impl ReleaseExecutor for RecordingExecutor {
    fn add(mut self, step: &str) -> Self {
        self.calls.lock().unwrap().push(Call::Add(step.to_string()));
        self.steps.push(step.to_string());
        self
    }

    fn run(self) -> RunFuture {
        self.calls.lock().unwrap().push(Call::Run);
        let mut report = RunReport::new(self.project);
        report.steps = self
            .steps
            .into_iter()
            .map(|step| StepReport {
                step,
                outcome: StepOutcome::Success,
                elapsed: Duration::ZERO,
            })
            .collect();
        Box::pin(async move { Ok(report) })
    }
}

/// Step backend that records `(project, step)` pairs and returns scripted
/// outcomes (success unless configured otherwise).
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    executed: Arc<Mutex<Vec<(String, String)>>>,
    outcomes: HashMap<String, StepOutcome>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `step` report `outcome` instead of success.
    pub fn with_outcome(mut self, step: &str, outcome: StepOutcome) -> Self {
        self.outcomes.insert(step.to_string(), outcome);
        self
    }

    /// Steps seen so far, in execution order.
    pub fn executed_steps(&self) -> Vec<String> {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .map(|(_, step)| step.clone())
            .collect()
    }

    pub fn executed(&self) -> Vec<(String, String)> {
        self.executed.lock().unwrap().clone()
    }
}

impl StepBackend for RecordingBackend {
    fn run_step<'a>(&'a mut self, project: &'a str, step: &'a str) -> StepFuture<'a> {
        Box::pin(async move {
            self.executed
                .lock()
                .unwrap()
                .push((project.to_string(), step.to_string()));
            Ok(self
                .outcomes
                .get(step)
                .copied()
                .unwrap_or(StepOutcome::Success))
        })
    }
}
