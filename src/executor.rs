// src/executor.rs

//! The executor collaborator the release driver builds.
//!
//! An [`Executor`] is a project name plus an ordered list of steps. Steps are
//! appended with [`Executor::add`] and run once, in append order, by
//! [`Executor::run`]. The first failing step ends the run.
//!
//! The driver does not use `Executor` directly; it goes through the
//! [`Collaborator`] / [`ReleaseExecutor`] traits so tests can observe the
//! exact call sequence.

use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use tracing::{error, info, warn};

use crate::errors::Result;
use crate::exec::StepBackend;
use crate::types::{RunReport, StepReport};

pub type RunFuture = Pin<Box<dyn Future<Output = Result<RunReport>> + Send>>;

/// Factory side of the executor API.
pub trait Collaborator {
    type Executor: ReleaseExecutor;

    fn create(&self, project: &str) -> Self::Executor;
}

/// An executor value: appended to by `add`, consumed by `run`.
pub trait ReleaseExecutor: Sized {
    fn add(self, step: &str) -> Self;

    fn run(self) -> RunFuture;
}

/// Ordered release steps for one project, bound to a backend.
#[derive(Debug)]
pub struct Executor<B> {
    project: String,
    steps: Vec<String>,
    backend: B,
}

impl<B: StepBackend> Executor<B> {
    pub fn create(project: impl Into<String>, backend: B) -> Self {
        Self {
            project: project.into(),
            steps: Vec::new(),
            backend,
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Append a step; it runs after every step added before it.
    pub fn add(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Run all steps in order, stopping at the first failure.
    ///
    /// A failing step is reported in the returned [`RunReport`], not as an
    /// `Err`; `Err` only comes from the backend itself.
    pub async fn run(self) -> Result<RunReport> {
        let Executor {
            project,
            steps,
            mut backend,
        } = self;

        let mut report = RunReport::new(project.as_str());
        if steps.is_empty() {
            warn!(project = %project, "executor has no steps; nothing to run");
            return Ok(report);
        }

        let total = steps.len();
        for (i, step) in steps.iter().enumerate() {
            let index = i + 1;
            info!(project = %project, step = %step, index, total, "starting release step");

            let started = Instant::now();
            let outcome = backend.run_step(&project, step).await?;
            let elapsed = started.elapsed();

            report.steps.push(StepReport {
                step: step.clone(),
                outcome,
                elapsed,
            });

            if !outcome.is_success() {
                error!(
                    project = %project,
                    step = %step,
                    index,
                    %outcome,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "release step failed; skipping remaining steps"
                );
                return Ok(report);
            }

            info!(
                project = %project,
                step = %step,
                index,
                elapsed_ms = elapsed.as_millis() as u64,
                "release step finished"
            );
        }

        Ok(report)
    }
}

impl<B: StepBackend + 'static> ReleaseExecutor for Executor<B> {
    fn add(self, step: &str) -> Self {
        Executor::add(self, step)
    }

    fn run(self) -> RunFuture {
        Box::pin(Executor::run(self))
    }
}

/// Collaborator that hands every executor a clone of one backend.
#[derive(Debug, Clone)]
pub struct LocalCollaborator<B> {
    backend: B,
}

impl<B> LocalCollaborator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: StepBackend + Clone + 'static> Collaborator for LocalCollaborator<B> {
    type Executor = Executor<B>;

    fn create(&self, project: &str) -> Self::Executor {
        Executor::create(project, self.backend.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::{DryRunBackend, StepFuture};
    use crate::types::StepOutcome;

    struct Scripted {
        fail_on: Option<&'static str>,
    }

    impl StepBackend for Scripted {
        fn run_step<'a>(&'a mut self, _project: &'a str, step: &'a str) -> StepFuture<'a> {
            Box::pin(async move {
                Ok(match self.fail_on {
                    Some(f) if f == step => StepOutcome::Failed(2),
                    _ => StepOutcome::Success,
                })
            })
        }
    }

    #[test]
    fn add_appends_in_order() {
        let ex = Executor::create("apibuilder-commons", DryRunBackend)
            .add("dev tag")
            .add("sbt +publish");
        assert_eq!(ex.project(), "apibuilder-commons");
        assert_eq!(ex.steps(), ["dev tag", "sbt +publish"]);
    }

    #[tokio::test]
    async fn empty_executor_succeeds() {
        let report = Executor::create("p", DryRunBackend).run().await.unwrap();
        assert!(report.succeeded());
        assert!(report.steps.is_empty());
    }

    #[tokio::test]
    async fn failure_stops_the_run() {
        let backend = Scripted { fail_on: Some("b") };
        let report = Executor::create("p", backend)
            .add("a")
            .add("b")
            .add("c")
            .run()
            .await
            .unwrap();

        let started: Vec<_> = report.steps.iter().map(|s| s.step.as_str()).collect();
        assert_eq!(started, ["a", "b"]);
        assert_eq!(report.exit_code(), 2);
    }
}
