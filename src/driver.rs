// src/driver.rs

//! The release driver: create an executor, append the steps, run once.

use tracing::{debug, info};

use crate::errors::Result;
use crate::executor::{Collaborator, ReleaseExecutor};
use crate::types::RunReport;

pub const DEFAULT_PROJECT: &str = "apibuilder-commons";
pub const DEFAULT_STEPS: [&str; 2] = ["dev tag", "sbt +publish"];

/// A project name and the steps to run for it, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub project: String,
    pub steps: Vec<String>,
}

impl Default for ReleasePlan {
    fn default() -> Self {
        release_plan()
    }
}

/// The built-in plan: tag, then cross-publish `apibuilder-commons`.
pub fn release_plan() -> ReleasePlan {
    ReleasePlan {
        project: DEFAULT_PROJECT.to_string(),
        steps: DEFAULT_STEPS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Build an executor for `plan.project`, append `plan.steps` in order and
/// run it exactly once.
pub async fn drive<C: Collaborator>(collaborator: &C, plan: &ReleasePlan) -> Result<RunReport> {
    info!(project = %plan.project, steps = plan.steps.len(), "preparing release");

    let mut executor = collaborator.create(&plan.project);
    for step in &plan.steps {
        debug!(step = %step, "adding release step");
        executor = executor.add(step);
    }

    executor.run().await
}
