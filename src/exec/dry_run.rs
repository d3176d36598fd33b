// src/exec/dry_run.rs

use tracing::info;

use crate::exec::backend::{StepBackend, StepFuture};
use crate::types::StepOutcome;

/// Backend for `--dry-run`: prints each step and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunBackend;

impl StepBackend for DryRunBackend {
    fn run_step<'a>(&'a mut self, project: &'a str, step: &'a str) -> StepFuture<'a> {
        Box::pin(async move {
            info!(project, step, "dry-run; not executing");
            println!("would run: {step}");
            Ok(StepOutcome::Success)
        })
    }
}
