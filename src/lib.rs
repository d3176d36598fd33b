// src/lib.rs

pub mod cli;
pub mod config;
pub mod driver;
pub mod errors;
pub mod exec;
pub mod executor;
pub mod logging;
pub mod types;

use anyhow::Result;
use tracing::{error, info};

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::driver::{ReleasePlan, drive, release_plan};
use crate::exec::{DryRunBackend, ShellBackend};
use crate::executor::LocalCollaborator;
use crate::types::RunReport;

/// High-level entry point used by `main.rs`.
///
/// Resolves the plan (built-in unless `--config` is given), picks the
/// backend and runs the driver. Returns the run report; the caller turns
/// it into an exit status.
pub async fn run(args: CliArgs) -> Result<RunReport> {
    let (plan, env) = match args.config {
        Some(ref path) => {
            let cfg = load_and_validate(path)?;
            info!(path = %path.display(), project = cfg.project(), "using release plan from file");
            (cfg.plan(), cfg.env().clone())
        }
        None => (release_plan(), Default::default()),
    };

    let report = if args.dry_run {
        print_dry_run(&plan);
        drive(&LocalCollaborator::new(DryRunBackend), &plan).await?
    } else {
        let mut backend = ShellBackend::new();
        if let Some(ref dir) = args.dir {
            backend = backend.working_dir(dir);
        }
        for (k, v) in env {
            backend = backend.env(k, v);
        }
        drive(&LocalCollaborator::new(backend), &plan).await?
    };

    log_summary(&report);
    Ok(report)
}

/// Header for `--dry-run`; `DryRunBackend` lists the steps as they are reached.
fn print_dry_run(plan: &ReleasePlan) {
    println!(
        "release dry-run: {} ({} steps)",
        plan.project,
        plan.steps.len()
    );
}

fn log_summary(report: &RunReport) {
    match report.failed_step() {
        None => info!(
            project = %report.project,
            steps = report.steps.len(),
            "release finished"
        ),
        Some(failed) => error!(
            project = %report.project,
            step = %failed.step,
            outcome = %failed.outcome,
            "release failed"
        ),
    }
}
