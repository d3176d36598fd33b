// src/exec/mod.rs

//! Step execution layer.
//!
//! The executor hands each step to a [`StepBackend`] and waits for its
//! [`StepOutcome`](crate::types::StepOutcome) before moving on.
//!
//! - [`backend`] defines the `StepBackend` trait.
//! - [`shell`] runs steps as shell command lines with `tokio::process`.
//! - [`dry_run`] only reports what would run.

pub mod backend;
pub mod dry_run;
pub mod shell;

pub use backend::{StepBackend, StepFuture};
pub use dry_run::DryRunBackend;
pub use shell::ShellBackend;
