// src/exec/backend.rs

//! Pluggable step backend abstraction.
//!
//! The executor talks to a `StepBackend` instead of spawning processes
//! itself, so tests can swap in a backend that records steps and returns
//! scripted outcomes.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::types::StepOutcome;

pub type StepFuture<'a> = Pin<Box<dyn Future<Output = Result<StepOutcome>> + Send + 'a>>;

/// Trait abstracting how a single release step is executed.
///
/// A failing step is reported as `Ok(StepOutcome::Failed(_))`. `Err` is
/// reserved for problems of the backend itself.
pub trait StepBackend: Send {
    fn run_step<'a>(&'a mut self, project: &'a str, step: &'a str) -> StepFuture<'a>;
}

impl<B: StepBackend + ?Sized> StepBackend for Box<B> {
    fn run_step<'a>(&'a mut self, project: &'a str, step: &'a str) -> StepFuture<'a> {
        (**self).run_step(project, step)
    }
}
