// src/config/validate.rs

use crate::config::model::{RawReleaseConfig, ReleaseConfig};
use crate::errors::{ReleaseError, Result};

impl TryFrom<RawReleaseConfig> for ReleaseConfig {
    type Error = ReleaseError;

    fn try_from(raw: RawReleaseConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ReleaseConfig::new_unchecked(raw.release, raw.env))
    }
}

fn validate_raw_config(cfg: &RawReleaseConfig) -> Result<()> {
    validate_project(&cfg.release.project)?;
    validate_steps(&cfg.release.steps)?;
    validate_env(cfg)?;
    Ok(())
}

fn validate_project(project: &str) -> Result<()> {
    if project.trim().is_empty() {
        return Err(ReleaseError::InvalidPlan(
            "[release].project must not be empty".to_string(),
        ));
    }
    if project.chars().any(char::is_whitespace) {
        return Err(ReleaseError::InvalidPlan(format!(
            "[release].project '{project}' must not contain whitespace"
        )));
    }
    Ok(())
}

fn validate_steps(steps: &[String]) -> Result<()> {
    if steps.is_empty() {
        return Err(ReleaseError::InvalidPlan(
            "[release].steps must contain at least one step".to_string(),
        ));
    }
    for (i, step) in steps.iter().enumerate() {
        if step.trim().is_empty() {
            return Err(ReleaseError::InvalidPlan(format!(
                "[release].steps[{i}] is blank"
            )));
        }
    }
    Ok(())
}

fn validate_env(cfg: &RawReleaseConfig) -> Result<()> {
    for key in cfg.env.keys() {
        if key.is_empty() || key.contains('=') {
            return Err(ReleaseError::InvalidPlan(format!(
                "[env] key '{key}' is not a valid environment variable name"
            )));
        }
    }
    Ok(())
}
