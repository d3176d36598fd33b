// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::driver::{DEFAULT_PROJECT, DEFAULT_STEPS, ReleasePlan};

/// Release plan as read from a TOML file, before validation.
///
/// ```toml
/// [release]
/// project = "apibuilder-commons"
/// steps = ["dev tag", "sbt +publish"]
///
/// [env]
/// SBT_OPTS = "-Xmx2g"
/// ```
///
/// `[release]` is required; its keys fall back to the built-in plan.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReleaseConfig {
    pub release: ReleaseSection,

    /// Extra environment variables exported to every step.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// `[release]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseSection {
    #[serde(default = "default_project")]
    pub project: String,

    /// Shell command lines, run in this order.
    #[serde(default = "default_steps")]
    pub steps: Vec<String>,
}

fn default_project() -> String {
    DEFAULT_PROJECT.to_string()
}

fn default_steps() -> Vec<String> {
    DEFAULT_STEPS.iter().map(|s| s.to_string()).collect()
}

impl Default for ReleaseSection {
    fn default() -> Self {
        Self {
            project: default_project(),
            steps: default_steps(),
        }
    }
}

/// Validated release configuration.
///
/// Only obtainable through `TryFrom<RawReleaseConfig>` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    release: ReleaseSection,
    env: BTreeMap<String, String>,
}

impl ReleaseConfig {
    pub(crate) fn new_unchecked(release: ReleaseSection, env: BTreeMap<String, String>) -> Self {
        Self { release, env }
    }

    pub fn project(&self) -> &str {
        &self.release.project
    }

    pub fn steps(&self) -> &[String] {
        &self.release.steps
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    pub fn plan(&self) -> ReleasePlan {
        ReleasePlan {
            project: self.release.project.clone(),
            steps: self.release.steps.clone(),
        }
    }
}
