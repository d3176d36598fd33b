#![allow(dead_code)]

use std::collections::BTreeMap;

use apibuilder_release::config::{RawReleaseConfig, ReleaseConfig, ReleaseSection};

/// Builder for `RawReleaseConfig` / `ReleaseConfig` to simplify test setup.
pub struct ReleaseConfigBuilder {
    config: RawReleaseConfig,
}

impl ReleaseConfigBuilder {
    pub fn new(project: &str) -> Self {
        Self {
            config: RawReleaseConfig {
                release: ReleaseSection {
                    project: project.to_string(),
                    steps: Vec::new(),
                },
                env: BTreeMap::new(),
            },
        }
    }

    pub fn step(mut self, step: &str) -> Self {
        self.config.release.steps.push(step.to_string());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.config.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn build_raw(self) -> RawReleaseConfig {
        self.config
    }

    pub fn build(self) -> ReleaseConfig {
        ReleaseConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}
