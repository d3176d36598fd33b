// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{RawReleaseConfig, ReleaseConfig};
use crate::errors::{ReleaseError, Result};

/// Load a plan file and return the raw `RawReleaseConfig`.
///
/// This only performs TOML deserialization. Use [`load_and_validate`] for
/// the checked form.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawReleaseConfig> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading release plan");
    let contents = fs::read_to_string(path).map_err(|source| ReleaseError::ReadPlan {
        path: path.to_path_buf(),
        source,
    })?;

    let config: RawReleaseConfig =
        toml::from_str(&contents).map_err(|source| ReleaseError::ParsePlan {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(config)
}

/// Load a plan file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ReleaseConfig> {
    let raw = load_from_path(&path)?;
    ReleaseConfig::try_from(raw)
}
