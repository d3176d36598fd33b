//! Shared helpers for the release driver's integration tests.

pub mod builders;
pub mod recording;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Upper bound for a single async test step.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Install a test-captured tracing subscriber once per test binary.
///
/// Filter comes from `RUST_LOG` (default `info`); output only shows for
/// failing tests unless run with `--nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, panicking if it takes longer than [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(TEST_TIMEOUT, f)
        .await
        .expect("release test timed out")
}

/// Write a `Release.toml` with `contents` into `dir` and return its path.
pub fn write_plan(dir: &Path, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join("Release.toml");
    fs::write(&path, contents)
        .with_context(|| format!("writing release plan to {}", path.display()))?;
    Ok(path)
}
