// src/errors.rs

//! Errors of the release driver itself.
//!
//! A failing release step is not an error; it is reported through
//! [`RunReport`](crate::types::RunReport).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("invalid release plan: {0}")]
    InvalidPlan(String),

    #[error("reading release plan {}: {source}", path.display())]
    ReadPlan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing release plan {}: {source}", path.display())]
    ParsePlan {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReleaseError>;
