//! Error types for the trellis CLI.

use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use trellis::TrellisError;

/// Error type covering every way a CLI run can fail.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration file not found: {0}")]
    #[diagnostic(help("pass --config with a path to an existing TOML file"))]
    MissingConfig(PathBuf),

    #[error("Invalid configuration in {path}: {err}")]
    Config {
        path: PathBuf,
        #[source]
        err: toml::de::Error,
    },

    #[error(transparent)]
    Engine(#[from] TrellisError),

    #[error("Invalid quiz submission: {0}")]
    #[diagnostic(help("expected a JSON object with `quiz` and `answers` fields"))]
    Submission(#[source] serde_json::Error),

    #[error("JSON encoding error: {0}")]
    Encode(#[source] serde_json::Error),
}
