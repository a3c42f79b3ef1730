//! Error types emitted by the Loadwise CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use loadwise_core::LoadRequestValidationError;
use thiserror::Error;

/// Errors emitted by the Loadwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass <{field}> or set {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the load request file failed.
    #[error("failed to open load request at {path:?}: {source}")]
    OpenLoadRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Load request JSON could not be decoded.
    #[error("failed to parse load request JSON at {path:?}: {source}")]
    ParseLoadRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The load request payload failed validation.
    #[error("load request in {path:?} failed validation: {source}")]
    InvalidLoadRequest {
        path: Utf8PathBuf,
        #[source]
        source: LoadRequestValidationError,
    },
    /// Serialising the load plan failed.
    #[error("failed to serialise load plan: {0}")]
    SerialiseLoadPlan(#[source] serde_json::Error),
    /// Writing the load plan failed.
    #[error("failed to write load plan: {0}")]
    WriteOutput(#[source] std::io::Error),
}
