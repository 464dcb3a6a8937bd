//! Error types emitted by the StoryVerse CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the StoryVerse CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// The `--now` override is not an RFC 3339 timestamp.
    #[error("invalid --now timestamp {value:?}: {source}")]
    InvalidTimestamp {
        /// Raw value supplied for `--now`.
        value: String,
        /// Parser failure.
        #[source]
        source: chrono::ParseError,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingInputFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    InputPathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectInputPath {
        /// Option that named the path.
        field: &'static str,
        /// Path being read.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {field} file {path:?}: {source}")]
    OpenInput {
        /// Option that named the path.
        field: &'static str,
        /// Path being read.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// An input file did not hold the expected JSON document.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Option that named the path.
        field: &'static str,
        /// Path being read.
        path: Utf8PathBuf,
        /// JSON decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// The log filter could not be parsed.
    #[error("invalid log filter {value:?}: {source}")]
    LogFilter {
        /// Filter directive that failed to parse.
        value: String,
        /// Directive parser failure.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    /// Installing the global log subscriber failed.
    #[error("failed to initialise logging: {0}")]
    LogInit(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Serializing ranked tasks failed.
    #[error("failed to serialize ranked tasks: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the ranked tasks failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
