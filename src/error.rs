use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid lineage snapshot in '{file}'")]
#[diagnostic(
    code(lineage_lens::snapshot_parse_error),
    help("Check the JSON structure near the highlighted position")
)]
pub struct SnapshotParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("parse error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum LineageLensError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(lineage_lens::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    SnapshotParseError(Box<SnapshotParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(lineage_lens::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(lineage_lens::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(lineage_lens::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(lineage_lens::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(lineage_lens::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },
}
