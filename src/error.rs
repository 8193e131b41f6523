use std::path::PathBuf;
use thiserror::Error;

use crate::codec::ValueType;
use crate::validation::ValidationReport;

/// The main error type for graphattr operations.
#[derive(Debug, Error)]
pub enum GraphAttrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {tag} value '{text}': {message}")]
    ValueParse {
        tag: ValueType,
        text: String,
        message: String,
    },

    #[error("Invalid point list at token {index}: {message}")]
    PointListParse { index: usize, message: String },

    #[error("Failed to parse scene JSON from {path}: {source}")]
    SceneJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse settings from {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    #[error("Failed to write settings to {path}: {message}")]
    SettingsWrite { path: PathBuf, message: String },

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },

    #[error("Cannot export scene: {0}")]
    DegenerateScene(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
