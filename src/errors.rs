use std::io;

use thiserror::Error;

use crate::types::{DatasetName, FieldName, ResourceUrl};

/// Error type for download, schema, and harness failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed downloading '{url}': {reason}")]
    DownloadFailed { url: ResourceUrl, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("dataset '{dataset}' field '{field}': '{value}' is not a declared class label")]
    UnknownLabel {
        dataset: DatasetName,
        field: FieldName,
        value: String,
    },
    #[error("dataset '{dataset}' emitted a record that does not match its schema: {details}")]
    SchemaMismatch {
        dataset: DatasetName,
        details: String,
    },
    #[error("field '{field}': '{value}' is not a valid numeric value")]
    MalformedValue { field: FieldName, value: String },
    #[error("builder expectation failed: {0}")]
    ExpectationFailed(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}
