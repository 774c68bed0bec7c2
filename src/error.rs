use std::fmt::Display;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Hard failures the pipeline surfaces to callers. Extraction misses and
/// normalization anomalies are deliberately not represented here; those
/// degrade to empty canonical fields instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The uploaded claim document could not be parsed (caller error).
    #[error("input document could not be read: {detail}")]
    BadDocument { detail: String },

    /// The on-disk form template is missing or structurally broken
    /// (operator error).
    #[error("template {} could not be processed: {detail}", path.display())]
    BadTemplate { path: PathBuf, detail: String },

    /// Source data too malformed to map onto the template catalog.
    #[error("malformed source data: field `{field}` {detail}")]
    MalformedField { field: &'static str, detail: String },
}

impl PipelineError {
    pub fn bad_document(detail: impl Display) -> Self {
        Self::BadDocument {
            detail: detail.to_string(),
        }
    }

    pub fn bad_template(path: &Path, detail: impl Display) -> Self {
        Self::BadTemplate {
            path: path.to_path_buf(),
            detail: detail.to_string(),
        }
    }

    pub fn malformed(field: &'static str, detail: impl Into<String>) -> Self {
        Self::MalformedField {
            field,
            detail: detail.into(),
        }
    }
}
