use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiskError {
    /// A caller-supplied value is missing, non-numeric, or out of range.
    #[error("invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// An artifact declares a feature schema that differs from the canonical
    /// training schema. Predicting against it would be silently wrong.
    #[error("artifact schema mismatch: expected [{expected}], found [{found}]")]
    SchemaMismatch { expected: String, found: String },

    /// The classifier or scaler could not be loaded; predictions degrade to
    /// this error instead of crashing.
    #[error("model unavailable: {reason}")]
    ModelUnavailable { reason: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid artifact {path}: {message}")]
    Artifact { path: PathBuf, message: String },
}

impl RiskError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn model_unavailable(reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn artifact(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Artifact {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
