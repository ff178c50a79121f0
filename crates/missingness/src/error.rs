//! Error types for missingness analysis.
//!
//! Every operation reports failures synchronously through [`MissingnessError`].
//! Nothing is retried internally; visualizations surface the errors of the
//! table they are derived from before touching the drawing surface.
//!
//! Errors are serializable so they can be handed to a frontend as
//! `{ code, message }` pairs.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for missingness analysis.
#[derive(Error, Debug)]
pub enum MissingnessError {
    /// The named variable does not exist in the table.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A parameter is outside of its valid domain (e.g. a zero span size).
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A percentage or plot was requested over an empty table.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<MissingnessError>,
    },
}

impl MissingnessError {
    /// Shorthand for an [`MissingnessError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        MissingnessError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        MissingnessError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code for frontend handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::InvalidParameter { .. } => "INVALID_PARAMETER",
            Self::EmptyInput(_) => "EMPTY_INPUT",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for MissingnessError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("MissingnessError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for missingness operations.
pub type Result<T> = std::result::Result<T, MissingnessError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MissingnessError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            MissingnessError::ColumnNotFound("age".to_string()).error_code(),
            "COLUMN_NOT_FOUND"
        );
        assert_eq!(
            MissingnessError::invalid_parameter("span_every", "must be positive").error_code(),
            "INVALID_PARAMETER"
        );
        assert_eq!(
            MissingnessError::EmptyInput("no rows".to_string()).error_code(),
            "EMPTY_INPUT"
        );
    }

    #[test]
    fn test_error_serialization() {
        let error = MissingnessError::ColumnNotFound("Ozone".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("COLUMN_NOT_FOUND"));
        assert!(json.contains("Ozone"));
    }

    #[test]
    fn test_with_context_preserves_code() {
        let error = MissingnessError::ColumnNotFound("Ozone".to_string())
            .with_context("While computing run lengths");
        assert!(error.to_string().contains("While computing run lengths"));
        assert_eq!(error.error_code(), "COLUMN_NOT_FOUND");
    }

    #[test]
    fn test_polars_result_context() {
        let result: std::result::Result<(), polars::error::PolarsError> = Err(
            polars::error::PolarsError::ColumnNotFound("Wind".into()),
        );
        let error = result.context("Selecting columns").unwrap_err();
        assert_eq!(error.error_code(), "POLARS_ERROR");
    }
}
