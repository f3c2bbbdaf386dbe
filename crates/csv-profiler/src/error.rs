//! Error types for profiling and cleaning.
//!
//! Every failure a request can hit is a variant of [`ProfilerError`]. Errors
//! are serializable so a front end can show the `code` and `message` of a
//! failed upload or cleaning request.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for the profiler and cleaner.
#[derive(Error, Debug)]
pub enum ProfilerError {
    /// The dataset has no rows.
    #[error("Dataset has no rows")]
    EmptyDataset,

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A numeric operation was applied to a non-numeric column.
    #[error("Column '{column}' is not numeric (dtype {dtype})")]
    NonNumericColumn { column: String, dtype: String },

    /// The input could not be parsed as CSV.
    #[error("Cannot read CSV: {0}")]
    Parse(String),

    /// The input exceeds the configured upload limit.
    #[error("Input is {size} bytes, larger than the {limit} byte limit")]
    InputTooLarge { size: u64, limit: u64 },

    /// Invalid argument or configuration.
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
        source: Box<ProfilerError>,
    },
}

impl ProfilerError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ProfilerError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable code for front-end handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDataset => "EMPTY_DATASET",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::NonNumericColumn { .. } => "NON_NUMERIC_COLUMN",
            Self::Parse(_) => "PARSE_ERROR",
            Self::InputTooLarge { .. } => "INPUT_TOO_LARGE",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Whether the caller can fix this by changing the request (input file
    /// or selected options) rather than it being an internal failure.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::EmptyDataset
            | Self::ColumnNotFound(_)
            | Self::NonNumericColumn { .. }
            | Self::Parse(_)
            | Self::InputTooLarge { .. }
            | Self::InvalidConfig(_) => true,
            Self::WithContext { source, .. } => source.is_user_error(),
            _ => false,
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for ProfilerError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ProfilerError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for profiler operations.
pub type Result<T> = std::result::Result<T, ProfilerError>;

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
        self.map_err(|e| ProfilerError::Polars(e).with_context(context))
    }
}
