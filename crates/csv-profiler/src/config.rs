//! Configuration for CSV loading, profiling and cleaning.
//!
//! Use [`ProfilerConfig::builder()`] for a validated configuration.

use serde::{Deserialize, Serialize};

/// Default upload limit: 200 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 200 * 1024 * 1024;

/// Default row count above which the profile carries a size warning.
pub const DEFAULT_LARGE_DATASET_ROWS: usize = 2_000_000;

/// Default number of histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Default missing fraction above which a column is dropped.
pub const DEFAULT_MISSING_COLUMN_THRESHOLD: f64 = 0.5;

/// Cell values read as missing in addition to empty fields.
pub const DEFAULT_NULL_VALUES: [&str; 5] = ["NA", "N/A", "NaN", "null", "#N/A"];

/// Configuration for loading, profiling and cleaning a dataset.
///
/// # Example
///
/// ```rust,ignore
/// use csv_profiler::config::ProfilerConfig;
///
/// let config = ProfilerConfig::builder()
///     .histogram_bins(20)
///     .missing_column_threshold(0.3)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Number of equal-width bins in each numeric histogram.
    /// Default: 10
    pub histogram_bins: usize,

    /// Missing fraction (0.0 - 1.0) above which a column is dropped by
    /// `DropHighMissingColumns` when no explicit threshold is given.
    /// Default: 0.5
    pub missing_column_threshold: f64,

    /// Largest accepted CSV input in bytes.
    /// Default: 200 MiB
    pub max_input_bytes: u64,

    /// Row count above which the profile carries a size warning.
    /// Default: 2,000,000
    pub large_dataset_rows: usize,

    /// Rows scanned for type inference. `None` scans the whole file.
    /// Default: None
    pub infer_schema_length: Option<usize>,

    /// Cell values treated as missing on load.
    /// Default: `NA`, `N/A`, `NaN`, `null`, `#N/A`
    pub null_values: Vec<String>,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            missing_column_threshold: DEFAULT_MISSING_COLUMN_THRESHOLD,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            large_dataset_rows: DEFAULT_LARGE_DATASET_ROWS,
            infer_schema_length: None,
            null_values: DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ProfilerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ProfilerConfigBuilder {
        ProfilerConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.histogram_bins == 0 {
            return Err(ConfigValidationError::InvalidHistogramBins(
                self.histogram_bins,
            ));
        }

        if !(0.0..=1.0).contains(&self.missing_column_threshold) {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "missing_column_threshold".to_string(),
                value: self.missing_column_threshold,
            });
        }

        if self.max_input_bytes == 0 {
            return Err(ConfigValidationError::InvalidInputLimit);
        }

        if self.infer_schema_length == Some(0) {
            return Err(ConfigValidationError::InvalidInferSchemaLength);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid threshold for '{field}': {value} (must be between 0.0 and 1.0)")]
    InvalidThreshold { field: String, value: f64 },

    #[error("Invalid histogram bins: {0} (must be at least 1)")]
    InvalidHistogramBins(usize),

    #[error("Invalid input limit: must be greater than 0 bytes")]
    InvalidInputLimit,

    #[error("Invalid infer_schema_length: use None for a full scan instead of 0")]
    InvalidInferSchemaLength,
}

impl From<ConfigValidationError> for crate::error::ProfilerError {
    fn from(err: ConfigValidationError) -> Self {
        crate::error::ProfilerError::InvalidConfig(err.to_string())
    }
}

/// Builder for [`ProfilerConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct ProfilerConfigBuilder {
    histogram_bins: Option<usize>,
    missing_column_threshold: Option<f64>,
    max_input_bytes: Option<u64>,
    large_dataset_rows: Option<usize>,
    infer_schema_length: Option<usize>,
    null_values: Option<Vec<String>>,
}

impl ProfilerConfigBuilder {
    /// Set the number of histogram bins.
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Set the default threshold for dropping columns with missing values.
    ///
    /// # Arguments
    /// * `threshold` - Value between 0.0 and 1.0 (e.g., 0.5 = 50%)
    pub fn missing_column_threshold(mut self, threshold: f64) -> Self {
        self.missing_column_threshold = Some(threshold);
        self
    }

    /// Set the largest accepted input size in bytes.
    pub fn max_input_bytes(mut self, bytes: u64) -> Self {
        self.max_input_bytes = Some(bytes);
        self
    }

    /// Set the row count above which a size warning is reported.
    pub fn large_dataset_rows(mut self, rows: usize) -> Self {
        self.large_dataset_rows = Some(rows);
        self
    }

    /// Limit type inference to the first `rows` rows.
    pub fn infer_schema_length(mut self, rows: usize) -> Self {
        self.infer_schema_length = Some(rows);
        self
    }

    /// Replace the set of cell values treated as missing.
    pub fn null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ProfilerConfig` or an error if validation fails.
    pub fn build(self) -> Result<ProfilerConfig, ConfigValidationError> {
        let defaults = ProfilerConfig::default();
        let config = ProfilerConfig {
            histogram_bins: self.histogram_bins.unwrap_or(defaults.histogram_bins),
            missing_column_threshold: self
                .missing_column_threshold
                .unwrap_or(defaults.missing_column_threshold),
            max_input_bytes: self.max_input_bytes.unwrap_or(defaults.max_input_bytes),
            large_dataset_rows: self
                .large_dataset_rows
                .unwrap_or(defaults.large_dataset_rows),
            infer_schema_length: self.infer_schema_length,
            null_values: self.null_values.unwrap_or(defaults.null_values),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProfilerConfig::default();
        assert_eq!(config.histogram_bins, 10);
        assert_eq!(config.missing_column_threshold, 0.5);
        assert_eq!(config.max_input_bytes, 200 * 1024 * 1024);
        assert_eq!(config.large_dataset_rows, 2_000_000);
        assert!(config.infer_schema_length.is_none());
        assert!(config.null_values.contains(&"NA".to_string()));
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let config = ProfilerConfig::builder().build().unwrap();
        assert_eq!(config, ProfilerConfig::default());
    }

    #[test]
    fn test_builder_custom_values() {
        let config = ProfilerConfig::builder()
            .histogram_bins(30)
            .missing_column_threshold(0.25)
            .max_input_bytes(1024)
            .large_dataset_rows(100)
            .infer_schema_length(50)
            .null_values(["?"])
            .build()
            .unwrap();

        assert_eq!(config.histogram_bins, 30);
        assert_eq!(config.missing_column_threshold, 0.25);
        assert_eq!(config.max_input_bytes, 1024);
        assert_eq!(config.large_dataset_rows, 100);
        assert_eq!(config.infer_schema_length, Some(50));
        assert_eq!(config.null_values, vec!["?".to_string()]);
    }

    #[test]
    fn test_validation_invalid_threshold() {
        let result = ProfilerConfig::builder()
            .missing_column_threshold(1.5)
            .build();

        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidThreshold { .. }
        ));
    }

    #[test]
    fn test_validation_zero_bins() {
        let result = ProfilerConfig::builder().histogram_bins(0).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidHistogramBins(0)
        ));
    }

    #[test]
    fn test_validation_zero_input_limit() {
        let result = ProfilerConfig::builder().max_input_bytes(0).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidInputLimit
        ));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "histogram_bins": 30,
            "missing_column_threshold": 0.7,
            "max_input_bytes": 1048576,
            "large_dataset_rows": 1000,
            "infer_schema_length": 100,
            "null_values": ["", "-"]
        }"#;

        let config: ProfilerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.histogram_bins, 30);
        assert_eq!(config.missing_column_threshold, 0.7);
        assert_eq!(config.infer_schema_length, Some(100));
        assert!(config.validate().is_ok());
    }
}
