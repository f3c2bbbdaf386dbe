//! CSV Profiling and Cleaning Library
//!
//! Reads a CSV upload into a Polars [`DataFrame`](polars::prelude::DataFrame),
//! reports on its data quality and applies a fixed menu of cleaning
//! operations.
//!
//! # Overview
//!
//! - **Profiling**: Missing-value percentages, duplicate rows, unique counts,
//!   numeric summaries, histograms and a Pearson correlation matrix
//! - **Cleaning**: Drop columns, remove duplicate rows, drop high-missing
//!   columns, fill numeric gaps with the mean and text gaps with the mode
//! - **CSV I/O**: Parse uploads with configurable null markers and a size
//!   limit, serialize cleaned data back to CSV
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use csv_profiler::{CleaningPlan, DataCleaner, DataProfiler, ProfilerConfig};
//!
//! let config = ProfilerConfig::default();
//! let df = csv_profiler::read_csv_path("data.csv", &config)?;
//!
//! let report = DataProfiler::profile_dataset(&df, &config)?;
//! println!("{} duplicate rows", report.duplicate_row_count);
//!
//! let plan = CleaningPlan {
//!     remove_duplicates: true,
//!     fill_numeric_mean: true,
//!     ..Default::default()
//! };
//! let outcome = DataCleaner::apply_plan(&df, &plan)?;
//! csv_profiler::write_csv_path(&outcome.data, "cleaned.csv")?;
//! ```
//!
//! # Configuration
//!
//! ```rust,ignore
//! use csv_profiler::ProfilerConfig;
//!
//! let config = ProfilerConfig::builder()
//!     .histogram_bins(20)
//!     .missing_column_threshold(0.7)   // Drop columns with >70% missing
//!     .null_values(["NA", "-"])
//!     .build()?;
//! ```

pub mod cleaner;
pub mod config;
pub mod error;
pub mod imputers;
pub mod io;
pub mod profiler;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::{CleaningOperation, CleaningPlan, DataCleaner};
pub use config::{ConfigValidationError, ProfilerConfig, ProfilerConfigBuilder};
pub use error::{ProfilerError, Result as ProfilerResult, ResultExt};
pub use imputers::StatisticalImputer;
pub use io::{read_csv_bytes, read_csv_path, write_csv_bytes, write_csv_path};
pub use profiler::{ColumnValues, DataProfiler};
pub use types::{
    CleaningOutcome, ColumnHistogram, ColumnKind, ColumnProfile, CorrelationMatrix, HistogramBin,
    NumericSummary, ProfileReport,
};
pub use utils::{column_kind, is_numeric_dtype, numeric_column_names};
