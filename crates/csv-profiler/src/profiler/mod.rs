//! Data profiling module for dataset analysis.
//!
//! This module computes the data-quality statistics shown for an uploaded
//! file:
//! - Missing-value percentage per column
//! - Duplicate rows and per-column unique values
//! - Histograms of numeric columns
//! - Pearson correlation between numeric columns

mod correlation;
mod histogram;
mod statistics;

use crate::config::ProfilerConfig;
use crate::error::{ProfilerError, Result};
use crate::types::{
    ColumnHistogram, ColumnProfile, CorrelationMatrix, HistogramBin, ProfileReport,
};
use crate::utils::{
    column_kind, is_numeric_dtype, numeric_column_names, optional_f64_values, present_f64_values,
    unique_rows,
};
use polars::prelude::*;
use tracing::{debug, info, warn};

pub(crate) use statistics::mean;

/// Per-column values in dataset column order.
pub type ColumnValues<T> = Vec<(String, T)>;

/// Data profiler for analyzing dataset structure and quality.
pub struct DataProfiler;

impl DataProfiler {
    /// Profile an entire dataset.
    ///
    /// Fails with [`ProfilerError::EmptyDataset`] when the dataset has no rows.
    pub fn profile_dataset(df: &DataFrame, config: &ProfilerConfig) -> Result<ProfileReport> {
        config.validate()?;
        ensure_rows(df)?;

        info!("Profiling dataset with shape {:?}", df.shape());

        let mut columns = Vec::with_capacity(df.width());
        let mut histograms = Vec::new();

        for col in df.get_columns() {
            let series = col.as_materialized_series();
            columns.push(Self::profile_column(series, df.height())?);

            if is_numeric_dtype(series.dtype()) {
                let values = present_f64_values(series)?;
                histograms.push(ColumnHistogram {
                    column: series.name().to_string(),
                    bins: histogram::equal_width_bins(&values, config.histogram_bins),
                });
            }
        }

        let duplicate_row_count = Self::count_duplicate_rows(df)?;

        let correlation = if numeric_column_names(df).len() >= 2 {
            Some(Self::compute_correlation_matrix(df)?)
        } else {
            None
        };

        let mut warnings = Vec::new();
        if df.height() > config.large_dataset_rows {
            warn!("Large dataset: {} rows", df.height());
            warnings.push(format!(
                "Large file with {} rows may be slow to process",
                df.height()
            ));
        }

        debug!(
            "Profile complete: {} duplicate rows, {} histograms",
            duplicate_row_count,
            histograms.len()
        );

        Ok(ProfileReport {
            row_count: df.height(),
            column_count: df.width(),
            columns,
            duplicate_row_count,
            histograms,
            correlation,
            warnings,
            generated_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    fn profile_column(series: &Series, total_rows: usize) -> Result<ColumnProfile> {
        let missing_count = series.null_count();
        let numeric = if is_numeric_dtype(series.dtype()) {
            statistics::numeric_summary(&present_f64_values(series)?)
        } else {
            None
        };

        Ok(ColumnProfile {
            name: series.name().to_string(),
            dtype: format!("{:?}", series.dtype()),
            kind: column_kind(series.dtype()),
            missing_count,
            missing_percentage: missing_percentage(missing_count, total_rows),
            unique_count: series.drop_nulls().n_unique()?,
            duplicate_count: series.len() - series.n_unique()?,
            numeric,
        })
    }

    /// Percentage (0 - 100) of missing cells in each column.
    pub fn compute_missing_percentage(df: &DataFrame) -> Result<ColumnValues<f64>> {
        ensure_rows(df)?;
        Ok(df
            .get_columns()
            .iter()
            .map(|col| {
                (
                    col.name().to_string(),
                    missing_percentage(col.null_count(), df.height()),
                )
            })
            .collect())
    }

    /// Number of rows that exactly duplicate an earlier row.
    pub fn count_duplicate_rows(df: &DataFrame) -> Result<usize> {
        let unique = unique_rows(df)?;
        Ok(df.height() - unique.height())
    }

    /// Number of distinct present values in each column.
    pub fn count_unique_values(df: &DataFrame) -> Result<ColumnValues<usize>> {
        df.get_columns()
            .iter()
            .map(|col| {
                let unique = col.as_materialized_series().drop_nulls().n_unique()?;
                Ok((col.name().to_string(), unique))
            })
            .collect()
    }

    /// Equal-width histogram of a numeric column.
    pub fn compute_histogram(
        df: &DataFrame,
        column: &str,
        bins: usize,
    ) -> Result<Vec<HistogramBin>> {
        if bins == 0 {
            return Err(ProfilerError::InvalidConfig(
                "histogram needs at least one bin".to_string(),
            ));
        }

        let series = df
            .column(column)
            .map_err(|_| ProfilerError::ColumnNotFound(column.to_string()))?
            .as_materialized_series();

        if !is_numeric_dtype(series.dtype()) {
            return Err(ProfilerError::NonNumericColumn {
                column: column.to_string(),
                dtype: format!("{:?}", series.dtype()),
            });
        }

        let values = present_f64_values(series)?;
        Ok(histogram::equal_width_bins(&values, bins))
    }

    /// Pairwise Pearson correlation between all numeric columns.
    pub fn compute_correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
        let names = numeric_column_names(df);
        let columns = names
            .iter()
            .map(|name| {
                let series = df.column(name)?.as_materialized_series();
                optional_f64_values(series)
            })
            .collect::<PolarsResult<Vec<_>>>()?;

        Ok(CorrelationMatrix {
            values: correlation::correlation_matrix(&columns),
            columns: names,
        })
    }
}

fn ensure_rows(df: &DataFrame) -> Result<()> {
    if df.height() == 0 {
        return Err(ProfilerError::EmptyDataset);
    }
    Ok(())
}

fn missing_percentage(missing: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    missing as f64 / total as f64 * 100.0
}
