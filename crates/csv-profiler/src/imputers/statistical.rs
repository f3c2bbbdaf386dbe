//! Statistical imputation methods.
//!
//! Provides mean and mode imputation strategies.

use crate::error::{Result, ResultExt};
use crate::profiler::mean;
use crate::utils::{
    fill_nulls_from_row, fill_numeric_nulls, is_numeric_dtype, mode_position, present_f64_values,
};
use polars::prelude::*;
use tracing::debug;

/// Statistical imputation methods for filling missing values.
pub struct StatisticalImputer;

impl StatisticalImputer {
    /// Fill missing cells of every numeric column with the column mean.
    ///
    /// Filled columns become Float64. Columns without missing cells or
    /// without any present value are left untouched.
    pub fn fill_numeric_mean(df: &mut DataFrame, processing_steps: &mut Vec<String>) -> Result<()> {
        let numeric_cols: Vec<String> = df
            .get_columns()
            .iter()
            .filter(|col| is_numeric_dtype(col.dtype()) && col.null_count() > 0)
            .map(|col| col.name().to_string())
            .collect();

        for col_name in &numeric_cols {
            Self::apply_numeric_mean(df, col_name, processing_steps)?;
        }
        Ok(())
    }

    /// Apply mean imputation to one numeric column.
    pub fn apply_numeric_mean(
        df: &mut DataFrame,
        col_name: &str,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        let series = df.column(col_name)?.as_materialized_series().clone();
        let Some(mean_val) = mean(&present_f64_values(&series)?) else {
            debug!("Skipping '{}': no present values", col_name);
            return Ok(());
        };

        let filled = fill_numeric_nulls(&series, mean_val)
            .context(format!("Mean imputation of '{}'", col_name))?;
        df.replace(col_name, filled)?;

        processing_steps.push(format!(
            "Filled {} missing values in '{}' with mean: {:.2}",
            series.null_count(),
            col_name,
            mean_val
        ));
        Ok(())
    }

    /// Fill missing cells of every non-numeric column with the column mode.
    pub fn fill_text_mode(df: &mut DataFrame, processing_steps: &mut Vec<String>) -> Result<()> {
        let text_cols: Vec<String> = df
            .get_columns()
            .iter()
            .filter(|col| !is_numeric_dtype(col.dtype()) && col.null_count() > 0)
            .map(|col| col.name().to_string())
            .collect();

        for col_name in &text_cols {
            Self::apply_mode_imputation(df, col_name, processing_steps)?;
        }
        Ok(())
    }

    /// Apply mode imputation to one column, keeping its dtype.
    ///
    /// On a frequency tie the value that occurs first wins.
    pub fn apply_mode_imputation(
        df: &mut DataFrame,
        col_name: &str,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        let series = df.column(col_name)?.as_materialized_series().clone();
        let Some(idx) = mode_position(&series)? else {
            debug!("Skipping '{}': no present values", col_name);
            return Ok(());
        };

        let mode_val = series.get(idx)?.to_string();
        let filled = fill_nulls_from_row(&series, idx)
            .context(format!("Mode imputation of '{}'", col_name))?;
        df.replace(col_name, filled)?;

        processing_steps.push(format!(
            "Filled {} missing values in '{}' with mode: {}",
            series.null_count(),
            col_name,
            mode_val
        ));
        Ok(())
    }
}
