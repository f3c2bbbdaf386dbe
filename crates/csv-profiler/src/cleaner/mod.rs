//! Data cleaning module.
//!
//! This module provides the fixed menu of cleaning operations:
//! - Dropping selected columns
//! - Removing duplicate rows
//! - Dropping columns with a high missing rate
//! - Mean imputation for numeric columns
//! - Mode imputation for text and other non-numeric columns
//!
//! Every operation takes the dataset by reference and returns a new one;
//! the input is never modified.

mod operations;

pub use operations::{CleaningOperation, CleaningPlan};

use crate::error::{ProfilerError, Result, ResultExt};
use crate::imputers::StatisticalImputer;
use crate::types::CleaningOutcome;
use crate::utils::unique_rows;
use polars::prelude::*;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Data cleaner applying user-selected operations.
pub struct DataCleaner;

impl DataCleaner {
    /// Apply a single operation, returning the cleaned dataset.
    pub fn apply(df: &DataFrame, operation: &CleaningOperation) -> Result<DataFrame> {
        let mut actions = Vec::new();
        Self::apply_logged(df, operation, &mut actions)
    }

    /// Apply every operation of a plan in order.
    pub fn apply_plan(df: &DataFrame, plan: &CleaningPlan) -> Result<CleaningOutcome> {
        let operations = plan.operations();
        info!("Applying {} cleaning operations", operations.len());

        let mut actions = Vec::new();
        let mut current = df.clone();
        for operation in &operations {
            current = Self::apply_logged(&current, operation, &mut actions)?;
        }

        Ok(CleaningOutcome {
            rows_before: df.height(),
            columns_before: df.width(),
            rows_after: current.height(),
            columns_after: current.width(),
            data: current,
            actions,
        })
    }

    fn apply_logged(
        df: &DataFrame,
        operation: &CleaningOperation,
        actions: &mut Vec<String>,
    ) -> Result<DataFrame> {
        debug!("Applying {:?}", operation);
        match operation {
            CleaningOperation::DropColumns { names } => Self::drop_columns(df, names, actions),
            CleaningOperation::RemoveDuplicateRows => Self::remove_duplicate_rows(df, actions),
            CleaningOperation::DropHighMissingColumns { threshold } => {
                Self::drop_high_missing_columns(df, *threshold, actions)
            }
            CleaningOperation::FillNumericMean => {
                let mut df = df.clone();
                StatisticalImputer::fill_numeric_mean(&mut df, actions)?;
                Ok(df)
            }
            CleaningOperation::FillTextMode => {
                let mut df = df.clone();
                StatisticalImputer::fill_text_mode(&mut df, actions)?;
                Ok(df)
            }
        }
    }

    fn drop_columns(
        df: &DataFrame,
        names: &BTreeSet<String>,
        actions: &mut Vec<String>,
    ) -> Result<DataFrame> {
        if let Some(missing) = names.iter().find(|name| df.column(name).is_err()) {
            return Err(ProfilerError::ColumnNotFound(missing.clone()));
        }
        if names.is_empty() {
            return Ok(df.clone());
        }

        let cols: Vec<PlSmallStr> = names.iter().map(|s| s.as_str().into()).collect();
        let result = df.drop_many(cols);

        actions.push(format!("Dropped {} columns: {:?}", names.len(), names));
        Ok(result)
    }

    fn remove_duplicate_rows(df: &DataFrame, actions: &mut Vec<String>) -> Result<DataFrame> {
        let result = unique_rows(df).context("Removing duplicate rows")?;
        let removed = df.height() - result.height();

        if removed == 0 {
            actions.push("No duplicate rows found".to_string());
            return Ok(df.clone());
        }

        let pct = removed as f64 / df.height() as f64 * 100.0;
        actions.push(format!("Removed {} duplicate rows ({:.1}%)", removed, pct));
        debug!("Removed {} duplicate rows", removed);
        Ok(result)
    }

    fn drop_high_missing_columns(
        df: &DataFrame,
        threshold: f64,
        actions: &mut Vec<String>,
    ) -> Result<DataFrame> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ProfilerError::InvalidConfig(format!(
                "missing threshold {} must be between 0.0 and 1.0",
                threshold
            )));
        }
        if df.height() == 0 {
            return Ok(df.clone());
        }

        let rows = df.height() as f64;
        let high_missing: Vec<String> = df
            .get_columns()
            .iter()
            .filter(|col| col.null_count() as f64 / rows > threshold)
            .map(|col| col.name().to_string())
            .collect();

        if high_missing.is_empty() {
            actions.push(format!(
                "No columns with >{:.0}% missing values found",
                threshold * 100.0
            ));
            return Ok(df.clone());
        }

        let cols: Vec<PlSmallStr> = high_missing.iter().map(|s| s.as_str().into()).collect();
        let result = df.drop_many(cols);

        actions.push(format!(
            "Removed {} columns with >{:.0}% missing values: {:?}",
            high_missing.len(),
            threshold * 100.0,
            high_missing
        ));
        Ok(result)
    }
}
