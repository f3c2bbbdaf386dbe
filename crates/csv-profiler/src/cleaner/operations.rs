//! Cleaning operations and the form-style plan that selects them.

use crate::config::DEFAULT_MISSING_COLUMN_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

fn default_threshold() -> f64 {
    DEFAULT_MISSING_COLUMN_THRESHOLD
}

/// One cleaning step, built from user input for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CleaningOperation {
    /// Remove the named columns. Every name must exist.
    DropColumns { names: BTreeSet<String> },
    /// Keep the first occurrence of each distinct row.
    RemoveDuplicateRows,
    /// Remove columns whose missing fraction is strictly above `threshold`.
    DropHighMissingColumns {
        #[serde(default = "default_threshold")]
        threshold: f64,
    },
    /// Replace missing numeric cells with the column mean.
    FillNumericMean,
    /// Replace missing non-numeric cells with the column mode.
    FillTextMode,
}

impl CleaningOperation {
    /// `DropColumns` from any list of names.
    pub fn drop_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CleaningOperation::DropColumns {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// `DropHighMissingColumns` with the default 0.5 threshold.
    pub fn drop_high_missing() -> Self {
        CleaningOperation::DropHighMissingColumns {
            threshold: DEFAULT_MISSING_COLUMN_THRESHOLD,
        }
    }
}

/// The set of cleaning options a user can tick in one request.
///
/// Selected operations run in a fixed order: drop columns, remove
/// duplicates, drop high-missing columns, mean fill, mode fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningPlan {
    pub drop_columns: BTreeSet<String>,
    pub remove_duplicates: bool,
    /// Threshold for dropping high-missing columns; `None` skips the step.
    pub drop_high_missing: Option<f64>,
    pub fill_numeric_mean: bool,
    pub fill_text_mode: bool,
}

impl CleaningPlan {
    /// Selected operations in execution order.
    pub fn operations(&self) -> Vec<CleaningOperation> {
        let mut ops = Vec::new();
        if !self.drop_columns.is_empty() {
            ops.push(CleaningOperation::DropColumns {
                names: self.drop_columns.clone(),
            });
        }
        if self.remove_duplicates {
            ops.push(CleaningOperation::RemoveDuplicateRows);
        }
        if let Some(threshold) = self.drop_high_missing {
            ops.push(CleaningOperation::DropHighMissingColumns { threshold });
        }
        if self.fill_numeric_mean {
            ops.push(CleaningOperation::FillNumericMean);
        }
        if self.fill_text_mode {
            ops.push(CleaningOperation::FillTextMode);
        }
        ops
    }

    pub fn is_empty(&self) -> bool {
        self.operations().is_empty()
    }
}
