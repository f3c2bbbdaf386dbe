use serde::{Deserialize, Serialize};

/// Coarse classification of a column's dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Integer or floating point numbers
    Numeric,
    /// String or categorical values
    Text,
    /// Boolean values
    Boolean,
    /// Date, datetime, time or duration
    Temporal,
    /// Anything else
    Other,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        self == ColumnKind::Numeric
    }
}

/// Descriptive statistics of a numeric column, computed over present values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; NaN with fewer than two values.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Per-column profile.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub kind: ColumnKind,
    pub missing_count: usize,
    /// Share of missing cells, 0.0 - 100.0.
    pub missing_percentage: f64,
    /// Distinct present values.
    pub unique_count: usize,
    /// Cells equal to an earlier cell of the same column, missing included.
    pub duplicate_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
}

/// One equal-width histogram bin. The last bin of a histogram also counts
/// values equal to its `range_end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub range_start: f64,
    pub range_end: f64,
    pub count: usize,
}

/// Histogram of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHistogram {
    pub column: String,
    pub bins: Vec<HistogramBin>,
}

/// Square Pearson correlation matrix over numeric columns.
///
/// `values[i][j]` is the correlation of `columns[i]` with `columns[j]`.
/// Undefined entries are NaN (serialized as `null`).
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlation between two named columns.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Off-diagonal pairs with a defined correlation whose magnitude is at
    /// least `min_abs`, strongest first.
    pub fn strong_pairs(&self, min_abs: f64) -> Vec<(String, String, f64)> {
        let mut pairs = Vec::new();
        for i in 0..self.columns.len() {
            for j in (i + 1)..self.columns.len() {
                let r = self.values[i][j];
                if !r.is_nan() && r.abs() >= min_abs {
                    pairs.push((self.columns[i].clone(), self.columns[j].clone(), r));
                }
            }
        }
        pairs.sort_by(|a, b| b.2.abs().total_cmp(&a.2.abs()));
        pairs
    }
}

/// Full data-quality profile of a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<ColumnProfile>,
    pub duplicate_row_count: usize,
    pub histograms: Vec<ColumnHistogram>,
    /// Present only when the dataset has at least two numeric columns.
    pub correlation: Option<CorrelationMatrix>,
    pub warnings: Vec<String>,
    /// RFC 3339 timestamp.
    pub generated_at: String,
}

impl ProfileReport {
    /// Profile of a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Histogram of a column by name.
    pub fn histogram(&self, name: &str) -> Option<&ColumnHistogram> {
        self.histograms.iter().find(|h| h.column == name)
    }
}

/// Result of applying a cleaning plan.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub data: polars::prelude::DataFrame,
    /// Human-readable log of what each operation did.
    pub actions: Vec<String>,
    pub rows_before: usize,
    pub rows_after: usize,
    pub columns_before: usize,
    pub columns_after: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> CorrelationMatrix {
        CorrelationMatrix {
            columns: vec!["a".into(), "b".into(), "c".into()],
            values: vec![
                vec![1.0, 0.9, -0.95],
                vec![0.9, 1.0, f64::NAN],
                vec![-0.95, f64::NAN, f64::NAN],
            ],
        }
    }

    #[test]
    fn test_correlation_get() {
        let matrix = sample_matrix();
        assert_eq!(matrix.get("a", "b"), Some(0.9));
        assert_eq!(matrix.get("c", "a"), Some(-0.95));
        assert!(matrix.get("b", "c").unwrap().is_nan());
        assert_eq!(matrix.get("a", "zzz"), None);
    }

    #[test]
    fn test_strong_pairs_sorted_and_skip_nan() {
        let pairs = sample_matrix().strong_pairs(0.5);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "a");
        assert_eq!(pairs[0].1, "c");
        assert_eq!(pairs[1].1, "b");
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let json = serde_json::to_string(&sample_matrix()).unwrap();
        assert!(json.contains("null"));
    }

    #[test]
    fn test_column_kind_serialization() {
        let json = serde_json::to_string(&ColumnKind::Numeric).unwrap();
        assert_eq!(json, "\"numeric\"");
    }
}
