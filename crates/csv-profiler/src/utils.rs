//! Shared utilities for profiling and cleaning.
//!
//! Helpers that more than one module needs: dtype classification, value
//! extraction, duplicate rows, and null filling.

use crate::types::ColumnKind;
use polars::prelude::*;
use std::collections::HashMap;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType is a date/time type.
#[inline]
pub fn is_temporal_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Datetime(_, _) | DataType::Date | DataType::Time | DataType::Duration(_)
    )
}

/// Classify a DataType.
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if is_numeric_dtype(dtype) {
        ColumnKind::Numeric
    } else if is_temporal_dtype(dtype) {
        ColumnKind::Temporal
    } else if matches!(dtype, DataType::Boolean) {
        ColumnKind::Boolean
    } else if matches!(dtype, DataType::String | DataType::Categorical(_, _)) {
        ColumnKind::Text
    } else {
        ColumnKind::Other
    }
}

/// Names of the numeric columns, in dataset order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

// =============================================================================
// Value Extraction
// =============================================================================

/// Cast a numeric Series to f64 values, keeping nulls in place.
///
/// Non-finite values (NaN, inf, -inf) are reported as missing so they
/// cannot poison means, bin edges or correlations.
pub fn optional_f64_values(series: &Series) -> PolarsResult<Vec<Option<f64>>> {
    let float_series = series.cast(&DataType::Float64)?;
    let values = float_series
        .f64()?
        .into_iter()
        .map(|v| v.filter(|x| x.is_finite()))
        .collect();
    Ok(values)
}

/// Present, finite values of a numeric Series as f64.
pub fn present_f64_values(series: &Series) -> PolarsResult<Vec<f64>> {
    Ok(optional_f64_values(series)?.into_iter().flatten().collect())
}

/// Value identity of a single cell; `None` for a missing cell.
fn cell_key(series: &Series, idx: usize) -> PolarsResult<Option<String>> {
    Ok(match series.get(idx)? {
        AnyValue::Null => None,
        value => Some(value.to_string()),
    })
}

/// Distinct rows, keeping the first occurrence of each in original order.
///
/// All columns are compared by value; two missing cells compare equal.
pub fn unique_rows(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.unique_stable(None, UniqueKeepStrategy::First, None)
}

/// Row position of the first occurrence of a Series' mode.
///
/// Missing cells are ignored. On a frequency tie the value that occurs
/// earliest wins. Returns `None` when the Series has no present values.
pub fn mode_position(series: &Series) -> PolarsResult<Option<usize>> {
    // value -> (count, first row)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for idx in 0..series.len() {
        if let Some(key) = cell_key(series, idx)? {
            counts
                .entry(key)
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, idx));
        }
    }

    Ok(counts
        .into_values()
        .max_by(|(count_a, first_a), (count_b, first_b)| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(_, first)| first))
}

// =============================================================================
// Series Transformation Utilities
// =============================================================================

/// Fill null values in a numeric Series with a specific value.
///
/// The result is always Float64. Non-null cells, NaN and inf included, are
/// kept as they are.
pub fn fill_numeric_nulls(series: &Series, fill_value: f64) -> PolarsResult<Series> {
    let float_series = series.cast(&DataType::Float64)?;
    let values: Vec<f64> = float_series
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(fill_value))
        .collect();

    Ok(Series::new(series.name().clone(), values))
}

/// Fill null values with the value found at row `idx` of the same Series.
///
/// The dtype of the Series is preserved.
pub fn fill_nulls_from_row(series: &Series, idx: usize) -> PolarsResult<Series> {
    let fill = series.new_from_index(idx, series.len());
    let present = series.is_not_null();
    series.zip_with(&present, &fill)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_column_kind() {
        assert_eq!(column_kind(&DataType::Int64), ColumnKind::Numeric);
        assert_eq!(column_kind(&DataType::Float32), ColumnKind::Numeric);
        assert_eq!(column_kind(&DataType::String), ColumnKind::Text);
        assert_eq!(column_kind(&DataType::Boolean), ColumnKind::Boolean);
        assert_eq!(column_kind(&DataType::Date), ColumnKind::Temporal);
    }

    #[test]
    fn test_numeric_column_names() {
        let df = df![
            "a" => [1i64, 2],
            "b" => ["x", "y"],
            "c" => [1.5, 2.5],
        ]
        .unwrap();
        assert_eq!(numeric_column_names(&df), vec!["a", "c"]);
    }

    #[test]
    fn test_present_f64_values_skips_nulls() {
        let series = Series::new("v".into(), &[Some(1i64), None, Some(3)]);
        assert_eq!(present_f64_values(&series).unwrap(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_present_f64_values_skips_non_finite() {
        let series = Series::new(
            "v".into(),
            &[1.0, f64::INFINITY, f64::NAN, f64::NEG_INFINITY, 2.0],
        );
        assert_eq!(present_f64_values(&series).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_unique_rows_keeps_first_in_order() {
        let df = df![
            "a" => [Some(1i64), Some(1), None, None, Some(1)],
            "b" => ["x", "x", "y", "y", "z"],
        ]
        .unwrap();
        let expected = df![
            "a" => [Some(1i64), None, Some(1)],
            "b" => ["x", "y", "z"],
        ]
        .unwrap();
        assert!(unique_rows(&df).unwrap().equals_missing(&expected));
    }

    #[test]
    fn test_mode_position_most_frequent() {
        let series = Series::new("c".into(), &[Some("b"), Some("a"), None, Some("a")]);
        assert_eq!(mode_position(&series).unwrap(), Some(1));
    }

    #[test]
    fn test_mode_position_tie_prefers_earliest() {
        let series = Series::new("c".into(), &[Some("z"), Some("y"), Some("y"), Some("z")]);
        assert_eq!(mode_position(&series).unwrap(), Some(0));
    }

    #[test]
    fn test_mode_position_all_null() {
        let series = Series::new("c".into(), &[Option::<&str>::None, None]);
        assert_eq!(mode_position(&series).unwrap(), None);
    }

    #[test]
    fn test_fill_numeric_nulls() {
        let series = Series::new("test".into(), &[Some(1.0), None, Some(3.0)]);
        let filled = fill_numeric_nulls(&series, 0.0).unwrap();

        assert_eq!(filled.get(0).unwrap().try_extract::<f64>().unwrap(), 1.0);
        assert_eq!(filled.get(1).unwrap().try_extract::<f64>().unwrap(), 0.0);
        assert_eq!(filled.get(2).unwrap().try_extract::<f64>().unwrap(), 3.0);
    }

    #[test]
    fn test_fill_numeric_nulls_keeps_infinite_values() {
        let series = Series::new("test".into(), &[Some(f64::INFINITY), None]);
        let filled = fill_numeric_nulls(&series, 2.0).unwrap();

        let first = filled.get(0).unwrap().try_extract::<f64>().unwrap();
        assert_eq!(first, f64::INFINITY);
        assert_eq!(filled.get(1).unwrap().try_extract::<f64>().unwrap(), 2.0);
    }

    #[test]
    fn test_fill_nulls_from_row_keeps_dtype() {
        let series = Series::new("flag".into(), &[Some(true), None, Some(true)]);
        let filled = fill_nulls_from_row(&series, 0).unwrap();

        assert_eq!(filled.dtype(), &DataType::Boolean);
        assert_eq!(filled.null_count(), 0);
        assert_eq!(filled.get(1).unwrap(), AnyValue::Boolean(true));
    }
}
