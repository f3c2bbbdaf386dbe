//! Descriptive statistics over present numeric values.

use crate::types::NumericSummary;

/// Arithmetic mean; `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1); NaN with fewer than two values.
pub(crate) fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}

/// Quantile of an ascending slice with linear interpolation between the
/// two closest ranks.
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Count, mean, std, min, quartiles and max; `None` when no values exist.
pub(crate) fn numeric_summary(values: &[f64]) -> Option<NumericSummary> {
    let mean = mean(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    Some(NumericSummary {
        count: sorted.len(),
        mean,
        std: sample_std(&sorted),
        min: sorted[0],
        q25: quantile_sorted(&sorted, 0.25)?,
        median: quantile_sorted(&sorted, 0.5)?,
        q75: quantile_sorted(&sorted, 0.75)?,
        max: sorted[sorted.len() - 1],
    })
}
