//! Equal-width histogram binning.

use crate::types::HistogramBin;

/// Bin `values` into `bins` equal-width bins spanning their min and max.
///
/// Every bin is half-open `[start, end)` except the last, which also
/// counts values equal to its end. When all values are equal the range is
/// widened to `[v - 0.5, v + 0.5]`. An empty input yields no bins.
pub(crate) fn equal_width_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|i| if i == bins { hi } else { lo + width * i as f64 })
        .collect();

    let mut counts = vec![0usize; bins];
    for &v in values {
        let mut idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        // float error can land a value one bin off near an edge
        if idx > 0 && v < edges[idx] {
            idx -= 1;
        } else if idx < bins - 1 && v >= edges[idx + 1] {
            idx += 1;
        }
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            range_start: edges[i],
            range_end: edges[i + 1],
            count,
        })
        .collect()
}
