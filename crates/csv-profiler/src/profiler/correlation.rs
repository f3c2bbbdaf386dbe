//! Pairwise Pearson correlation.

/// Pearson correlation over rows where both values are present.
///
/// NaN when fewer than two rows overlap or either side has zero variance
/// over the overlap.
pub(crate) fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return f64::NAN;
    }

    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n as f64;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }

    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

/// Full symmetric matrix. The diagonal is 1.0 for a column with variance
/// and NaN for a constant one.
pub(crate) fn correlation_matrix(columns: &[Vec<Option<f64>>]) -> Vec<Vec<f64>> {
    let n = columns.len();
    let mut matrix = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        let self_r = pearson(&columns[i], &columns[i]);
        matrix[i][i] = if self_r.is_nan() { f64::NAN } else { 1.0 };
        for j in (i + 1)..n {
            let r = pearson(&columns[i], &columns[j]);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_perfect_positive() {
        let r = pearson(&some(&[1.0, 2.0, 3.0]), &some(&[2.0, 4.0, 6.0]));
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_negative() {
        let r = pearson(&some(&[1.0, 2.0, 3.0]), &some(&[3.0, 2.0, 1.0]));
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_variance_is_nan() {
        assert!(pearson(&some(&[1.0, 2.0, 3.0]), &some(&[5.0, 5.0, 5.0])).is_nan());
    }

    #[test]
    fn test_pairwise_complete_rows() {
        let x = vec![Some(1.0), Some(2.0), None, Some(3.0)];
        let y = vec![Some(10.0), Some(20.0), Some(999.0), Some(30.0)];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_too_few_rows_is_nan() {
        let x = vec![Some(1.0), None];
        let y = vec![Some(2.0), Some(3.0)];
        assert!(pearson(&x, &y).is_nan());
    }

    #[test]
    fn test_matrix_symmetric_with_unit_diagonal() {
        let columns = vec![
            some(&[1.0, 2.0, 3.0, 4.0]),
            some(&[2.0, 1.0, 4.0, 3.0]),
            some(&[1.0, 1.0, 1.0, 1.0]),
        ];
        let m = correlation_matrix(&columns);

        assert_eq!(m[0][0], 1.0);
        assert_eq!(m[1][1], 1.0);
        assert!(m[2][2].is_nan());
        assert_eq!(m[0][1], m[1][0]);
        assert!(m[0][2].is_nan());
        assert!(m[0][1] >= -1.0 && m[0][1] <= 1.0);
    }
}
