//! Pearson correlation between line index and value.
//!
//! Measures the strength and direction of the linear relationship between
//! each sample's zero-based position and its value.

use crate::error::{Result, StatsError};
use crate::series::SampleSeries;

/// Calculates the Pearson correlation coefficient between each sample's
/// zero-based index and its value.
///
/// The result lies in [-1, 1] up to floating-point rounding.
///
/// # Errors
/// Returns `DegenerateInput` if the series has fewer than two samples or
/// the values have zero variance; the coefficient is mathematically
/// undefined in both cases.
pub fn pearson(series: &SampleSeries) -> Result<f64> {
    let n = series.len();
    if n < 2 {
        return Err(StatsError::degenerate(format!(
            "need at least 2 samples for correlation, got {n}"
        )));
    }

    #[allow(clippy::cast_precision_loss)]
    let n_f = n as f64;
    let mean_x = (n_f - 1.0) / 2.0;
    let mean_y = series.mean();

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (i, y) in series.values().iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let dx = i as f64 - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator < f64::EPSILON {
        return Err(StatsError::degenerate(
            "values have zero variance, correlation is undefined",
        ));
    }

    Ok(covariance / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> SampleSeries {
        SampleSeries::new(values.to_vec()).unwrap()
    }

    #[test]
    fn perfect_positive_trend_is_one() {
        let r = pearson(&series(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        assert!((r - 1.0).abs() < 1e-12, "r was {r}");
    }

    #[test]
    fn perfect_negative_trend_is_minus_one() {
        let r = pearson(&series(&[4.0, 3.0, 2.0, 1.0])).unwrap();
        assert!((r + 1.0).abs() < 1e-12, "r was {r}");
    }

    #[test]
    fn result_stays_within_unit_interval() {
        let r = pearson(&series(&[2.0, -7.5, 3.25, 0.0, 11.0, -4.5])).unwrap();
        assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&r), "r was {r}");
    }

    #[test]
    fn scaling_values_leaves_correlation_unchanged() {
        let base = series(&[1.0, 3.0, 2.0, 5.0, 4.0]);
        let scaled = series(&[2.5, 7.5, 5.0, 12.5, 10.0]);

        let r = pearson(&base).unwrap();
        let r_scaled = pearson(&scaled).unwrap();
        assert!((r - r_scaled).abs() < 1e-12, "{r} vs {r_scaled}");
    }

    #[test]
    fn noisy_upward_trend_is_strongly_positive() {
        let r = pearson(&series(&[1.0, 2.2, 2.8, 4.1, 4.9, 6.3])).unwrap();
        assert!(r > 0.95, "r was {r}");
    }

    #[test]
    fn constant_values_are_degenerate() {
        let err = pearson(&series(&[5.0, 5.0, 5.0, 5.0])).unwrap_err();
        assert!(err.is_degenerate(), "got {err:?}");
        assert!(err.to_string().contains("zero variance"));
    }

    #[test]
    fn single_sample_is_degenerate() {
        let err = pearson(&series(&[1.0])).unwrap_err();
        assert!(err.is_degenerate(), "got {err:?}");
    }
}
