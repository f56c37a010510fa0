//! Ordinary least-squares regression of value against line index.
//!
//! Fits `y = slope * x + intercept` where `x_i` is the zero-based position
//! of each sample and `y_i` is the sample value.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::series::SampleSeries;

/// Least-squares line fitted over (index, value) pairs.
///
/// The unique line minimizing squared vertical error:
/// ```text
/// slope     = Σ(x_i - mean_x)(y_i - mean_y) / Σ(x_i - mean_x)^2
/// intercept = mean_y - slope * mean_x
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionLine {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Y-intercept of the fitted line.
    pub intercept: f64,
}

impl RegressionLine {
    /// Fits the least-squares line to a series.
    ///
    /// # Errors
    /// Returns `DegenerateInput` if the series has fewer than two samples;
    /// with a single point the x-variance denominator is zero and no
    /// unique line exists.
    pub fn fit(series: &SampleSeries) -> Result<Self> {
        let n = series.len();
        if n < 2 {
            return Err(StatsError::degenerate(format!(
                "need at least 2 samples to fit a line, got {n}"
            )));
        }

        #[allow(clippy::cast_precision_loss)]
        let n_f = n as f64;
        // x-values are the integers 0..n
        let mean_x = (n_f - 1.0) / 2.0;
        let mean_y = series.mean();

        let mut covariance = 0.0;
        let mut var_x = 0.0;

        for (i, y) in series.values().iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let dx = i as f64 - mean_x;
            covariance += dx * (y - mean_y);
            var_x += dx * dx;
        }

        let slope = covariance / var_x;
        let intercept = mean_y - slope * mean_x;

        Ok(Self { slope, intercept })
    }

    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl std::fmt::Display for RegressionLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "y = {:.6}x + {:.6}", self.slope, self.intercept)
    }
}
