//! Report assembly and stdout rendering.
//!
//! Both statistics are computed together so a failure in either produces
//! no partial output.

use serde::{Deserialize, Serialize};

use crate::correlation::pearson;
use crate::error::Result;
use crate::regression::RegressionLine;
use crate::series::SampleSeries;

/// Computed statistics for one input series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Fitted least-squares line.
    pub line: RegressionLine,
    /// Pearson correlation coefficient [-1, 1].
    pub correlation: f64,
    /// Number of samples used.
    pub sample_size: usize,
}

impl StatsReport {
    /// Computes both statistics for a series.
    ///
    /// # Errors
    /// Returns `DegenerateInput` if either statistic is undefined for the
    /// series; no partial report is produced.
    pub fn from_series(series: &SampleSeries) -> Result<Self> {
        let line = RegressionLine::fit(series)?;
        let correlation = pearson(series)?;

        Ok(Self {
            line,
            correlation,
            sample_size: series.len(),
        })
    }

    /// Renders the two result lines exactly as they appear on stdout.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "Linear Regression Line: {}\nPearson Correlation Coefficient: {:.10}",
            self.line, self.correlation
        )
    }
}
