//! Sample series model and line-oriented input parsing.
//!
//! A series holds the y-values in file order; each value's zero-based
//! position is its x-coordinate, so ordering is part of the data model
//! and nothing may reorder or mutate it after load.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::{InputConfig, LinePolicy};
use crate::error::{Result, StatsError};

/// Ordered, immutable sequence of samples. The position of each value is
/// its x-coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    values: Vec<f64>,
}

impl SampleSeries {
    /// Creates a series from raw values.
    ///
    /// # Errors
    /// Returns `NoData` if `values` is empty.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(StatsError::NoData);
        }
        Ok(Self { values })
    }

    /// Reads a series from a file containing one numeric value per line.
    ///
    /// # Errors
    /// Returns `InputAccess` if the file cannot be opened or read, and
    /// `InputParse`/`NoData` per [`SampleSeries::from_text`].
    pub fn from_file(path: impl AsRef<Path>, config: &InputConfig) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| StatsError::access(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "read input file");
        Self::from_text(&text, config)
    }

    /// Parses a series from line-oriented text.
    ///
    /// Lines are trimmed before parsing. Blank lines are dropped when
    /// `config.skip_blank` is set; otherwise they fall under the invalid
    /// line policy like any other unparsable line.
    ///
    /// # Errors
    /// Returns `InputParse` naming the 1-based line for the first
    /// unparsable line under `LinePolicy::Abort`, and `NoData` if no valid
    /// values remain.
    pub fn from_text(text: &str, config: &InputConfig) -> Result<Self> {
        let mut values = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() && config.skip_blank {
                debug!(line = line_no, "skipping blank line");
                continue;
            }

            match trimmed.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) => match config.invalid_lines {
                    LinePolicy::Abort => return Err(StatsError::parse(line_no, trimmed)),
                    LinePolicy::Skip => {
                        warn!(line = line_no, content = trimmed, "skipping unparsable line");
                    }
                },
            }
        }

        Self::new(values)
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series holds no samples. A constructed series
    /// never is; this exists for the `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The y-values in file order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Arithmetic mean of the values.
    #[must_use]
    pub fn mean(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = self.values.len() as f64;
        self.values.iter().sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_input() -> InputConfig {
        InputConfig::default()
    }

    #[test]
    fn parses_one_value_per_line() {
        let series = SampleSeries::from_text("1\n2.5\n-3\n", &default_input()).unwrap();
        assert_eq!(series.values(), &[1.0, 2.5, -3.0]);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn missing_final_newline_is_not_special() {
        let with = SampleSeries::from_text("1\n2\n", &default_input()).unwrap();
        let without = SampleSeries::from_text("1\n2", &default_input()).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let series = SampleSeries::from_text("  4.5 \n\t7\n", &default_input()).unwrap();
        assert_eq!(series.values(), &[4.5, 7.0]);
    }

    #[test]
    fn blank_lines_are_skipped_by_default() {
        let series = SampleSeries::from_text("1\n\n2\n   \n3\n", &default_input()).unwrap();
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn blank_line_aborts_when_skip_blank_disabled() {
        let config = InputConfig {
            skip_blank: false,
            ..default_input()
        };
        let err = SampleSeries::from_text("1\n\n2\n", &config).unwrap_err();
        assert!(matches!(err, StatsError::InputParse { line: 2, .. }));
    }

    #[test]
    fn unparsable_line_aborts_naming_the_line() {
        let err = SampleSeries::from_text("1\n2\nabc\n4\n", &default_input()).unwrap_err();
        match err {
            StatsError::InputParse { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "abc");
            }
            other => panic!("expected InputParse, got {other:?}"),
        }
    }

    #[test]
    fn skip_policy_drops_unparsable_lines() {
        let config = InputConfig {
            invalid_lines: LinePolicy::Skip,
            ..default_input()
        };
        let series = SampleSeries::from_text("1\nabc\n2\n", &config).unwrap();
        assert_eq!(series.values(), &[1.0, 2.0]);
    }

    #[test]
    fn empty_input_is_no_data() {
        let err = SampleSeries::from_text("", &default_input()).unwrap_err();
        assert!(matches!(err, StatsError::NoData));
    }

    #[test]
    fn all_blank_input_is_no_data() {
        let err = SampleSeries::from_text("\n  \n\n", &default_input()).unwrap_err();
        assert!(matches!(err, StatsError::NoData));
    }

    #[test]
    fn nonexistent_file_is_input_access() {
        let err =
            SampleSeries::from_file("tests/data/definitely-missing.txt", &default_input())
                .unwrap_err();
        assert!(matches!(err, StatsError::InputAccess { .. }));
    }

    #[test]
    fn mean_of_known_values() {
        let series = SampleSeries::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((series.mean() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn file_order_is_preserved() {
        let series = SampleSeries::from_text("3\n1\n2\n", &default_input()).unwrap();
        assert_eq!(series.values(), &[3.0, 1.0, 2.0]);
    }
}
