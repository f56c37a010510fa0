//! Error types for the statistics pipeline.
//!
//! Provides typed errors for input access, line parsing, and datasets
//! for which a statistic is mathematically undefined.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading samples or computing statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Input file could not be opened or read.
    #[error("cannot read input file '{}': {source}", .path.display())]
    InputAccess {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line could not be parsed as a floating-point number.
    #[error("unable to parse line {line}: '{content}'")]
    InputParse {
        /// 1-based line number in the input file.
        line: usize,
        /// The offending line content, trimmed.
        content: String,
    },

    /// The input contained no valid numbers.
    #[error("no data found in input")]
    NoData,

    /// The dataset is too small or too flat for the statistic to be defined.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

impl StatsError {
    /// Creates an input access error for the given path.
    pub fn access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputAccess {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error for a 1-based line number.
    pub fn parse(line: usize, content: impl Into<String>) -> Self {
        Self::InputParse {
            line,
            content: content.into(),
        }
    }

    /// Creates a degenerate input error.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput(reason.into())
    }

    /// Returns true if the statistic is undefined for the data, as opposed
    /// to the input being unreadable or malformed.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput(_))
    }
}

/// Result type alias for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;
