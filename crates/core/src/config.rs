use anyhow::anyhow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Policy for lines that fail to parse as a number.
    pub invalid_lines: LinePolicy,
    /// Whether blank lines are dropped before parsing.
    pub skip_blank: bool,
}

/// Policy for input lines that cannot be parsed as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePolicy {
    /// Reject the whole input on the first unparsable line (default)
    #[default]
    Abort,
    /// Drop unparsable lines and keep going
    Skip,
}

impl std::str::FromStr for LinePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" | "strict" => Ok(LinePolicy::Abort),
            "skip" | "lenient" => Ok(LinePolicy::Skip),
            _ => Err(anyhow!(
                "Invalid line policy: '{}'. Valid values: abort, skip",
                s
            )),
        }
    }
}

impl std::fmt::Display for LinePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinePolicy::Abort => write!(f, "abort"),
            LinePolicy::Skip => write!(f, "skip"),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            invalid_lines: LinePolicy::Abort,
            skip_blank: true,
        }
    }
}
