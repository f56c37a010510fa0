pub mod config;
pub mod config_loader;
pub mod correlation;
pub mod error;
pub mod regression;
pub mod report;
pub mod series;

pub use config::{AnalysisConfig, InputConfig, LinePolicy};
pub use config_loader::ConfigLoader;
pub use correlation::pearson;
pub use error::{Result, StatsError};
pub use regression::RegressionLine;
pub use report::StatsReport;
pub use series::SampleSeries;
