use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::config::AnalysisConfig;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads analysis configuration by merging the default config file and
    /// environment variables over the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> Result<AnalysisConfig> {
        Self::load_from("config/Config.toml")
    }

    /// Loads analysis configuration from a specific TOML file path.
    ///
    /// A missing file is not an error; the built-in defaults apply.
    /// Environment variables prefixed `LINEAR_STATS_` override file values,
    /// with `__` separating nesting levels (e.g.
    /// `LINEAR_STATS_INPUT__INVALID_LINES=skip`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_from(path: &str) -> Result<AnalysisConfig> {
        let config: AnalysisConfig = Figment::from(Serialized::defaults(AnalysisConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("LINEAR_STATS_").split("__"))
            .extract()?;

        Ok(config)
    }
}
