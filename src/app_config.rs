use crate::domain::AppearanceMode;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

pub const DEFAULT_NGS_URL: &str = "https://geodesy.noaa.gov/api/geoid/ght";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    ngs: Ngs,
    display: Display,
    logging: Logging,
}

impl AppConfig {
    /// Loads the built-in defaults, overridden by `config.toml`, `config_local.toml` and `GEOID__*` environment variables.
    pub fn load() -> Result<Self, AppConfigError> {
        let config = Self::with_defaults()?
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config_local").required(false))
            .add_source(Environment::with_prefix("GEOID").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("ngs.url", DEFAULT_NGS_URL)?
            .set_default("display.appearance", "system")?
            .set_default("logging.level", "warn")
    }

    pub fn ngs(&self) -> &Ngs {
        &self.ngs
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn logging(&self) -> &Logging {
        &self.logging
    }
}

#[derive(Debug, Deserialize)]
pub struct Ngs {
    url: String,
}

impl Ngs {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
pub struct Display {
    appearance: AppearanceMode,
}

impl Display {
    pub fn appearance(&self) -> AppearanceMode {
        self.appearance
    }
}

#[derive(Debug, Deserialize)]
pub struct Logging {
    #[serde(deserialize_with = "deserialize_level")]
    level: Level,
}

impl Logging {
    pub fn level(&self) -> Level {
        self.level
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let buf = String::deserialize(deserializer)?;
    Level::from_str(&buf).map_err(|_| serde::de::Error::custom(format!("invalid log level: {}", buf)))
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("could not load configuration: {0}")]
    Load(#[from] ConfigError),
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                ngs: Ngs {
                    url: "https://ngs.url/api/geoid/ght".to_string(),
                },
                display: Display {
                    appearance: AppearanceMode::Dark,
                },
                logging: Logging { level: Level::WARN },
            },
        }
    }

    pub fn ngs_url(mut self, url: String) -> Self {
        self.config.ngs.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
