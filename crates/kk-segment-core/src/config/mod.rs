//! Configuration management for the segmentation pipeline.

mod sub_configs;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::clustering::KMeansConfig;
use crate::error::{SegmentError, SegmentResult};
use crate::recommend::RecommendationConfig;

pub use sub_configs::{LoggingConfig, PipelineConfig};

/// Environment variable selecting the environment-specific config file.
pub const ENV_SELECTOR: &str = "KK_SEGMENT_ENV";

/// Prefix of environment variable overrides, e.g. `KK_SEGMENT__CLUSTERING__K`.
pub const ENV_PREFIX: &str = "KK_SEGMENT";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub clustering: KMeansConfig,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{KK_SEGMENT_ENV}.toml (environment-specific)
    /// 3. Environment variables with KK_SEGMENT__ prefix
    pub fn load() -> SegmentResult<Self> {
        let env = std::env::var(ENV_SELECTOR).unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults for testing and one-off runs.
    pub fn default_config() -> Self {
        Self {
            clustering: KMeansConfig::default(),
            recommendation: RecommendationConfig::default(),
            pipeline: PipelineConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> SegmentResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SegmentError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| SegmentError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Fix both the clustering and recommendation seeds.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.clustering.seed = Some(seed);
        self.recommendation.seed = Some(seed);
        self
    }

    /// Validate configuration values.
    ///
    /// Parameter errors from the sub-configs are reported as `ConfigError`
    /// prefixed with their section.
    pub fn validate(&self) -> SegmentResult<()> {
        self.clustering
            .validate()
            .map_err(|e| section_error("clustering", e))?;
        self.recommendation
            .validate()
            .map_err(|e| section_error("recommendation", e))?;

        if self.logging.level.trim().is_empty() {
            return Err(SegmentError::ConfigError(
                "logging.level must not be empty".into(),
            ));
        }
        if !LoggingConfig::VALID_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(SegmentError::ConfigError(format!(
                "Invalid logging.format '{}'. Valid formats: {}",
                self.logging.format,
                LoggingConfig::VALID_FORMATS.join(", ")
            )));
        }

        Ok(())
    }
}

fn section_error(section: &str, error: SegmentError) -> SegmentError {
    match error {
        SegmentError::InvalidParameter(msg) => {
            SegmentError::ConfigError(format!("[{}] {}", section, msg))
        }
        other => other,
    }
}
