//! Configuration for the safe context wrapper.
//!
//! Supports a YAML file and environment variable overrides. UCX's own
//! `UCX_*` variables are still read by UCX itself through `ucp_config_read`;
//! this file only decides what the shim asks for.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::params::{ContextParams, Features};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "UCX_SHIM_CONFIG";
/// Config file used when `UCX_SHIM_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "ucx-shim.yaml";

/// Shim configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    /// What to request from `ucp_init`.
    pub context: ContextConfig,
    /// How to build the `ucp_config_t` handed to `ucp_init`.
    pub ucx: UcxConfig,
}

/// A single `ucp_feature` by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Tag,
    Rma,
    Amo32,
    Amo64,
    Wakeup,
    Stream,
    Am,
}

impl Feature {
    pub fn flag(self) -> Features {
        match self {
            Feature::Tag => Features::TAG,
            Feature::Rma => Features::RMA,
            Feature::Amo32 => Features::AMO32,
            Feature::Amo64 => Features::AMO64,
            Feature::Wakeup => Features::WAKEUP,
            Feature::Stream => Features::STREAM,
            Feature::Am => Features::AM,
        }
    }
}

impl FromStr for Feature {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tag" => Ok(Feature::Tag),
            "rma" => Ok(Feature::Rma),
            "amo32" => Ok(Feature::Amo32),
            "amo64" => Ok(Feature::Amo64),
            "wakeup" => Ok(Feature::Wakeup),
            "stream" => Ok(Feature::Stream),
            "am" => Ok(Feature::Am),
            _ => Err(ConfigError::InvalidValue {
                key: "feature".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Context request configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Features to request.
    pub features: Vec<Feature>,
    /// Whether workers created from the context may be shared between threads.
    pub mt_workers_shared: bool,
    /// Expected number of endpoints.
    pub estimated_num_eps: Option<usize>,
    /// Expected number of processes per node.
    pub estimated_num_ppn: Option<usize>,
    /// Mask selecting the sender bits of a tag.
    pub tag_sender_mask: Option<u64>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            features: vec![Feature::Tag],
            mt_workers_shared: false,
            estimated_num_eps: None,
            estimated_num_ppn: None,
            tag_sender_mask: None,
        }
    }
}

impl ContextConfig {
    /// Combined feature flags.
    pub fn feature_flags(&self) -> Features {
        self.features
            .iter()
            .fold(Features::empty(), |acc, f| acc | f.flag())
    }

    /// Parameters for `ucp_init`.
    ///
    /// `mt_workers_shared` only enters the field mask when it is set.
    pub fn params(&self) -> ContextParams {
        let mut params = ContextParams::new().features(self.feature_flags());
        if self.mt_workers_shared {
            params = params.mt_workers_shared(true);
        }
        params.estimated_num_eps = self.estimated_num_eps;
        params.estimated_num_ppn = self.estimated_num_ppn;
        params.tag_sender_mask = self.tag_sender_mask;
        params
    }
}

/// Arguments for `ucp_config_read` and `ucp_config_modify`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UcxConfig {
    /// Prefix for UCX environment variables (`NULL` means `UCX_`).
    pub env_prefix: Option<String>,
    /// UCX configuration file.
    pub file: Option<String>,
    /// Options applied after reading, keyed by UCX option name without prefix.
    pub overrides: BTreeMap<String, String>,
}

impl ShimConfig {
    /// Load configuration from file and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&config_path).exists() {
            debug!(path = %config_path, "loading shim config");
            Self::from_file(&config_path)?
        } else {
            debug!(path = %config_path, "no shim config file, using defaults");
            Self::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.display().to_string(), e.to_string()))?;

        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings `ucp_init` is bound to refuse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.context.features.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "context.features".to_string(),
                value: "[]".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(features) = lookup("UCX_SHIM_FEATURES") {
            let parsed: Vec<Feature> = features
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(Feature::from_str)
                .collect::<Result<_, _>>()?;
            // UCX refuses a context without features
            if parsed.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "UCX_SHIM_FEATURES".to_string(),
                    value: features,
                });
            }
            self.context.features = parsed;
        }

        if let Some(shared) = lookup("UCX_SHIM_MT_WORKERS_SHARED") {
            self.context.mt_workers_shared =
                parse_value("UCX_SHIM_MT_WORKERS_SHARED", &shared)?;
        }

        if let Some(eps) = lookup("UCX_SHIM_ESTIMATED_NUM_EPS") {
            self.context.estimated_num_eps = Some(parse_value("UCX_SHIM_ESTIMATED_NUM_EPS", &eps)?);
        }

        if let Some(prefix) = lookup("UCX_SHIM_ENV_PREFIX") {
            self.ucx.env_prefix = Some(prefix);
        }

        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}
