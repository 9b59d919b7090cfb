//! Configuration system for SwissForge.
//!
//! Load pairing configuration from TOML or YAML files to control dead-end
//! handling and result verification without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use swissforge_config::{DeadEndPolicy, PairingConfig};
//!
//! let config = PairingConfig::from_toml_str(r#"
//!     environment_mode = "full_assert"
//!     dead_end_policy = "exhaustive_fallback"
//!
//!     [fallback]
//!     node_limit = 5000
//! "#).unwrap();
//!
//! assert_eq!(config.dead_end_policy, DeadEndPolicy::ExhaustiveFallback);
//! assert_eq!(config.fallback_node_limit(), 5000);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use swissforge_config::PairingConfig;
//!
//! let config = PairingConfig::load_or_default("pairing.toml").unwrap();
//! // Proceeds with defaults if file doesn't exist, fails if it is malformed
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use swissforge_core::SwissForgeError;
use thiserror::Error;

/// Search nodes the exhaustive fallback may expand when none is configured.
pub const DEFAULT_FALLBACK_NODE_LIMIT: u64 = 100_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for SwissForgeError {
    fn from(err: ConfigError) -> Self {
        SwissForgeError::Config(err.to_string())
    }
}

/// Main pairing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PairingConfig {
    /// Environment mode affecting result verification.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// What to do when the greedy pass reaches a dead end.
    #[serde(default)]
    pub dead_end_policy: DeadEndPolicy,

    /// Exhaustive fallback configuration.
    #[serde(default)]
    pub fallback: Option<FallbackConfig>,
}

impl PairingConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Like [`load`](Self::load), but a missing file yields the default
    /// configuration. A file that exists must still parse and validate.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the dead-end policy.
    pub fn with_dead_end_policy(mut self, policy: DeadEndPolicy) -> Self {
        self.dead_end_policy = policy;
        self
    }

    /// Enables the exhaustive fallback with the given node limit.
    pub fn with_fallback_node_limit(mut self, node_limit: u64) -> Self {
        self.dead_end_policy = DeadEndPolicy::ExhaustiveFallback;
        self.fallback = Some(FallbackConfig {
            node_limit: Some(node_limit),
        });
        self
    }

    /// Node limit for the exhaustive fallback.
    pub fn fallback_node_limit(&self) -> u64 {
        self.fallback
            .as_ref()
            .and_then(|f| f.node_limit)
            .unwrap_or(DEFAULT_FALLBACK_NODE_LIMIT)
    }

    /// Whether results must be re-verified before they are returned.
    pub fn is_full_assert(&self) -> bool {
        self.environment_mode == EnvironmentMode::FullAssert
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback.as_ref().and_then(|f| f.node_limit) == Some(0) {
            return Err(ConfigError::Invalid(
                "fallback.node_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Environment mode affecting engine behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Results are returned as computed.
    #[default]
    Production,

    /// Every result is re-checked against the round invariants.
    FullAssert,
}

/// Behavior when a pooled competitor runs out of legal opponents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadEndPolicy {
    /// Surface `DeadEndPairing` to the caller.
    #[default]
    Fail,

    /// Retry the round with a bounded backtracking search.
    ExhaustiveFallback,
}

/// Exhaustive fallback configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FallbackConfig {
    /// Maximum number of search nodes to expand.
    pub node_limit: Option<u64>,
}
