//! Classifier configuration
//!
//! Builds [`ClassifierConfig`] values and manages the process-wide active
//! configuration.

use crate::patterns::{CommonPatterns, MatchMode, PatternError};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

/// Minimum length used by sign-up and reset-password forms.
pub const DEFAULT_MINIMUM_LENGTH: usize = 8;

/// Minimum length used by the registration API.
///
/// That API also matched common patterns anywhere in the password; pair
/// this length with [`MatchMode::Anywhere`] to reproduce it fully.
pub const LENIENT_MINIMUM_LENGTH: usize = 5;

pub const ENV_MIN_LENGTH: &str = "PWD_MIN_LENGTH";
pub const ENV_PATTERNS_PATH: &str = "PWD_PATTERNS_PATH";
pub const ENV_PATTERN_MODE: &str = "PWD_PATTERN_MODE";
pub const ENV_WHITESPACE_IS_SYMBOL: &str = "PWD_WHITESPACE_IS_SYMBOL";

static ACTIVE_CONFIG: RwLock<Option<Arc<ClassifierConfig>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Minimum length must be at least 1")]
    ZeroMinimumLength,
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
    #[error(transparent)]
    Patterns(#[from] PatternError),
}

/// Immutable classification settings.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    minimum_length: usize,
    common_patterns: CommonPatterns,
    whitespace_is_symbol: bool,
}

impl ClassifierConfig {
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::default()
    }

    /// Built-in patterns in prefix mode with the registration API's minimum
    /// length of 5.
    ///
    /// Only the length matches that API: it searched for common patterns
    /// anywhere in the password, which needs [`MatchMode::Anywhere`].
    pub fn lenient() -> Self {
        Self {
            minimum_length: LENIENT_MINIMUM_LENGTH,
            ..Self::default()
        }
    }

    /// Builds a configuration from environment variables.
    ///
    /// - `PWD_MIN_LENGTH`: positive integer (default: 8)
    /// - `PWD_PATTERNS_PATH`: pattern file (default: built-in patterns)
    /// - `PWD_PATTERN_MODE`: `prefix` or `anywhere` (default: `prefix`)
    /// - `PWD_WHITESPACE_IS_SYMBOL`: `true` or `false` (default: `true`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Some(value) = read_env(ENV_MIN_LENGTH) {
            let length = value
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidEnv {
                    key: ENV_MIN_LENGTH,
                    value: value.clone(),
                })?;
            builder = builder.minimum_length(length);
        }

        let mode = match read_env(ENV_PATTERN_MODE) {
            Some(value) => value.parse::<MatchMode>().map_err(|_| ConfigError::InvalidEnv {
                key: ENV_PATTERN_MODE,
                value: value.clone(),
            })?,
            None => MatchMode::default(),
        };

        if let Some(path) = read_env(ENV_PATTERNS_PATH) {
            builder = builder.common_patterns(CommonPatterns::from_path(path, mode)?);
        } else if mode != MatchMode::Prefix {
            builder = builder.common_patterns(CommonPatterns::new(
                crate::patterns::DEFAULT_COMMON_PATTERNS.iter().copied(),
                mode,
            )?);
        }

        if let Some(value) = read_env(ENV_WHITESPACE_IS_SYMBOL) {
            let flag = match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        key: ENV_WHITESPACE_IS_SYMBOL,
                        value,
                    });
                }
            };
            builder = builder.whitespace_is_symbol(flag);
        }

        builder.build()
    }

    pub fn minimum_length(&self) -> usize {
        self.minimum_length
    }

    pub fn common_patterns(&self) -> &CommonPatterns {
        &self.common_patterns
    }

    /// Whether whitespace counts toward the symbol class.
    pub fn whitespace_is_symbol(&self) -> bool {
        self.whitespace_is_symbol
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            minimum_length: DEFAULT_MINIMUM_LENGTH,
            common_patterns: CommonPatterns::defaults(),
            whitespace_is_symbol: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassifierConfigBuilder {
    minimum_length: usize,
    common_patterns: Option<CommonPatterns>,
    whitespace_is_symbol: bool,
}

impl Default for ClassifierConfigBuilder {
    fn default() -> Self {
        Self {
            minimum_length: DEFAULT_MINIMUM_LENGTH,
            common_patterns: None,
            whitespace_is_symbol: true,
        }
    }
}

impl ClassifierConfigBuilder {
    pub fn minimum_length(mut self, length: usize) -> Self {
        self.minimum_length = length;
        self
    }

    pub fn common_patterns(mut self, patterns: CommonPatterns) -> Self {
        self.common_patterns = Some(patterns);
        self
    }

    /// Compiles `patterns` with prefix matching.
    pub fn patterns<I, S>(self, patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(self.common_patterns(CommonPatterns::new(patterns, MatchMode::Prefix)?))
    }

    pub fn whitespace_is_symbol(mut self, flag: bool) -> Self {
        self.whitespace_is_symbol = flag;
        self
    }

    pub fn build(self) -> Result<ClassifierConfig, ConfigError> {
        if self.minimum_length == 0 {
            return Err(ConfigError::ZeroMinimumLength);
        }
        Ok(ClassifierConfig {
            minimum_length: self.minimum_length,
            common_patterns: self.common_patterns.unwrap_or_default(),
            whitespace_is_symbol: self.whitespace_is_symbol,
        })
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Initializes the active configuration from environment variables.
///
/// Idempotent: once a configuration is installed, later calls return it
/// without reading the environment again.
///
/// # Errors
///
/// Returns error if an environment variable holds an invalid value or the
/// pattern file cannot be loaded.
pub fn init_config() -> Result<Arc<ClassifierConfig>, ConfigError> {
    if let Some(config) = installed_config() {
        return Ok(config);
    }

    let config = ClassifierConfig::from_env().inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Classifier configuration FAILED: {}", _e);
    })?;
    Ok(init_config_with(config))
}

/// Installs `config` as the active configuration unless one is already set.
///
/// Returns the configuration that is active after the call.
pub fn init_config_with(config: ClassifierConfig) -> Arc<ClassifierConfig> {
    let mut guard = ACTIVE_CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = guard.as_ref() {
        return Arc::clone(existing);
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Classifier configuration installed: minimum length {}, {} common patterns",
        config.minimum_length(),
        config.common_patterns().len()
    );

    let config = Arc::new(config);
    *guard = Some(Arc::clone(&config));
    config
}

/// Returns the active configuration, or the default one if none was installed.
pub fn active_config() -> Arc<ClassifierConfig> {
    installed_config().unwrap_or_else(|| Arc::new(ClassifierConfig::default()))
}

fn installed_config() -> Option<Arc<ClassifierConfig>> {
    let guard = ACTIVE_CONFIG.read().unwrap_or_else(PoisonError::into_inner);
    guard.clone()
}

/// Resets the active configuration for testing purposes.
#[cfg(test)]
pub fn reset_config_for_testing() {
    let mut guard = ACTIVE_CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
