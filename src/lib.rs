//! Password strength classification library
//!
//! This library classifies passwords into five ordered levels
//! (`Short < Common < Weak < Ok < Strong`) using length, a configurable
//! set of common password patterns and character-class diversity.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced, cancellable strength meter
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_MIN_LENGTH`: minimum password length (default: `8`)
//! - `PWD_PATTERNS_PATH`: custom common-pattern file
//!   (default: built-in patterns, also shipped as `./assets/common-patterns.txt`)
//! - `PWD_PATTERN_MODE`: `prefix` or `anywhere` (default: `prefix`)
//! - `PWD_WHITESPACE_IS_SYMBOL`: whether spaces count as special characters
//!   (default: `true`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_classify::{classify, init_config, ClassifierConfig, StrengthLevel, StrengthPolicy};
//! use secrecy::SecretString;
//!
//! // Initialize the process-wide configuration (call once at startup)
//! let config = init_config().expect("Invalid classifier configuration");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let level = classify(Some(&password), &config);
//! println!("Strength: {level}");
//!
//! // Registration API: shorter minimum, same rules
//! let lenient = ClassifierConfig::lenient();
//! if let Err(violation) = StrengthPolicy::default().enforce(Some(&password), &lenient) {
//!     println!("Rejected: {violation}");
//! }
//! assert!(level >= StrengthLevel::Short);
//! ```

// Internal modules
mod classifier;
mod config;
mod level;
mod patterns;
mod policy;
mod sections;

// Public API
pub use classifier::{Assessment, assess, classify, classify_password};
pub use config::{
    ClassifierConfig, ClassifierConfigBuilder, ConfigError, DEFAULT_MINIMUM_LENGTH,
    LENIENT_MINIMUM_LENGTH, active_config, init_config, init_config_with,
};
pub use level::{LevelError, StrengthLevel};
pub use patterns::{CommonPatterns, DEFAULT_COMMON_PATTERNS, MatchMode, PatternError};
pub use policy::{PolicyViolation, StrengthPolicy};
pub use sections::{CharacterClass, CharacterClasses};

#[cfg(feature = "async")]
pub use classifier::{METER_DEBOUNCE, classify_password_tx};
