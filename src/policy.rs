//! Acceptance policy built on top of the classifier.

use secrecy::SecretString;
use thiserror::Error;

use crate::classifier::classify;
use crate::config::ClassifierConfig;
use crate::level::StrengthLevel;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("Password must be at least {minimum_length} characters")]
    TooShort { minimum_length: usize },
    #[error("Password is too common")]
    TooCommon,
    #[error("Password is too weak, add uppercase letters, numbers and special characters")]
    TooWeak,
    #[error("Password strength {actual} is below the required {required}")]
    BelowThreshold {
        actual: StrengthLevel,
        required: StrengthLevel,
    },
}

/// Minimum strength a password must reach to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthPolicy {
    minimum: StrengthLevel,
}

impl StrengthPolicy {
    pub const fn new(minimum: StrengthLevel) -> Self {
        Self { minimum }
    }

    pub fn minimum(&self) -> StrengthLevel {
        self.minimum
    }

    /// Accepts `level` if it reaches the policy minimum.
    ///
    /// # Errors
    ///
    /// Returns the violation matching the rejected level.
    pub fn check(
        &self,
        level: StrengthLevel,
        config: &ClassifierConfig,
    ) -> Result<StrengthLevel, PolicyViolation> {
        if level >= self.minimum {
            return Ok(level);
        }
        Err(match level {
            StrengthLevel::Short => PolicyViolation::TooShort {
                minimum_length: config.minimum_length(),
            },
            StrengthLevel::Common => PolicyViolation::TooCommon,
            StrengthLevel::Weak => PolicyViolation::TooWeak,
            _ => PolicyViolation::BelowThreshold {
                actual: level,
                required: self.minimum,
            },
        })
    }

    /// Classifies `password` and checks the result.
    pub fn enforce(
        &self,
        password: Option<&SecretString>,
        config: &ClassifierConfig,
    ) -> Result<StrengthLevel, PolicyViolation> {
        let level = classify(password, config);
        let outcome = self.check(level, config);

        #[cfg(feature = "tracing")]
        {
            if let Err(ref violation) = outcome {
                tracing::debug!(%level, minimum = %self.minimum, "password rejected: {}", violation);
            }
        }

        outcome
    }
}

impl Default for StrengthPolicy {
    /// Rejects `Short`, `Common` and `Weak` passwords.
    fn default() -> Self {
        Self::new(StrengthLevel::Ok)
    }
}
