//! Common pattern section - detects known-weak password families.

use super::SectionResult;
use crate::config::ClassifierConfig;
use crate::level::StrengthLevel;

/// Checks the password against the configured common patterns.
///
/// # Returns
/// - `Some(StrengthLevel::Common)` if any pattern matches
/// - `None` if no pattern matches
pub fn common_pattern_section(password: &str, config: &ClassifierConfig) -> SectionResult {
    if config.common_patterns().is_common(password) {
        return Some(StrengthLevel::Common);
    }
    None
}
