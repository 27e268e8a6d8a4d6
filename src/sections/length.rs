//! Length section - checks password minimum length.

use super::SectionResult;
use crate::config::ClassifierConfig;
use crate::level::StrengthLevel;

/// Checks if the password meets the configured minimum length.
///
/// Length is counted in Unicode scalar values, not bytes or UTF-16 code
/// units. Characters outside the Basic Multilingual Plane (e.g. emoji)
/// count once, where a UTF-16 length counts them twice: `"😀😀😀"` is 3
/// characters long and `Short` under a minimum of 5.
///
/// # Returns
/// - `Some(StrengthLevel::Short)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &str, config: &ClassifierConfig) -> SectionResult {
    if password.chars().count() < config.minimum_length() {
        return Some(StrengthLevel::Short);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let config = ClassifierConfig::default();
        assert_eq!(length_section("Short1!", &config), Some(StrengthLevel::Short));
        assert_eq!(length_section("", &config), Some(StrengthLevel::Short));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let config = ClassifierConfig::default();
        assert_eq!(length_section("12345678", &config), None);

        let lenient = ClassifierConfig::lenient();
        assert_eq!(length_section("abcde", &lenient), None);
        assert_eq!(length_section("abcd", &lenient), Some(StrengthLevel::Short));
    }

    #[test]
    fn test_length_section_counts_characters() {
        let config = ClassifierConfig::lenient();
        // five characters, ten bytes
        assert_eq!(length_section("ééééé", &config), None);
        assert_eq!(length_section("éééé", &config), Some(StrengthLevel::Short));
    }

    #[test]
    fn test_length_section_astral_characters_count_once() {
        let config = ClassifierConfig::lenient();
        assert_eq!(length_section("😀😀😀", &config), Some(StrengthLevel::Short));
        assert_eq!(length_section("😀😀😀😀😀", &config), None);
    }
}
