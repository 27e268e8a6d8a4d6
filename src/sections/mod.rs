//! Password classification sections
//!
//! Each section inspects one aspect of the password. The classifier runs
//! them in a fixed order and stops at the first verdict.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::common_pattern_section;
pub use variety::{CharacterClass, CharacterClasses, character_variety_section};

use crate::config::ClassifierConfig;
use crate::level::StrengthLevel;

/// Result type for gating sections.
/// - `Some(level)` - Section reached a final verdict
/// - `None` - Section passed, continue with the next one
pub type SectionResult = Option<StrengthLevel>;

/// Signature shared by the gating sections.
pub type Section = fn(&str, &ClassifierConfig) -> SectionResult;
