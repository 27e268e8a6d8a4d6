//! Strength levels produced by the classifier.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ordered password strength category.
///
/// The derived ordering follows declaration order:
/// `Short < Common < Weak < Ok < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum StrengthLevel {
    /// Missing or shorter than the configured minimum length
    Short = 0,
    /// Matches a known-weak password family
    Common = 1,
    /// Fewer than three character classes
    Weak = 2,
    /// Exactly three character classes
    Ok = 3,
    /// All four character classes
    Strong = 4,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Strength level tag out of range: {0}")]
    OutOfRange(u8),
    #[error("Unknown strength level: {0}")]
    Unknown(String),
}

impl StrengthLevel {
    /// Every level, weakest first.
    pub const ALL: [StrengthLevel; 5] = [
        StrengthLevel::Short,
        StrengthLevel::Common,
        StrengthLevel::Weak,
        StrengthLevel::Ok,
        StrengthLevel::Strong,
    ];

    /// Maps a character-class count (0..=4) to a level.
    pub fn from_diversity(diversity: usize) -> Self {
        match diversity {
            0..=2 => Self::Weak,
            3 => Self::Ok,
            _ => Self::Strong,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Common => "common",
            Self::Weak => "weak",
            Self::Ok => "ok",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for StrengthLevel {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LevelError::OutOfRange(value))
    }
}

impl From<StrengthLevel> for u8 {
    fn from(level: StrengthLevel) -> Self {
        level.as_u8()
    }
}

impl FromStr for StrengthLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| LevelError::Unknown(s.to_string()))
    }
}
