//! Character variety section - counts lowercase, uppercase, digit and symbol classes.

use crate::config::ClassifierConfig;
use crate::level::StrengthLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Human-readable name used in assessment reasons.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Digit => "numbers",
            Self::Symbol => "special characters",
        }
    }
}

/// Which character classes occur at least once in a password.
///
/// Letters and digits are ASCII only; any other character, including
/// non-ASCII letters, belongs to the symbol class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharacterClasses {
    /// Scans `password`. With `whitespace_is_symbol == false`, whitespace
    /// contributes to no class.
    pub fn scan(password: &str, whitespace_is_symbol: bool) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            match c {
                'a'..='z' => classes.lowercase = true,
                'A'..='Z' => classes.uppercase = true,
                '0'..='9' => classes.digit = true,
                c if c.is_whitespace() && !whitespace_is_symbol => {}
                _ => classes.symbol = true,
            }
        }
        classes
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digit => self.digit,
            CharacterClass::Symbol => self.symbol,
        }
    }

    /// Number of classes present, 0 to 4.
    pub fn diversity(&self) -> usize {
        CharacterClass::ALL
            .iter()
            .filter(|&&class| self.contains(class))
            .count()
    }

    pub fn missing(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|&class| !self.contains(class))
            .collect()
    }
}

/// Scores the password by character-class diversity.
///
/// Always yields a level: `Weak` for up to two classes, `Ok` for three,
/// `Strong` for four.
pub fn character_variety_section(password: &str, config: &ClassifierConfig) -> StrengthLevel {
    let classes = CharacterClasses::scan(password, config.whitespace_is_symbol());
    StrengthLevel::from_diversity(classes.diversity())
}
