//! Common pattern management
//!
//! Holds the regular expressions describing known-weak password families
//! and loads them from an external file.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Built-in weak password families.
pub const DEFAULT_COMMON_PATTERNS: &[&str] = &[
    "passw.*", "12345.*", "09876.*", "qwert.*", "asdfg.*", "zxcvb.*", "footb.*", "baseb.*",
    "drago.*",
];

static DEFAULT_SET: LazyLock<CommonPatterns> = LazyLock::new(|| {
    CommonPatterns::new(DEFAULT_COMMON_PATTERNS.iter().copied(), MatchMode::Prefix)
        .expect("built-in common patterns are valid")
});

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Pattern file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read pattern file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Pattern file is empty")]
    EmptyFile,
    #[error("At least one common pattern is required")]
    Empty,
    #[error("Invalid common pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Unknown match mode: {0}")]
    UnknownMode(String),
}

/// Where a pattern is allowed to match inside a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The pattern must match at the first character
    #[default]
    Prefix,
    /// The pattern may match any substring
    Anywhere,
}

impl FromStr for MatchMode {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefix" => Ok(Self::Prefix),
            "anywhere" => Ok(Self::Anywhere),
            _ => Err(PatternError::UnknownMode(s.to_string())),
        }
    }
}

/// Ordered, non-empty set of common password patterns.
///
/// Patterns are compiled exactly as written. Prefix mode is enforced at
/// match time, so inline flags such as `(?x)` keep their meaning.
#[derive(Debug, Clone)]
pub struct CommonPatterns {
    sources: Vec<String>,
    compiled: Vec<Regex>,
    mode: MatchMode,
}

impl CommonPatterns {
    /// Compiles `patterns` in order.
    ///
    /// # Errors
    ///
    /// Returns error if no pattern is given or a pattern is not a valid regex.
    pub fn new<I, S>(patterns: I, mode: MatchMode) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sources: Vec<String> = patterns.into_iter().map(Into::into).collect();
        if sources.is_empty() {
            return Err(PatternError::Empty);
        }

        let compiled = sources
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| PatternError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            sources,
            compiled,
            mode,
        })
    }

    /// Returns the built-in pattern set with prefix matching.
    pub fn defaults() -> Self {
        DEFAULT_SET.clone()
    }

    /// Loads patterns from a file, one regex per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Lines are
    /// trimmed but otherwise kept as written, so matching stays case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no pattern
    /// - A line is not a valid regex
    pub fn from_path<P: AsRef<Path>>(path: P, mode: MatchMode) -> Result<Self, PatternError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Pattern loading FAILED: FileNotFound {:?}", path);
            return Err(PatternError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        let lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();

        if lines.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Pattern loading FAILED: Empty file {:?}", path);
            return Err(PatternError::EmptyFile);
        }

        let patterns = Self::new(lines, mode)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Common patterns loaded: {} from {:?}", patterns.len(), path);

        Ok(patterns)
    }

    /// Returns the source of the first pattern matching `password`.
    pub fn first_match(&self, password: &str) -> Option<&str> {
        self.compiled
            .iter()
            .position(|re| self.matches(re, password))
            .map(|idx| self.sources[idx].as_str())
    }

    pub fn is_common(&self, password: &str) -> bool {
        self.compiled.iter().any(|re| self.matches(re, password))
    }

    // Leftmost match starts at 0 iff some match starts at 0.
    fn matches(&self, re: &Regex, password: &str) -> bool {
        match self.mode {
            MatchMode::Prefix => re.find(password).is_some_and(|m| m.start() == 0),
            MatchMode::Anywhere => re.is_match(password),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// A constructed set is never empty.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(String::as_str)
    }
}

impl Default for CommonPatterns {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn setup_with_tempfile(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_defaults_cover_known_families() {
        let patterns = CommonPatterns::defaults();
        assert_eq!(patterns.len(), DEFAULT_COMMON_PATTERNS.len());
        assert_eq!(patterns.mode(), MatchMode::Prefix);

        for pwd in ["password1", "123456789", "0987654", "qwerty!!", "asdfgh", "zxcvbnm",
            "football", "baseball", "dragon99"]
        {
            assert!(patterns.is_common(pwd), "{pwd} should be common");
        }
        assert!(!patterns.is_common("CorrectHorse"));
    }

    #[test]
    fn test_prefix_mode_ignores_inner_match() {
        let patterns = CommonPatterns::defaults();
        assert!(!patterns.is_common("mypassword"));
        assert!(!patterns.is_common("x12345678"));
    }

    #[test]
    fn test_anywhere_mode_matches_substring() {
        let patterns = CommonPatterns::new(DEFAULT_COMMON_PATTERNS.iter().copied(), MatchMode::Anywhere)
            .expect("valid patterns");
        assert!(patterns.is_common("mypassword"));
        assert_eq!(patterns.first_match("x12345678"), Some("12345.*"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let patterns = CommonPatterns::defaults();
        assert!(!patterns.is_common("Password1"));
        assert!(!patterns.is_common("QWERTY12"));

        let insensitive = CommonPatterns::new(["(?i)passw.*"], MatchMode::Prefix)
            .expect("valid pattern");
        assert!(insensitive.is_common("Password1"));
    }

    #[test]
    fn test_first_match_respects_order() {
        let patterns = CommonPatterns::new(["pass.*", "passw.*"], MatchMode::Prefix)
            .expect("valid patterns");
        assert_eq!(patterns.first_match("password"), Some("pass.*"));
        assert_eq!(patterns.first_match("hunter22"), None);
    }

    #[test]
    fn test_new_rejects_empty_set() {
        let result = CommonPatterns::new(Vec::<String>::new(), MatchMode::Prefix);
        assert!(matches!(result, Err(PatternError::Empty)));
    }

    #[test]
    fn test_new_rejects_invalid_regex() {
        let result = CommonPatterns::new(["passw.*", "(unclosed"], MatchMode::Prefix);
        match result {
            Err(PatternError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("Expected InvalidPattern error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = CommonPatterns::from_path("/nonexistent/path/patterns.txt", MatchMode::Prefix);
        assert!(matches!(result, Err(PatternError::FileNotFound(_))));
    }

    #[test]
    fn test_from_path_empty_file() {
        let temp_file = setup_with_tempfile(&["# only a comment", "", "   "]);
        let result = CommonPatterns::from_path(temp_file.path(), MatchMode::Prefix);
        assert!(matches!(result, Err(PatternError::EmptyFile)));
    }

    #[test]
    fn test_from_path_success() {
        let temp_file = setup_with_tempfile(&["# weak families", "letme.*", "", "  admin.*  "]);
        let patterns = CommonPatterns::from_path(temp_file.path(), MatchMode::Prefix)
            .expect("Failed to load patterns");

        assert_eq!(patterns.iter().collect::<Vec<_>>(), vec!["letme.*", "admin.*"]);
        assert!(patterns.is_common("letmein99"));
        assert!(patterns.is_common("admin2024"));
        assert!(!patterns.is_common("Administrator"));
    }

    #[test]
    fn test_shipped_asset_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/common-patterns.txt");
        let patterns = CommonPatterns::from_path(path, MatchMode::Prefix)
            .expect("Failed to load shipped patterns");
        assert_eq!(
            patterns.iter().collect::<Vec<_>>(),
            DEFAULT_COMMON_PATTERNS.to_vec()
        );
    }

    #[test]
    fn test_match_mode_from_str() {
        assert!(matches!("prefix".parse::<MatchMode>(), Ok(MatchMode::Prefix)));
        assert!(matches!("Anywhere".parse::<MatchMode>(), Ok(MatchMode::Anywhere)));
        match "suffix".parse::<MatchMode>() {
            Err(PatternError::UnknownMode(mode)) => assert_eq!(mode, "suffix"),
            other => panic!("Expected UnknownMode error, got {other:?}"),
        }
    }

    #[test]
    fn test_verbose_pattern_with_comment() {
        let pattern = "(?x) passw.* # weak family";

        let prefix = CommonPatterns::new([pattern], MatchMode::Prefix)
            .expect("verbose pattern compiles in prefix mode");
        assert!(prefix.is_common("password"));
        assert!(!prefix.is_common("mypassword"));
        assert_eq!(prefix.first_match("password1"), Some(pattern));

        let anywhere = CommonPatterns::new([pattern], MatchMode::Anywhere)
            .expect("verbose pattern compiles in anywhere mode");
        assert!(anywhere.is_common("password"));
        assert!(anywhere.is_common("mypassword"));
    }

    #[test]
    fn test_prefix_mode_with_alternation() {
        let patterns = CommonPatterns::new(["admin|root"], MatchMode::Prefix).expect("valid pattern");
        assert!(patterns.is_common("root1234"));
        assert!(patterns.is_common("admin1234"));
        assert!(!patterns.is_common("myroot12"));
    }

    #[test]
    fn test_from_path_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file.write_all(&[0xff, 0xfe]).expect("Failed to write");

        let result = CommonPatterns::from_path(temp_file.path(), MatchMode::Prefix);
        assert!(matches!(result, Err(PatternError::ReadError(_))));
    }
}
