//! Regex utilities for quantify
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled patterns for release version schemes
pub mod version {
    use super::*;

    /// `v1.2.3`, `1.2.3-beta`
    pub static SEMANTIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)^v?\d+\.\d+\.\d+(-\w+)?$").expect("Invalid regex pattern")
    });

    /// `2024.01`, `24-05-3`, `2023.10.1.2-rc1`
    pub static CALENDAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?ix)
            ^
            (?P<year>\d{4}|\d{2})
            [-._]
            (?P<month>0[1-9]|1[0-2])
            [-._]?
            (?P<day_or_minor>0[1-9]|[1-9]|[1-2][0-9]|3[0-1])?
            [-._]?
            (?P<micro>\d+)?
            (?P<modifier>[-._]?(?:dev|alpha|beta|rc\d*))?
            $
            ",
        )
        .expect("Invalid regex pattern")
    });

    pub static ALPHANUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)^[a-z0-9._-]+$").expect("Invalid regex pattern")
    });

    pub fn is_semantic(text: &str) -> bool {
        SEMANTIC_PATTERN.is_match(text)
    }

    pub fn is_calendar(text: &str) -> bool {
        CALENDAR_PATTERN.is_match(text)
    }

    pub fn is_alphanumeric(text: &str) -> bool {
        ALPHANUMERIC_PATTERN.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_pattern() {
        assert!(version::is_semantic("1.2.3"));
        assert!(version::is_semantic("v0.10.0"));
        assert!(version::is_semantic("V2.0.1-beta"));
        assert!(version::is_semantic("1.0.0-rc1"));

        assert!(!version::is_semantic("1.2"));
        assert!(!version::is_semantic("1.2.3.4"));
        assert!(!version::is_semantic("release-1.2.3"));
    }

    #[test]
    fn test_calendar_pattern() {
        assert!(version::is_calendar("2024.01"));
        assert!(version::is_calendar("24.04"));
        assert!(version::is_calendar("2023-12-31"));
        assert!(version::is_calendar("2023_05"));
        assert!(version::is_calendar("2023.05-rc1"));
        assert!(version::is_calendar("2023.05.dev"));

        assert!(!version::is_calendar("2024.13"));
        assert!(!version::is_calendar("2024.00"));
        assert!(!version::is_calendar("1.05"));
        assert!(!version::is_calendar("2024.01-final"));
    }

    #[test]
    fn test_alphanumeric_pattern() {
        assert!(version::is_alphanumeric("release_1-final"));
        assert!(version::is_alphanumeric("v1.2"));

        assert!(!version::is_alphanumeric(""));
        assert!(!version::is_alphanumeric("release 1"));
        assert!(!version::is_alphanumeric("v1.0+build"));
    }
}
