//! Row and count matching.

use regex::Regex;

use crate::config::PatternConfig;
use crate::error::{Error, Result};

/// Recognises release rows and count lines in the listing page.
///
/// The scanner only talks to this trait, so the regex strategy can be
/// replaced by a real HTML parse without touching aggregation.
pub trait RowMatcher {
    /// Release name if `line` starts a download row and names a release.
    fn release_name(&self, line: &str) -> Option<String>;

    /// Classify `line` as a count line, or `None` if it is not one.
    fn count(&self, line: &str) -> Option<CountLine>;
}

/// A line holding nothing but an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountLine {
    /// The download count.
    Value(u64),
    /// Digits that do not fit a `u64`.
    Overflow(String),
}

/// Line-oriented regex matcher.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    row_marker: Regex,
    detail_link: Regex,
    count_line: Regex,
}

impl RegexMatcher {
    /// Compile the configured patterns.
    pub fn new(patterns: &PatternConfig) -> Result<Self> {
        Ok(Self {
            row_marker: compile(&patterns.row_marker)?,
            detail_link: compile(&patterns.detail_link)?,
            count_line: compile(&patterns.count_line)?,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

impl RowMatcher for RegexMatcher {
    fn release_name(&self, line: &str) -> Option<String> {
        if !self.row_marker.is_match(line) {
            return None;
        }

        let captures = self.detail_link.captures(line)?;
        captures.get(1).map(|m| m.as_str().to_string())
    }

    fn count(&self, line: &str) -> Option<CountLine> {
        let captures = self.count_line.captures(line)?;
        let digits = captures.get(1)?.as_str();

        Some(match digits.parse() {
            Ok(value) => CountLine::Value(value),
            Err(_) => CountLine::Overflow(digits.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_matcher() -> RegexMatcher {
        RegexMatcher::new(&PatternConfig::default()).unwrap()
    }

    const ROW: &str = r#"<td class="vt col_4"><a href="detail?name=semanticvectors-5.0.jar&amp;can=2&amp;q=">"#;

    #[test]
    fn test_release_name_stops_at_ampersand() {
        let matcher = default_matcher();
        assert_eq!(
            matcher.release_name(ROW),
            Some("semanticvectors-5.0.jar".to_string())
        );
    }

    #[test]
    fn test_release_name_requires_row_marker() {
        let matcher = default_matcher();
        let line = r#"<td class="vt col_2"><a href="detail?name=semanticvectors-5.0&can=2">"#;
        assert_eq!(matcher.release_name(line), None);
    }

    #[test]
    fn test_release_name_requires_detail_link() {
        let matcher = default_matcher();
        assert_eq!(matcher.release_name(r#"<td class="vt col_4">"#), None);
        // No terminating '&'
        let unterminated = r#"<td class="vt col_4"><a href="detail?name=semanticvectors-5.0">"#;
        assert_eq!(matcher.release_name(unterminated), None);
    }

    #[test]
    fn test_count_with_whitespace_padding() {
        let matcher = default_matcher();
        assert_eq!(matcher.count("   42   "), Some(CountLine::Value(42)));
        assert_eq!(matcher.count("\t0"), Some(CountLine::Value(0)));
        assert_eq!(matcher.count("120"), Some(CountLine::Value(120)));
    }

    #[test]
    fn test_count_rejects_non_lone_integers() {
        let matcher = default_matcher();
        assert_eq!(matcher.count("<td>42</td>"), None);
        assert_eq!(matcher.count("42 downloads"), None);
        assert_eq!(matcher.count("   "), None);
        assert_eq!(matcher.count("-3"), None);
    }

    #[test]
    fn test_count_overflow_is_still_a_count_line() {
        let matcher = default_matcher();
        assert_eq!(
            matcher.count("  99999999999999999999999 "),
            Some(CountLine::Overflow("99999999999999999999999".to_string()))
        );
        assert_eq!(
            matcher.count("18446744073709551615"),
            Some(CountLine::Value(u64::MAX))
        );
    }

    #[test]
    fn test_custom_patterns() {
        let patterns = PatternConfig {
            row_marker: r#"class="release""#.to_string(),
            detail_link: r"/releases/([^/]+)/".to_string(),
            count_line: r"^\s*downloads:\s*(\d+)\s*$".to_string(),
        };
        let matcher = RegexMatcher::new(&patterns).unwrap();
        assert_eq!(
            matcher.release_name(r#"<li class="release"><a href="/releases/v1.2/">"#),
            Some("v1.2".to_string())
        );
        assert_eq!(matcher.count(" downloads: 9 "), Some(CountLine::Value(9)));
    }

    #[test]
    fn test_invalid_pattern() {
        let patterns = PatternConfig {
            count_line: r"(\d+".to_string(),
            ..PatternConfig::default()
        };
        assert!(matches!(
            RegexMatcher::new(&patterns),
            Err(Error::Pattern { .. })
        ));
    }
}
