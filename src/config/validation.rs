//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    // A local capture makes the URL irrelevant
    if config.source.input.is_none() {
        validate_url(&config.source.url)?;
    }
    validate_timeout(config.source.timeout_seconds)?;
    validate_lookahead(config.scan.max_lookahead)?;

    validate_pattern("patterns.row_marker", &config.patterns.row_marker, 0)?;
    validate_pattern("patterns.detail_link", &config.patterns.detail_link, 1)?;
    validate_pattern("patterns.count_line", &config.patterns.count_line, 1)?;

    Ok(())
}

/// Validate the listing URL.
pub fn validate_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "source.url".to_string(),
            message: "URL must not be empty".to_string(),
        });
    }

    let parsed = Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::ConfigValidation {
            field: "source.url".to_string(),
            message: format!("Unsupported scheme '{}' (expected http or https)", other),
        }),
    }
}

/// Validate the request timeout.
pub fn validate_timeout(seconds: u64) -> Result<()> {
    if seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "source.timeout_seconds".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    Ok(())
}

/// Validate the count-line lookahead window.
pub fn validate_lookahead(lines: usize) -> Result<()> {
    if lines == 0 {
        return Err(Error::ConfigValidation {
            field: "scan.max_lookahead".to_string(),
            message: "Lookahead must cover at least 1 line".to_string(),
        });
    }

    Ok(())
}

/// Check that a pattern compiles and has at least `min_groups` capture groups.
pub fn validate_pattern(field: &str, pattern: &str, min_groups: usize) -> Result<()> {
    let regex = Regex::new(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    // captures_len counts the implicit whole-match group
    let groups = regex.captures_len() - 1;
    if groups < min_groups {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Pattern '{}' needs at least {} capture group(s), found {}",
                pattern, min_groups, groups
            ),
        });
    }

    Ok(())
}
