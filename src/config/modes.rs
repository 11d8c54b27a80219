//! Report format and scan policy definitions.

use serde::{Deserialize, Serialize};

/// Available report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One tab-separated line per release, then the total (default).
    #[default]
    Text,
    /// A single JSON document with every release and the total.
    Json,
}

/// What to do with a release row whose count line is missing or out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingCountPolicy {
    /// Warn and keep scanning.
    #[default]
    Skip,
    /// Abort the run.
    Fail,
}

impl MissingCountPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            MissingCountPolicy::Fail
        } else {
            MissingCountPolicy::Skip
        }
    }
}
