//! Scan output types.

use serde::Serialize;

/// One release and its download count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRecord {
    /// Release name taken from the detail link.
    pub name: String,

    /// Downloads reported on the count line.
    pub count: u64,

    /// Zero-based index of the row marker line.
    #[serde(skip)]
    pub line: usize,
}

impl DownloadRecord {
    pub fn new(name: impl Into<String>, count: u64, line: usize) -> Self {
        Self {
            name: name.into(),
            count,
            line,
        }
    }
}

/// What the scanner found at a release row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Row with a resolved count.
    Record(DownloadRecord),
    /// Row whose count line was not found within the lookahead window.
    MissingCount { name: String, line: usize },
    /// Row whose count line holds a number too large to tally.
    InvalidCount {
        name: String,
        line: usize,
        digits: String,
    },
}
