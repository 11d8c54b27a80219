//! Running download total.

use crate::scan::DownloadRecord;

/// Accumulates counts over one scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub total: u64,
    pub records: u64,
    pub skipped: u64,
}

impl Tally {
    /// Add a resolved record.
    pub fn record(&mut self, record: &DownloadRecord) {
        self.total = self.total.saturating_add(record.count);
        self.records += 1;
    }

    /// Count a row that was skipped for lack of a count line.
    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}
