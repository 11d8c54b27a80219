//! Pairs release rows with their count lines.

use crate::scan::matcher::{CountLine, RowMatcher};
use crate::scan::record::{DownloadRecord, ScanEvent};

/// Walks the page once, yielding an event per release row.
///
/// Every line is tested as a row marker, including lines inside an earlier
/// row's lookahead window. The count for a row at index `i` is the first
/// count line in `i + 1 ..= i + max_lookahead`, even when its value does
/// not fit a `u64`.
pub struct Scanner<'a, M: RowMatcher + ?Sized> {
    lines: &'a [String],
    matcher: &'a M,
    max_lookahead: usize,
    pos: usize,
}

impl<'a, M: RowMatcher + ?Sized> Scanner<'a, M> {
    pub fn new(lines: &'a [String], matcher: &'a M, max_lookahead: usize) -> Self {
        Self {
            lines,
            matcher,
            max_lookahead,
            pos: 0,
        }
    }

    fn find_count(&self, row: usize) -> Option<CountLine> {
        let start = row + 1;
        let end = start.saturating_add(self.max_lookahead).min(self.lines.len());
        if start >= end {
            return None;
        }

        self.lines[start..end]
            .iter()
            .find_map(|line| self.matcher.count(line))
    }
}

impl<M: RowMatcher + ?Sized> Iterator for Scanner<'_, M> {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        while self.pos < self.lines.len() {
            let row = self.pos;
            self.pos += 1;

            let Some(name) = self.matcher.release_name(&self.lines[row]) else {
                continue;
            };

            let event = match self.find_count(row) {
                Some(CountLine::Value(count)) => {
                    tracing::debug!("Line {}: {} = {}", row, name, count);
                    ScanEvent::Record(DownloadRecord::new(name, count, row))
                }
                Some(CountLine::Overflow(digits)) => ScanEvent::InvalidCount {
                    name,
                    line: row,
                    digits,
                },
                None => ScanEvent::MissingCount { name, line: row },
            };
            return Some(event);
        }

        None
    }
}
