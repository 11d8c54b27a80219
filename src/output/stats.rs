//! Scan statistics.

use console::style;

use crate::report::Tally;

/// Print a one-line scan summary to stderr.
pub fn print_scan_summary(tally: &Tally) {
    if tally.skipped > 0 {
        eprintln!(
            "Scanned {} release(s), {} skipped without a count",
            style(tally.records).green(),
            style(tally.skipped).yellow()
        );
    } else {
        eprintln!("Scanned {} release(s)", style(tally.records).green());
    }
}
