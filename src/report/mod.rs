//! Aggregation and reporting.
//!
//! This module provides:
//! - The running `Tally`
//! - Text and JSON report sinks
//! - `run_report`, which drains scan events into a sink

pub mod tally;
pub mod writer;

pub use tally::Tally;
pub use writer::{create_sink, JsonReport, ReportSink, TextReport};

use crate::config::MissingCountPolicy;
use crate::error::{Error, Result};
use crate::scan::ScanEvent;

/// Feed scan events into `sink`, then write the total.
///
/// Records are reported as they arrive. A row without a usable count line
/// is skipped with a warning, or aborts the run under
/// `MissingCountPolicy::Fail` (in which case no total is written).
pub fn run_report<I>(
    events: I,
    sink: &mut dyn ReportSink,
    policy: MissingCountPolicy,
) -> Result<Tally>
where
    I: IntoIterator<Item = ScanEvent>,
{
    let mut tally = Tally::default();

    for event in events {
        match event {
            ScanEvent::Record(record) => {
                sink.record(&record)?;
                tally.record(&record);
            }
            ScanEvent::MissingCount { name, line } => match policy {
                MissingCountPolicy::Skip => {
                    tracing::warn!("Skipping '{}' (line {}): no count line found", name, line);
                    tally.skip();
                }
                MissingCountPolicy::Fail => {
                    return Err(Error::MissingCount { name, line });
                }
            },
            ScanEvent::InvalidCount { name, line, digits } => match policy {
                MissingCountPolicy::Skip => {
                    tracing::warn!(
                        "Skipping '{}' (line {}): count {} is out of range",
                        name,
                        line,
                        digits
                    );
                    tally.skip();
                }
                MissingCountPolicy::Fail => {
                    return Err(Error::InvalidCount { name, line, digits });
                }
            },
        }
    }

    sink.finish(tally.total())?;
    Ok(tally)
}
