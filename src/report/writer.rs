//! Report writers.

use std::io::Write;

use serde::Serialize;

use crate::config::ReportFormat;
use crate::error::Result;
use crate::scan::DownloadRecord;

/// Destination for report records.
pub trait ReportSink {
    /// Called once per resolved record, in page order.
    fn record(&mut self, record: &DownloadRecord) -> Result<()>;

    /// Called once after the scan with the grand total.
    fn finish(&mut self, total: u64) -> Result<()>;
}

/// `<count>\t<name>` per record, streamed, then `Total: <sum>`.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn record(&mut self, record: &DownloadRecord) -> Result<()> {
        writeln!(self.out, "{}\t{}", record.count, record.name)?;
        Ok(())
    }

    fn finish(&mut self, total: u64) -> Result<()> {
        writeln!(self.out, "Total: {}", total)?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    releases: &'a [DownloadRecord],
    total: u64,
}

/// Buffers records and writes one JSON document on finish.
pub struct JsonReport<W: Write> {
    out: W,
    releases: Vec<DownloadRecord>,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            releases: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn record(&mut self, record: &DownloadRecord) -> Result<()> {
        self.releases.push(record.clone());
        Ok(())
    }

    fn finish(&mut self, total: u64) -> Result<()> {
        let document = JsonDocument {
            releases: &self.releases,
            total,
        };
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Build the sink for the configured format.
pub fn create_sink<'a, W: Write + 'a>(format: ReportFormat, out: W) -> Box<dyn ReportSink + 'a> {
    match format {
        ReportFormat::Text => Box::new(TextReport::new(out)),
        ReportFormat::Json => Box::new(JsonReport::new(out)),
    }
}
