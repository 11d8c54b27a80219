//! Fetch, scan and report in one pass.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::fetch::PageSource;
use crate::output::create_spinner;
use crate::report::{create_sink, run_report, Tally};
use crate::scan::{RegexMatcher, Scanner};

/// Retrieve the whole page, showing a spinner unless `quiet`.
pub async fn fetch_page(source: &dyn PageSource, quiet: bool) -> Result<Vec<String>> {
    let spinner = create_spinner(&format!("Fetching {}", source.describe()), quiet);
    let result = source.fetch_lines().await;
    spinner.finish_and_clear();

    let lines = result?;
    tracing::debug!("Fetched {} line(s) from {}", lines.len(), source.describe());
    Ok(lines)
}

/// Scan fetched lines and write the report to `out`.
pub fn tally_lines<W: Write>(config: &Config, lines: &[String], out: W) -> Result<Tally> {
    let matcher = RegexMatcher::new(&config.patterns)?;
    let scanner = Scanner::new(lines, &matcher, config.scan.max_lookahead);
    let mut sink = create_sink(config.output.format, out);

    run_report(scanner, sink.as_mut(), config.missing_count_policy())
}

/// Fetch from `source` and report to `out`. A failed fetch writes nothing.
pub async fn run<W: Write>(config: &Config, source: &dyn PageSource, out: W) -> Result<Tally> {
    let lines = fetch_page(source, config.output.quiet).await?;
    tally_lines(config, &lines, out)
}
