//! download-tally - download count reporter for release listing pages
//!
//! Fetches a project's download listing, pairs each release row with the
//! count line that follows it, and prints one line per release plus the
//! grand total.
//!
//! # Example
//!
//! ```no_run
//! use download_tally::{fetch::source_from_config, pipeline, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let source = source_from_config(&config)?;
//!     let tally = pipeline::run(&config, source.as_ref(), std::io::stdout()).await?;
//!     eprintln!("{} release(s)", tally.records);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod scan;

// Re-exports for convenience
pub use config::{Config, ReportFormat};
pub use error::{Error, Result};
pub use fetch::{FileSource, HttpSource, PageSource};
pub use report::{run_report, Tally};
pub use scan::{CountLine, DownloadRecord, RegexMatcher, RowMatcher, ScanEvent, Scanner};
