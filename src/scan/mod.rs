//! Line scanning for download rows.
//!
//! Provides:
//! - The `RowMatcher` interface and its regex implementation
//! - The scanner pairing each release row with its count line
//! - Record and event types

pub mod matcher;
pub mod record;
pub mod scanner;

pub use matcher::{CountLine, RegexMatcher, RowMatcher};
pub use record::{DownloadRecord, ScanEvent};
pub use scanner::Scanner;
