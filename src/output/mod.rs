//! Output module for diagnostics and progress.
//!
//! Provides:
//! - Colored console messages
//! - Fetch spinner
//! - Scan statistics

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{print_error, print_info, print_warning};
pub use progress::create_spinner;
pub use stats::print_scan_summary;
