//! Configuration module for download-tally.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Locating the default configuration file
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, OutputConfig, PatternConfig, ScanConfig, SourceConfig, DEFAULT_URL};
pub use modes::{MissingCountPolicy, ReportFormat};
pub use validation::validate_config;
