//! Page fetching.
//!
//! This module provides:
//! - The `PageSource` seam between fetching and scanning
//! - HTTP retrieval of the download listing
//! - Reading a saved copy of the page from disk

pub mod client;
pub mod local;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::Result;

pub use client::HttpSource;
pub use local::FileSource;

/// Something that yields the listing page as ordered lines.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Retrieve the whole page. Nothing is scanned until this returns.
    async fn fetch_lines(&self) -> Result<Vec<String>>;

    /// Human-readable origin, for messages.
    fn describe(&self) -> String;
}

/// Build the page source selected by the configuration.
pub fn source_from_config(config: &Config) -> Result<Box<dyn PageSource>> {
    match &config.source.input {
        Some(path) => Ok(Box::new(FileSource::new(path.clone()))),
        None => Ok(Box::new(HttpSource::new(
            &config.source.url,
            &config.source.user_agent,
            config.timeout(),
        )?)),
    }
}

/// Split a page body into lines, keeping order. Handles `\n` and `\r\n`.
pub fn split_lines(body: &str) -> Vec<String> {
    body.lines().map(str::to_string).collect()
}
