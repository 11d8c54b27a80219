//! Saved page on disk.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::fetch::{split_lines, PageSource};

/// Reads a previously saved listing page.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl PageSource for FileSource {
    async fn fetch_lines(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading {}", self.path.display());

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::Fetch(format!("{}: {}", self.path.display(), e)))?;

        // Saved pages are decoded the same lossy way as HTTP bodies
        let body = String::from_utf8_lossy(&bytes);
        Ok(split_lines(&body))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
