//! Configuration structures and loading logic.

use crate::config::modes::{MissingCountPolicy, ReportFormat};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Download listing scanned when no URL is configured.
pub const DEFAULT_URL: &str = "http://code.google.com/p/semanticvectors/downloads/list";

/// Config file looked up in the current directory.
const LOCAL_CONFIG_FILE: &str = "download-tally.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub patterns: PatternConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the page comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Download listing URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Saved copy of the page to read instead of fetching.
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent sent with the request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            input: None,
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Line patterns used to recognise download rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Table cell that starts a download row.
    #[serde(default = "default_row_marker")]
    pub row_marker: String,

    /// Detail link; capture group 1 is the release name.
    #[serde(default = "default_detail_link")]
    pub detail_link: String,

    /// Line holding nothing but the download count.
    #[serde(default = "default_count_line")]
    pub count_line: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            row_marker: default_row_marker(),
            detail_link: default_detail_link(),
            count_line: default_count_line(),
        }
    }
}

/// Scanner behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Lines after a row marker searched for its count line.
    #[serde(default = "default_max_lookahead")]
    pub max_lookahead: usize,

    /// Fail the run when a row has no count line.
    #[serde(default)]
    pub strict: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_lookahead: default_max_lookahead(),
            strict: false,
        }
    }
}

/// Report output options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: ReportFormat,

    /// Suppress progress and informational messages.
    #[serde(default)]
    pub quiet: bool,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_row_marker() -> String {
    r#"<td class="vt col_4""#.to_string()
}

fn default_detail_link() -> String {
    r"detail\?name=(semanticvectors[^&]*)&".to_string()
}

fn default_count_line() -> String {
    r"^\s*(\d+)\s*$".to_string()
}

fn default_max_lookahead() -> usize {
    64
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the first configuration file found in the default locations,
    /// falling back to built-in defaults.
    pub fn discover() -> Result<Self> {
        for path in default_config_paths() {
            if path.is_file() {
                tracing::info!("Loading configuration from {}", path.display());
                return Self::load(&path);
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds)
    }

    /// Policy applied to rows without a usable count line.
    pub fn missing_count_policy(&self) -> MissingCountPolicy {
        MissingCountPolicy::from_strict(self.scan.strict)
    }
}

/// Candidate configuration files, in lookup order.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];

    if let Some(dirs) = ProjectDirs::from("", "", "download-tally") {
        paths.push(dirs.config_dir().join("config.toml"));
    }

    paths
}
