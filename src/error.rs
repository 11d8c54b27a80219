//! Error types for the download-tally application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // Fetch errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to read page: {0}")]
    Fetch(String),

    // Page errors
    #[error("Release '{name}' (line {line}) has no count line")]
    MissingCount { name: String, line: usize },

    #[error("Release '{name}' (line {line}) has an out-of-range count: {digits}")]
    InvalidCount {
        name: String,
        line: usize,
        digits: String,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Http(_) | Error::HttpStatus { .. } | Error::Fetch(_) => exit_codes::FETCH_ERROR,
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::Pattern { .. }
            | Error::TomlParse(_)
            | Error::UrlParse(_) => exit_codes::CONFIG_ERROR,
            Error::MissingCount { .. } | Error::InvalidCount { .. } => {
                exit_codes::MALFORMED_PAGE
            }
            Error::Io(_) | Error::Json(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes. 2 is left to clap for usage errors.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FETCH_ERROR: i32 = 6;
    pub const CONFIG_ERROR: i32 = 3;
    pub const MALFORMED_PAGE: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
