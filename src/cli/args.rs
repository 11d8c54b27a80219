//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, ReportFormat};

/// Download count reporter CLI.
#[derive(Parser, Debug)]
#[command(
    name = "download-tally",
    version,
    about = "Tally release download counts from a project's download listing",
    long_about = "Fetches a download listing page, pairs every release row with its download\n\
                  count and prints one `<count>\\t<name>` line per release followed by the total."
)]
pub struct Args {
    /// Download listing URL (defaults to the configured URL).
    #[arg(conflicts_with = "input")]
    pub url: Option<String>,

    /// Read a saved copy of the page instead of fetching it.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(short, long, env = "DOWNLOAD_TALLY_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Lines after a release row searched for its count.
    #[arg(long)]
    pub max_lookahead: Option<usize>,

    /// Fail when a release row has no count line instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Report format.
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Hide the progress spinner and informational messages.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI report format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Tab-separated lines and a total.
    Text,
    /// One JSON document.
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(url) = self.url {
            config.source.url = url;
            config.source.input = None;
        }

        if let Some(input) = self.input {
            config.source.input = Some(input);
        }

        if let Some(timeout) = self.timeout {
            config.source.timeout_seconds = timeout;
        }

        if let Some(lines) = self.max_lookahead {
            config.scan.max_lookahead = lines;
        }

        if let Some(format) = self.format {
            config.output.format = format.into();
        }

        // Boolean flags (only override if set)
        if self.strict {
            config.scan.strict = true;
        }

        if self.quiet {
            config.output.quiet = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_keeps_defaults() {
        let args = Args::try_parse_from(["download-tally"]).unwrap();
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.source.url, crate::config::DEFAULT_URL);
        assert!(config.source.input.is_none());
        assert!(!config.scan.strict);
        assert_eq!(config.output.format, ReportFormat::Text);
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "download-tally",
            "https://example.org/list",
            "--timeout",
            "5",
            "--max-lookahead",
            "8",
            "--strict",
            "--format",
            "json",
            "-q",
        ])
        .unwrap();

        let mut config = Config::default();
        config.source.input = Some("stale.html".into());
        args.merge_into_config(&mut config);

        assert_eq!(config.source.url, "https://example.org/list");
        assert!(config.source.input.is_none());
        assert_eq!(config.source.timeout_seconds, 5);
        assert_eq!(config.scan.max_lookahead, 8);
        assert!(config.scan.strict);
        assert!(config.output.quiet);
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_input_flag() {
        let args = Args::try_parse_from(["download-tally", "--input", "page.html"]).unwrap();
        let mut config = Config::default();
        args.merge_into_config(&mut config);
        assert_eq!(config.source.input, Some(PathBuf::from("page.html")));
    }

    #[test]
    fn test_url_conflicts_with_input() {
        let result =
            Args::try_parse_from(["download-tally", "https://example.org", "-i", "page.html"]);
        assert!(result.is_err());
    }
}
