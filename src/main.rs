//! download-tally - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use download_tally::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Result},
    fetch::source_from_config,
    output::{print_error, print_info, print_scan_summary, print_warning},
    pipeline,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging on stderr, stdout is the report
    let log_level = if args.debug {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let source = source_from_config(&config)?;
    if !config.output.quiet {
        print_info(&format!("Reading download listing from {}", source.describe()));
    }

    let stdout = std::io::stdout();
    let tally = pipeline::run(&config, source.as_ref(), stdout.lock()).await?;

    if !config.output.quiet {
        print_scan_summary(&tally);
        if tally.records == 0 {
            print_warning("No release rows matched; check the configured patterns");
        }
    }

    Ok(())
}
