//! notifykit - demonstration binary
//!
//! Builds a welcome email and a shipping SMS and delivers each to its
//! observer on standard output.

use anyhow::Result;
use clap::Parser;
use notifykit::{app, cli::Cli, config::Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    // RUST_LOG overrides the configured level. Logs go to stderr so stdout
    // carries only observer output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        init_logging("error");
        error!("Failed to load configuration: {}", err);
        std::process::exit(1);
    });

    init_logging(&config.log_level);

    info!("notifykit starting up...");
    info!("Log Level: {}", config.log_level);
    info!("Output Format: {}", config.output.format);
    info!("Type Note: {}", config.demo.show_type_note);

    let stdout = std::io::stdout();
    app::run(&config, &mut stdout.lock())?;

    info!("notifykit finished.");
    Ok(())
}
