use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use plugin_compat::{
    utils::logging, BuildCheck, CompatibilityValidator, Config, HostEnvironment,
};
use tracing::{error, info};

/// Checks a host environment against the configured minimum versions.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// API version reported by the host, e.g. `3.3.0-SNAPSHOT`
    #[arg(long)]
    api_version: String,

    /// Build descriptor; defaults to the API version string
    #[arg(long)]
    build: Option<String>,

    /// Installed companion plugin version, if any
    #[arg(long)]
    companion: Option<String>,

    /// Config file to use instead of `config/default` + `config/local`
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let _guard = match logging::init(&config.runtime) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::new().context("Failed to load configuration")?,
    };
    Ok(config)
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    info!("Starting plugin-compat v{}", env!("CARGO_PKG_VERSION"));

    let validator = CompatibilityValidator::from_config(config)?;
    let host = HostEnvironment {
        build_descriptor: cli.build.unwrap_or_else(|| cli.api_version.clone()),
        api_version: cli.api_version,
        companion_version: cli.companion,
    };

    let report = validator
        .validate_environment(&host)
        .context("Disabling plugin")?;

    match report.build {
        BuildCheck::Verified(build) => info!(build = build.value, rule = %build.rule, "Build verified"),
        BuildCheck::Exempted { marker } => info!(marker, "Build check skipped"),
    }
    Ok(())
}
