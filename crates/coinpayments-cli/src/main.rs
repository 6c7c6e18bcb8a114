/*
[INPUT]:  CLI arguments, YAML configuration file, COINPAYMENTS_* environment
[OUTPUT]: One API command executed and its response printed
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use coinpayments_cli::command::render_response;
use coinpayments_cli::{ApiCall, CliConfig};

#[derive(Parser, Debug)]
#[command(name = "coinpayments", version, about = "CoinPayments merchant API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Validate configuration and exit without calling the API
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    call: ApiCall,
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(config_path = %args.config_path.display(), dry_run = args.dry_run, "starting coinpayments");

    let mut config = load_config(&args.config_path)?;
    config.apply_env_overrides();
    let client = config.build_client()?;
    info!(endpoint = %client.endpoint(), "configuration loaded");

    let command = args.call.into_command();
    if args.dry_run {
        info!(cmd = command.name(), "dry-run requested; configuration validated");
        return Ok(ExitCode::SUCCESS);
    }

    let response = client
        .execute(&command)
        .with_context(|| format!("{} request failed", command.name()))?;
    let (rendered, failed) = render_response(&response)?;
    println!("{rendered}");

    if failed {
        warn!(cmd = command.name(), "gateway returned an HTTP error");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<CliConfig> {
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
