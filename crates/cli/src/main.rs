// Path: crates/cli/src/main.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # roflscan
//!
//! Prints the latest consensus block of an Oasis network, then a report of
//! every ROFL app with live instances on a paratime (or of one given app).

use anyhow::Result;
use clap::{Parser, ValueEnum};
use roflscan_cli::error::error_codes;
use roflscan_cli::network::{NetworkName, DEFAULT_PARATIME};
use roflscan_cli::{AppSelection, ReportOptions};
use roflscan_telemetry::{init_tracing, LogFormat};
use roflscan_types::config::NetworksConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(
    name = "roflscan",
    version,
    about = "Report the active ROFL apps of an Oasis network.",
    long_about = "Connects to the given network, prints the latest consensus block, then lists every ROFL app \
                  with at least one running instance (or only APP_ID, if given) with its policy, metadata, \
                  secret names and instances."
)]
struct Cli {
    /// Network to query.
    #[clap(value_enum)]
    network: NetworkName,

    /// Bech32 app ID (rofl1...). Reports only this app, whether or not it has instances.
    app_id: Option<String>,

    /// ParaTime hosting the ROFL apps.
    #[clap(long, default_value = DEFAULT_PARATIME)]
    paratime: String,

    /// TOML file replacing the built-in network table.
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Format of log records written to stderr.
    #[clap(long, value_enum, default_value_t = LogFormatArg::Text)]
    log_format: LogFormatArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0.
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    if let Err(e) = init_tracing(cli.log_format.into()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(codes = ?error_codes(&*e), "Run failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let networks = match &cli.config {
        Some(path) => NetworksConfig::load(path)?,
        None => NetworksConfig::builtin()?,
    };

    let mut opts = ReportOptions::new(cli.network.as_str(), AppSelection::from_arg(cli.app_id));
    opts.paratime = cli.paratime;

    let summary = roflscan_cli::run(
        &networks,
        &opts,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await?;
    tracing::info!(
        height = summary.block_height,
        apps = summary.apps_reported,
        instance_failures = summary.instance_failures,
        "Report complete"
    );
    Ok(())
}
