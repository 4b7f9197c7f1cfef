// Path: crates/cli/src/report/mod.rs
//! The report pipeline.

pub mod consensus;
pub mod discovery;
pub mod instances;
pub mod render;

#[cfg(test)]
mod fixtures;

pub use discovery::AppSelection;

use crate::error::ReportError;
use crate::network;
use crate::util::titlecase;
use roflscan_client::{Connection, ConsensusApi, RoflApi, RoflClient};
use roflscan_types::config::NetworksConfig;
use std::io::Write;
use std::time::Duration;
use tracing::Instrument;

/// Pause before rendering each app after the first, to bound the request
/// rate against the upstream service.
pub const APP_RENDER_DELAY: Duration = Duration::from_millis(500);

/// Parameters of one run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub network: String,
    pub paratime: String,
    pub selection: AppSelection,
    pub app_delay: Duration,
}

impl ReportOptions {
    pub fn new(network: impl Into<String>, selection: AppSelection) -> Self {
        Self {
            network: network.into(),
            paratime: network::DEFAULT_PARATIME.to_string(),
            selection,
            app_delay: APP_RENDER_DELAY,
        }
    }
}

/// What a completed run reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub block_height: u64,
    pub apps_reported: usize,
    pub instance_failures: usize,
}

/// Runs the whole pipeline against the network selected from `config`.
pub async fn run<O, E>(
    config: &NetworksConfig,
    opts: &ReportOptions,
    out: &mut O,
    err: &mut E,
) -> Result<ReportSummary, ReportError>
where
    O: Write,
    E: Write,
{
    let selection = network::select(config, &opts.network, &opts.paratime)?;

    writeln!(out, "Connecting to {}...", opts.network)?;
    let conn = Connection::connect(selection.network).map_err(ReportError::Transport)?;
    let rofl = RoflClient::new(conn.runtime(selection.paratime));

    run_with(&conn.consensus(), &rofl, opts, out, err).await
}

/// Runs the pipeline from the consensus report onwards with the given clients.
pub async fn run_with<C, R, O, E>(
    consensus: &C,
    rofl: &R,
    opts: &ReportOptions,
    out: &mut O,
    err: &mut E,
) -> Result<ReportSummary, ReportError>
where
    C: ConsensusApi + ?Sized,
    R: RoflApi + ?Sized,
    O: Write,
    E: Write,
{
    let block = consensus::report_latest_block(consensus, out).await?;

    writeln!(out)?;
    writeln!(
        out,
        "--- Querying {} ROFL Apps on {} ---",
        titlecase(&opts.paratime),
        opts.network
    )?;

    let apps = discovery::discover_apps(rofl, &opts.selection).await?;
    match &opts.selection {
        AppSelection::Single(id) => {
            writeln!(out)?;
            writeln!(out, "Querying specific app: {}", id)?;
            writeln!(out)?;
        }
        AppSelection::Active => {
            writeln!(out)?;
            writeln!(out, "Total active ROFL apps found: {}", apps.len())?;
            writeln!(out)?;
        }
    }

    let mut instance_failures = 0;
    for (i, app) in apps.iter().enumerate() {
        if i > 0 && !opts.app_delay.is_zero() {
            tokio::time::sleep(opts.app_delay).await;
        }

        let resolved = instances::resolve_instances(rofl, &app.id)
            .instrument(tracing::info_span!("resolve_instances", app = %app.id))
            .await;
        match resolved {
            Ok(list) => render::render_app(out, i + 1, app, Some(list.as_slice()))?,
            Err(e) if !e.is_fatal() => {
                instance_failures += 1;
                tracing::debug!(app = %app.id, error = %e, "Instances unavailable");
                writeln!(err, "  Warning: {}", e)?;
                render::render_app(out, i + 1, app, None)?;
            }
            Err(e) => return Err(e),
        }
    }

    if apps.is_empty() {
        writeln!(out, "No active ROFL apps found.")?;
    }
    out.flush()?;

    Ok(ReportSummary {
        block_height: block.height,
        apps_reported: apps.len(),
        instance_failures,
    })
}
