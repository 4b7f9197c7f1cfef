// Path: crates/cli/src/report/consensus.rs
//! Latest consensus block summary.

use crate::error::ReportError;
use roflscan_client::{ConsensusApi, Height};
use roflscan_types::app::ConsensusBlock;
use std::io::{self, Write};

/// Fetches the latest block and prints its summary.
pub async fn report_latest_block<C, W>(consensus: &C, out: &mut W) -> Result<ConsensusBlock, ReportError>
where
    C: ConsensusApi + ?Sized,
    W: Write,
{
    let block = consensus
        .block(Height::Latest)
        .await
        .map_err(ReportError::ConsensusFetch)?;
    tracing::info!(height = block.height, hash = %block.hash, "Fetched latest block");
    write_block(out, &block)?;
    Ok(block)
}

pub fn write_block<W: Write>(out: &mut W, block: &ConsensusBlock) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Latest Block Information:")?;
    writeln!(out, "  Height: {}", block.height)?;
    writeln!(out, "  Hash: {}", block.hash)?;
    writeln!(out, "  Time: {}", block.display_time())
}
