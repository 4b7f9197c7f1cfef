// Path: crates/cli/src/network.rs
//! Network selection.

use crate::error::ReportError;
use clap::ValueEnum;
use roflscan_types::config::{NetworkConfig, NetworksConfig, ParaTimeConfig};
use std::fmt;

/// The paratime queried when none is given.
pub const DEFAULT_PARATIME: &str = "sapphire";

/// Networks accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NetworkName {
    Testnet,
    Mainnet,
}

impl NetworkName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Testnet => "testnet",
            Self::Mainnet => "mainnet",
        }
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The network and paratime a run talks to.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub network: &'a NetworkConfig,
    pub paratime: &'a ParaTimeConfig,
}

/// Resolves a network and one of its paratimes from the configuration table.
pub fn select<'a>(
    config: &'a NetworksConfig,
    network: &str,
    paratime: &str,
) -> Result<Selection<'a>, ReportError> {
    let network = config.network(network)?;
    let paratime = network.paratime(paratime)?;
    Ok(Selection { network, paratime })
}
