// Path: crates/client/src/connection.rs
//! Connection establishment.

use crate::error::ClientError;
use crate::gateway::{ConsensusClient, GatewayTransport, RuntimeClient};
use roflscan_types::config::{NetworkConfig, ParaTimeConfig};
use std::sync::Arc;

const USER_AGENT: &str = concat!("roflscan/", env!("CARGO_PKG_VERSION"));

/// A live handle to a network's query services.
///
/// The underlying HTTP client connects lazily: building a `Connection` only
/// validates the parameters, and a gateway that is unreachable surfaces as a
/// [`ClientError::Transport`] on the first query.
#[derive(Debug, Clone)]
pub struct Connection {
    transport: Arc<GatewayTransport>,
}

impl Connection {
    /// Builds a connection from a network's configuration.
    pub fn connect(network: &NetworkConfig) -> Result<Self, ClientError> {
        let base = url::Url::parse(&network.gateway)
            .map_err(|e| ClientError::Transport(format!("invalid gateway URL: {}", e)))?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(network.request_timeout())
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to build HTTP client: {}", e)))?;

        log::info!(
            "Connection to network '{}' (chain context {}) via {}",
            network.name,
            network.chain_context,
            base
        );

        Ok(Self {
            transport: Arc::new(GatewayTransport::new(http, base)),
        })
    }

    /// Consensus layer queries.
    pub fn consensus(&self) -> ConsensusClient {
        ConsensusClient::new(self.transport.clone())
    }

    /// Queries scoped to one paratime.
    pub fn runtime(&self, paratime: &ParaTimeConfig) -> RuntimeClient {
        log::debug!("Runtime client for paratime '{}' ({})", paratime.name, paratime.id);
        RuntimeClient::new(self.transport.clone(), paratime.name.clone())
    }
}
