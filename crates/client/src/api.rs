// Path: crates/client/src/api.rs
//! Query interfaces consumed by the report pipeline.
//!
//! Every call is a single request/response. Implementations must not retry,
//! cache or paginate on their own.

use crate::error::ClientError;
use async_trait::async_trait;
use roflscan_types::app::{AppConfig, AppId, ConsensusBlock, Registration};

/// Selects a consensus block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Height {
    /// The most recent block known to the node.
    Latest,
    /// A specific height.
    At(u64),
}

/// Selects the paratime round a query is evaluated at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Round {
    /// The most recent round.
    Latest,
    /// A specific round.
    At(u64),
}

/// Consensus layer queries.
#[async_trait]
pub trait ConsensusApi: Send + Sync {
    /// Fetches a block summary.
    async fn block(&self, height: Height) -> Result<ConsensusBlock, ClientError>;
}

/// Queries against the ROFL module of a paratime.
#[async_trait]
pub trait RoflApi: Send + Sync {
    /// Fetches a single app. A missing app yields [`ClientError::NotFound`].
    async fn app(&self, round: Round, id: &AppId) -> Result<AppConfig, ClientError>;

    /// Fetches every registered app, in registry order.
    async fn apps(&self, round: Round) -> Result<Vec<AppConfig>, ClientError>;

    /// Fetches the currently registered instances of an app, possibly none.
    async fn app_instances(&self, round: Round, id: &AppId)
        -> Result<Vec<Registration>, ClientError>;
}
