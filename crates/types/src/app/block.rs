// Path: crates/types/src/app/block.rs
//! Consensus layer block summary.

use super::ids::Hash;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A read-only summary of a consensus block.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ConsensusBlock {
    /// Block height.
    pub height: u64,
    /// Block hash.
    pub hash: Hash,
    /// Block timestamp.
    #[serde(rename = "timestamp")]
    pub time: DateTime<Utc>,
}

impl ConsensusBlock {
    /// The block time in the report's fixed format, e.g. `2024-05-01 12:00:00 +0000 UTC`.
    pub fn display_time(&self) -> String {
        self.time.format("%Y-%m-%d %H:%M:%S %z UTC").to_string()
    }
}
