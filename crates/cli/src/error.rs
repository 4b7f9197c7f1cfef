// Path: crates/cli/src/error.rs
//! Errors of the report pipeline.
//!
//! Everything here is fatal to the run except [`ReportError::InstanceFetch`],
//! which discovery and rendering contain locally.

use roflscan_client::ClientError;
use roflscan_types::app::AppId;
use roflscan_types::error::{ConfigError, ErrorCode, IdError};
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// Unknown network or paratime, or an unreadable configuration table.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The connection could not be established.
    #[error("Failed to connect: {0}")]
    Transport(#[source] ClientError),
    /// The latest block could not be fetched.
    #[error("Failed to fetch latest block: {0}")]
    ConsensusFetch(#[source] ClientError),
    /// The requested app identifier is malformed.
    #[error("Invalid app ID '{input}': {source}")]
    InvalidAppId { input: String, source: IdError },
    /// The requested app is not registered.
    #[error("ROFL app {0} not found")]
    AppNotFound(AppId),
    /// The requested app could not be fetched for another reason.
    #[error("Failed to fetch ROFL app {id}: {source}")]
    AppLookup { id: AppId, source: ClientError },
    /// The app registry could not be listed.
    #[error("Failed to fetch ROFL apps: {0}")]
    AppListFetch(#[source] ClientError),
    /// The instances of one app could not be fetched.
    #[error("Failed to fetch instances: {source}")]
    InstanceFetch { app: AppId, source: ClientError },
    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ReportError {
    /// Whether the error ends the run. Only instance lookups are recoverable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::InstanceFetch { .. })
    }
}

impl ErrorCode for ReportError {
    fn code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.code(),
            Self::Transport(_) => "REPORT_TRANSPORT",
            Self::ConsensusFetch(_) => "REPORT_CONSENSUS_FETCH",
            Self::InvalidAppId { .. } => "REPORT_INVALID_APP_ID",
            Self::AppNotFound(_) => "REPORT_APP_NOT_FOUND",
            Self::AppLookup { .. } => "REPORT_APP_LOOKUP",
            Self::AppListFetch(_) => "REPORT_APP_LIST_FETCH",
            Self::InstanceFetch { .. } => "REPORT_INSTANCE_FETCH",
            Self::Output(_) => "REPORT_OUTPUT",
        }
    }
}

/// Stable codes of `err` and each of its sources, outermost first.
/// Sources of unknown types are skipped.
pub fn error_codes(err: &(dyn StdError + 'static)) -> Vec<&'static str> {
    std::iter::successors(Some(err), |&e| e.source())
        .filter_map(|e| {
            if let Some(e) = e.downcast_ref::<ReportError>() {
                Some(e.code())
            } else if let Some(e) = e.downcast_ref::<ConfigError>() {
                Some(e.code())
            } else if let Some(e) = e.downcast_ref::<ClientError>() {
                Some(e.code())
            } else if let Some(e) = e.downcast_ref::<IdError>() {
                Some(e.code())
            } else {
                None
            }
        })
        .collect()
}
