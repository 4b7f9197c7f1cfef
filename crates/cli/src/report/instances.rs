// Path: crates/cli/src/report/instances.rs
//! Instance resolution.
//!
//! Not cached: discovery and rendering each call this for the same app, and
//! each call sees the chain as it is at that moment.

use crate::error::ReportError;
use roflscan_client::{RoflApi, Round};
use roflscan_types::app::{AppId, Registration};

/// Fetches the currently registered instances of an app.
pub async fn resolve_instances<R>(rofl: &R, app: &AppId) -> Result<Vec<Registration>, ReportError>
where
    R: RoflApi + ?Sized,
{
    rofl.app_instances(Round::Latest, app)
        .await
        .map_err(|source| ReportError::InstanceFetch { app: *app, source })
}
