// Path: crates/cli/src/report/discovery.rs
//! Selection of the apps to report.

use super::instances::resolve_instances;
use crate::error::ReportError;
use roflscan_client::{ClientError, RoflApi, Round};
use roflscan_types::app::{AppConfig, AppId};

/// Which apps a run reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppSelection {
    /// Exactly this app, given in its textual form, whether or not it has instances.
    Single(String),
    /// Every registered app with at least one running instance.
    Active,
}

impl AppSelection {
    pub fn from_arg(app_id: Option<String>) -> Self {
        match app_id {
            Some(id) => Self::Single(id),
            None => Self::Active,
        }
    }
}

/// Produces the apps to report, in registry order.
///
/// In [`AppSelection::Active`] mode an app is kept iff its instance lookup
/// succeeds and returns at least one instance. Lookup failures count as
/// inactive and are not retried.
pub async fn discover_apps<R>(rofl: &R, selection: &AppSelection) -> Result<Vec<AppConfig>, ReportError>
where
    R: RoflApi + ?Sized,
{
    match selection {
        AppSelection::Single(input) => {
            let id: AppId = input.parse().map_err(|source| ReportError::InvalidAppId {
                input: input.clone(),
                source,
            })?;
            let app = rofl
                .app(Round::Latest, &id)
                .await
                .map_err(|source| match source {
                    ClientError::NotFound(_) => ReportError::AppNotFound(id),
                    source => ReportError::AppLookup { id, source },
                })?;
            Ok(vec![app])
        }
        AppSelection::Active => {
            let all = rofl
                .apps(Round::Latest)
                .await
                .map_err(ReportError::AppListFetch)?;
            let total = all.len();

            let mut active = Vec::new();
            for app in all {
                match resolve_instances(rofl, &app.id).await {
                    Ok(instances) if !instances.is_empty() => active.push(app),
                    Ok(_) => {}
                    Err(e) => tracing::debug!(app = %app.id, error = %e, "Treating app as inactive"),
                }
            }

            tracing::info!(total, active = active.len(), "Filtered registry for active apps");
            Ok(active)
        }
    }
}
