// Path: crates/client/src/gateway/mod.rs
//! HTTP/JSON implementation of the query interfaces.
//!
//! Paths are resolved against the network's gateway base URL:
//!
//! | query                | path                                        |
//! |----------------------|---------------------------------------------|
//! | latest block         | `consensus/blocks?limit=1`                  |
//! | block at height      | `consensus/blocks/{height}`                 |
//! | all apps             | `{paratime}/rofl_apps`                      |
//! | one app              | `{paratime}/rofl_apps/{app_id}`             |
//! | instances of an app  | `{paratime}/rofl_apps/{app_id}/instances`   |

use crate::api::{ConsensusApi, Height, RoflApi, Round};
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::StatusCode;
use roflscan_types::app::{AppConfig, AppId, ConsensusBlock, Registration};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

#[derive(Deserialize)]
struct BlockList {
    blocks: Vec<ConsensusBlock>,
}

#[derive(Deserialize)]
struct AppList {
    rofl_apps: Vec<AppConfig>,
}

#[derive(Deserialize)]
struct InstanceList {
    instances: Vec<Registration>,
}

/// Shared HTTP client and base URL.
#[derive(Debug)]
pub struct GatewayTransport {
    http: reqwest::Client,
    base: Url,
}

impl GatewayTransport {
    pub(crate) fn new(http: reqwest::Client, base: Url) -> Self {
        Self { http, base }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| ClientError::Transport(format!("invalid request path '{}': {}", path, e)))?;
        log::debug!("GET {} {:?}", url, query);

        let resp = self.http.get(url).query(query).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                code: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(format!("{}: {}", path, e)))
    }
}

fn round_query(round: Round) -> Vec<(&'static str, String)> {
    match round {
        Round::Latest => Vec::new(),
        Round::At(n) => vec![("round", n.to_string())],
    }
}

/// Consensus layer client.
#[derive(Debug, Clone)]
pub struct ConsensusClient {
    transport: Arc<GatewayTransport>,
}

impl ConsensusClient {
    pub(crate) fn new(transport: Arc<GatewayTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ConsensusApi for ConsensusClient {
    async fn block(&self, height: Height) -> Result<ConsensusBlock, ClientError> {
        match height {
            Height::Latest => {
                let list: BlockList = self
                    .transport
                    .get_json("consensus/blocks", &[("limit", "1".to_string())])
                    .await?;
                list.blocks
                    .into_iter()
                    .next()
                    .ok_or_else(|| ClientError::Decode("block list is empty".to_string()))
            }
            Height::At(h) => {
                self.transport
                    .get_json(&format!("consensus/blocks/{}", h), &[])
                    .await
            }
        }
    }
}

/// A client scoped to one paratime.
#[derive(Debug, Clone)]
pub struct RuntimeClient {
    transport: Arc<GatewayTransport>,
    paratime: String,
}

impl RuntimeClient {
    pub(crate) fn new(transport: Arc<GatewayTransport>, paratime: String) -> Self {
        Self {
            transport,
            paratime,
        }
    }
}

/// Client for the ROFL module of a paratime.
#[derive(Debug, Clone)]
pub struct RoflClient {
    runtime: RuntimeClient,
}

impl RoflClient {
    pub fn new(runtime: RuntimeClient) -> Self {
        Self { runtime }
    }

    fn path(&self, suffix: &str) -> String {
        format!("{}/rofl_apps{}", self.runtime.paratime, suffix)
    }
}

#[async_trait]
impl RoflApi for RoflClient {
    async fn app(&self, round: Round, id: &AppId) -> Result<AppConfig, ClientError> {
        self.runtime
            .transport
            .get_json(&self.path(&format!("/{}", id)), &round_query(round))
            .await
    }

    async fn apps(&self, round: Round) -> Result<Vec<AppConfig>, ClientError> {
        let list: AppList = self
            .runtime
            .transport
            .get_json(&self.path(""), &round_query(round))
            .await?;
        Ok(list.rofl_apps)
    }

    async fn app_instances(
        &self,
        round: Round,
        id: &AppId,
    ) -> Result<Vec<Registration>, ClientError> {
        let list: InstanceList = self
            .runtime
            .transport
            .get_json(&self.path(&format!("/{}/instances", id)), &round_query(round))
            .await?;
        Ok(list.instances)
    }
}
