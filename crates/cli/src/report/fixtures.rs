// Path: crates/cli/src/report/fixtures.rs
//! In-memory clients and sample data for pipeline tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use indexmap::IndexMap;
use roflscan_client::{ClientError, ConsensusApi, Height, RoflApi, Round};
use roflscan_types::app::{
    AppAuthPolicy, AppConfig, AppId, BaseUnits, ConsensusBlock, Endorsement, FeePolicy, Hash,
    PublicKey, Registration,
};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn app_id(seed: u8) -> AppId {
    let mut bytes = [seed; 21];
    bytes[0] = 0;
    AppId::from_bytes(bytes)
}

pub fn key(seed: u8) -> PublicKey {
    PublicKey::from_bytes([seed; 32])
}

pub fn app(seed: u8) -> AppConfig {
    AppConfig {
        id: app_id(seed),
        admin: None,
        stake: BaseUnits {
            amount: 100 * u128::from(seed),
            denomination: String::new(),
        },
        policy: AppAuthPolicy {
            fees: FeePolicy::EndorsingNodePays,
            max_expiration: 3,
            enclaves: vec![],
            endorsements: vec![Endorsement::Any],
        },
        sek: key(seed),
        metadata: IndexMap::new(),
        secrets: IndexMap::new(),
    }
}

pub fn instance(app: &AppId, expiration: u64) -> Registration {
    Registration {
        app: *app,
        node_id: key(100),
        entity_id: None,
        rak: key(101),
        rek: key(102),
        expiration,
        extra_keys: vec![],
        metadata: IndexMap::new(),
    }
}

pub struct FakeConsensus {
    height: u64,
    error: Option<String>,
}

impl FakeConsensus {
    pub fn at_height(height: u64) -> Self {
        Self { height, error: None }
    }

    pub fn failing(err: ClientError) -> Self {
        Self {
            height: 0,
            error: Some(err.to_string()),
        }
    }
}

#[async_trait]
impl ConsensusApi for FakeConsensus {
    async fn block(&self, height: Height) -> Result<ConsensusBlock, ClientError> {
        assert_eq!(height, Height::Latest);
        if let Some(msg) = &self.error {
            return Err(ClientError::Transport(msg.clone()));
        }
        Ok(ConsensusBlock {
            height: self.height,
            hash: Hash::from_bytes([0x0c; 32]),
            time: Utc.with_ymd_and_hms(2025, 6, 1, 10, 20, 30).unwrap(),
        })
    }
}

/// Scripted instance responses: call `n` gets entry `min(n, len - 1)`.
type Script = Vec<Result<Vec<Registration>, &'static str>>;

pub struct FakeRofl {
    apps: Vec<AppConfig>,
    list_fails: bool,
    instances: HashMap<AppId, Script>,
    calls: Mutex<HashMap<AppId, usize>>,
}

impl FakeRofl {
    pub fn new(apps: Vec<AppConfig>) -> Self {
        Self {
            apps,
            list_fails: false,
            instances: HashMap::new(),
            calls: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_instances(mut self, id: AppId, script: Script) -> Self {
        self.instances.insert(id, script);
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.list_fails = true;
        self
    }

    pub fn instance_calls(&self, id: &AppId) -> usize {
        self.calls.lock().unwrap().get(id).copied().unwrap_or(0)
    }
}

#[async_trait]
impl RoflApi for FakeRofl {
    async fn app(&self, _round: Round, id: &AppId) -> Result<AppConfig, ClientError> {
        self.apps
            .iter()
            .find(|a| a.id == *id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }

    async fn apps(&self, _round: Round) -> Result<Vec<AppConfig>, ClientError> {
        if self.list_fails {
            return Err(ClientError::Status {
                code: 500,
                message: "registry unavailable".into(),
            });
        }
        Ok(self.apps.clone())
    }

    async fn app_instances(
        &self,
        _round: Round,
        id: &AppId,
    ) -> Result<Vec<Registration>, ClientError> {
        let n = {
            let mut calls = self.calls.lock().unwrap();
            let n = calls.entry(*id).or_insert(0);
            *n += 1;
            *n - 1
        };
        match self.instances.get(id) {
            None => Ok(vec![]),
            Some(script) => match &script[n.min(script.len() - 1)] {
                Ok(list) => Ok(list.clone()),
                Err(msg) => Err(ClientError::Transport((*msg).to_string())),
            },
        }
    }
}
