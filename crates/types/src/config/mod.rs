// Path: crates/types/src/config/mod.rs

//! The network configuration table.
//!
//! The table is an explicit value: it is loaded once at startup, either from
//! the built-in defaults or from a TOML file, and never reloaded.

use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

const BUILTIN_NETWORKS: &str = include_str!("networks.toml");

fn default_request_timeout_secs() -> u64 {
    30
}

/// Connection parameters of a paratime (runtime) hosted on a network.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ParaTimeConfig {
    /// The paratime name, filled in from the table key.
    #[serde(skip)]
    pub name: String,
    /// Hex-encoded 32-byte runtime identifier.
    pub id: String,
}

/// Connection parameters of a network.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// The network name, filled in from the table key.
    #[serde(skip)]
    pub name: String,
    /// Hex-encoded 32-byte consensus chain context.
    pub chain_context: String,
    /// Base URL of the query gateway. Always ends with `/`.
    pub gateway: String,
    /// Per-request timeout applied by the connection.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Paratimes keyed by name.
    #[serde(default)]
    pub paratimes: BTreeMap<String, ParaTimeConfig>,
}

impl NetworkConfig {
    /// Looks up a paratime by name.
    pub fn paratime(&self, name: &str) -> crate::Result<&ParaTimeConfig> {
        self.paratimes
            .get(name)
            .ok_or_else(|| ConfigError::UnknownSubNetwork {
                network: self.name.clone(),
                paratime: name.to_string(),
            })
    }

    /// The per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// The full table of known networks.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NetworksConfig {
    /// Networks keyed by name.
    pub networks: BTreeMap<String, NetworkConfig>,
}

impl NetworksConfig {
    /// The built-in table covering `testnet` and `mainnet`.
    pub fn builtin() -> crate::Result<Self> {
        Self::from_toml_str(BUILTIN_NETWORKS)
    }

    /// Reads a table from a TOML file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&raw)
    }

    /// Parses and validates a table from TOML text.
    pub fn from_toml_str(raw: &str) -> crate::Result<Self> {
        let mut config: Self = toml::from_str(raw).map_err(|e| ConfigError::Load(e.to_string()))?;
        for (name, network) in config.networks.iter_mut() {
            network.name = name.clone();
            validate_hex32(&network.chain_context, &format!("{}.chain_context", name))?;
            url::Url::parse(&network.gateway)
                .map_err(|e| ConfigError::Invalid(format!("{}.gateway: {}", name, e)))?;
            if !network.gateway.ends_with('/') {
                network.gateway.push('/');
            }
            if network.request_timeout_secs == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{}.request_timeout_secs must be positive",
                    name
                )));
            }
            for (pt_name, paratime) in network.paratimes.iter_mut() {
                paratime.name = pt_name.clone();
                validate_hex32(&paratime.id, &format!("{}.paratimes.{}.id", name, pt_name))?;
            }
        }
        Ok(config)
    }

    /// Looks up a network by name.
    pub fn network(&self, name: &str) -> crate::Result<&NetworkConfig> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }
}

fn validate_hex32(value: &str, field: &str) -> crate::Result<()> {
    match hex::decode(value) {
        Ok(bytes) if bytes.len() == 32 => Ok(()),
        Ok(bytes) => Err(ConfigError::Invalid(format!(
            "{}: expected 32 bytes, got {}",
            field,
            bytes.len()
        ))),
        Err(e) => Err(ConfigError::Invalid(format!("{}: {}", field, e))),
    }
}
