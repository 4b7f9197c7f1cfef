// Path: crates/types/src/app/rofl.rs
//! ROFL app descriptors, their admission policy, and running instances.

use super::ids::{Address, AppId, BaseUnits, Ciphertext, Measurement, OpaqueKey, PublicKey};
use crate::error::EndorsementError;
use indexmap::IndexMap;
use serde::Deserialize;

/// Who pays the transaction fees of an instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "u8")]
pub enum FeePolicy {
    /// The instance pays its own fees.
    InstancePays,
    /// The node that endorsed the instance pays the fees.
    EndorsingNodePays,
    /// A code this version does not know about.
    Other(u8),
}

impl FeePolicy {
    /// The on-chain integer code.
    pub fn code(self) -> u8 {
        match self {
            Self::InstancePays => 1,
            Self::EndorsingNodePays => 2,
            Self::Other(n) => n,
        }
    }
}

impl From<u8> for FeePolicy {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::InstancePays,
            2 => Self::EndorsingNodePays,
            n => Self::Other(n),
        }
    }
}

/// An allowed enclave identity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EnclaveIdentity {
    /// Measurement of the enclave code.
    pub mr_enclave: Measurement,
    /// Measurement of the enclave signer.
    pub mr_signer: Measurement,
}

/// Wire form of an endorsement: a record of mutually exclusive optional fields.
#[derive(Deserialize)]
struct RawEndorsement {
    #[serde(default)]
    any: Option<serde_json::Value>,
    #[serde(default)]
    role_compute: Option<serde_json::Value>,
    #[serde(default)]
    role_observer: Option<serde_json::Value>,
    #[serde(default)]
    entity: Option<PublicKey>,
    #[serde(default)]
    node: Option<PublicKey>,
    #[serde(default)]
    provider: Option<Address>,
    #[serde(default)]
    provider_instance_admin: Option<Address>,
    #[serde(default)]
    and: Option<Vec<Endorsement>>,
    #[serde(default)]
    or: Option<Vec<Endorsement>>,
}

/// A rule describing who may endorse (host) an instance of an app.
///
/// Exactly one variant is active. Decoding rejects records that populate
/// zero or several of the wire fields.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEndorsement")]
pub enum Endorsement {
    /// Any node may endorse.
    Any,
    /// Any node registered with the compute role.
    ComputeRole,
    /// Any node registered with the observer role.
    ObserverRole,
    /// Any node operated by the given entity.
    Entity(PublicKey),
    /// Only the given node.
    Node(PublicKey),
    /// Any node of the given marketplace provider.
    Provider(Address),
    /// Instances whose admin is the given provider instance admin.
    ProviderInstanceAdmin(Address),
    /// All child rules must hold.
    And(Vec<Endorsement>),
    /// At least one child rule must hold.
    Or(Vec<Endorsement>),
}

impl Endorsement {
    /// The variant tag as printed in reports.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::ComputeRole => "ComputeRole",
            Self::ObserverRole => "ObserverRole",
            Self::Entity(_) => "Entity",
            Self::Node(_) => "Node",
            Self::Provider(_) => "Provider",
            Self::ProviderInstanceAdmin(_) => "ProviderInstanceAdmin",
            Self::And(_) => "And",
            Self::Or(_) => "Or",
        }
    }
}

impl TryFrom<RawEndorsement> for Endorsement {
    type Error = EndorsementError;

    fn try_from(raw: RawEndorsement) -> Result<Self, Self::Error> {
        let mut found: Vec<(&'static str, Endorsement)> = Vec::new();
        if raw.any.is_some() {
            found.push(("any", Self::Any));
        }
        if raw.role_compute.is_some() {
            found.push(("role_compute", Self::ComputeRole));
        }
        if raw.role_observer.is_some() {
            found.push(("role_observer", Self::ObserverRole));
        }
        if let Some(id) = raw.entity {
            found.push(("entity", Self::Entity(id)));
        }
        if let Some(id) = raw.node {
            found.push(("node", Self::Node(id)));
        }
        if let Some(addr) = raw.provider {
            found.push(("provider", Self::Provider(addr)));
        }
        if let Some(addr) = raw.provider_instance_admin {
            found.push(("provider_instance_admin", Self::ProviderInstanceAdmin(addr)));
        }
        if let Some(children) = raw.and {
            found.push(("and", Self::And(children)));
        }
        if let Some(children) = raw.or {
            found.push(("or", Self::Or(children)));
        }

        match found.len() {
            0 => Err(EndorsementError::Empty),
            1 => found
                .pop()
                .map(|(_, e)| e)
                .ok_or(EndorsementError::Empty),
            _ => Err(EndorsementError::Ambiguous(
                found.into_iter().map(|(name, _)| name).collect(),
            )),
        }
    }
}

/// Admission policy of an app.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AppAuthPolicy {
    /// Fee payment mode.
    pub fees: FeePolicy,
    /// Maximum number of epochs an instance registration stays valid.
    pub max_expiration: u64,
    /// Allowed enclave identities, in policy order.
    #[serde(default)]
    pub enclaves: Vec<EnclaveIdentity>,
    /// Endorsement rules, in policy order.
    #[serde(default)]
    pub endorsements: Vec<Endorsement>,
}

/// A registered ROFL app, as stored on chain at query time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Unique app identifier.
    pub id: AppId,
    /// Administrator account, if any.
    #[serde(default)]
    pub admin: Option<Address>,
    /// Stake escrowed for the registration.
    pub stake: BaseUnits,
    /// Admission policy.
    pub policy: AppAuthPolicy,
    /// Secrets encryption public key.
    pub sek: PublicKey,
    /// Free-form metadata, in the order delivered by the chain.
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
    /// Encrypted secrets keyed by name.
    #[serde(default)]
    pub secrets: IndexMap<String, Ciphertext>,
}

/// A registered, currently running instance of an app.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Registration {
    /// The app this instance belongs to.
    pub app: AppId,
    /// Identity of the hosting node.
    pub node_id: PublicKey,
    /// Entity that controls the hosting node, if known.
    #[serde(default)]
    pub entity_id: Option<PublicKey>,
    /// Runtime attestation key.
    pub rak: PublicKey,
    /// Runtime encryption key.
    pub rek: PublicKey,
    /// Epoch at which the registration expires.
    pub expiration: u64,
    /// Additional endorsed keys, in registration order.
    #[serde(default)]
    pub extra_keys: Vec<OpaqueKey>,
    /// Free-form instance metadata, in the order delivered by the chain.
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}
