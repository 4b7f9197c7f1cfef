// Path: crates/types/src/app/mod.rs
//! Snapshot data structures returned by the chain.
//!
//! Every type here is an immutable, point-in-time view. Decoding validates
//! identifier encodings and the shape of endorsement rules, so a value that
//! exists is well formed.

/// Consensus block summary.
pub mod block;
/// Identifiers, keys and amounts with their textual encodings.
pub mod ids;
/// ROFL apps, policies and instances.
pub mod rofl;

pub use block::ConsensusBlock;
pub use ids::{Address, AppId, BaseUnits, Ciphertext, Hash, Measurement, OpaqueKey, PublicKey};
pub use rofl::{AppAuthPolicy, AppConfig, EnclaveIdentity, Endorsement, FeePolicy, Registration};
