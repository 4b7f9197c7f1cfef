// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # roflscan Types
//!
//! The foundational library for roflscan, containing the read-only snapshot
//! types returned by the chain (blocks, ROFL apps, instances), the textual
//! encodings of their identifiers, the network configuration table, and the
//! error taxonomy shared by the other crates.
//!
//! Nothing in here performs I/O beyond reading a configuration file.

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::ConfigError> = std::result::Result<T, E>;

/// Snapshot data structures: consensus blocks, ROFL apps, policies and instances.
pub mod app;
/// The network configuration table (`testnet`, `mainnet`, and their paratimes).
pub mod config;
/// Error types used across the workspace.
pub mod error;
