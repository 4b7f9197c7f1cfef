// Path: crates/telemetry/src/lib.rs
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

//! # roflscan Telemetry
//!
//! Structured logging initialisation. Logs always go to stderr; stdout is
//! reserved for the report.

/// The initialization routine for global structured logging.
pub mod init;

pub use init::{init_tracing, LogFormat};
