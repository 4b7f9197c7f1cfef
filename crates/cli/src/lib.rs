// Path: crates/cli/src/lib.rs
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

//! # roflscan CLI Library
//!
//! The report pipeline behind the `roflscan` binary:
//!
//! `Start -> Connect -> ReportConsensus -> DiscoverApps -> {RenderApp}* -> Done`
//!
//! - [`network`] selects the network and paratime from the configuration table.
//! - [`report::consensus`] prints the latest consensus block.
//! - [`report::discovery`] picks the apps to report, filtering by liveness
//!   unless a specific app was requested.
//! - [`report::instances`] fetches the running instances of an app.
//! - [`report::render`] turns an app and its instances into text.
//!
//! All output goes through `std::io::Write` handles so the whole pipeline can
//! run against in-memory buffers and fake clients.

pub mod error;
pub mod network;
pub mod report;
pub mod util;

pub use error::ReportError;
pub use report::{run, run_with, AppSelection, ReportOptions, ReportSummary};
