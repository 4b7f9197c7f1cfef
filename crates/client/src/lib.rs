// Path: crates/client/src/lib.rs
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

//! # roflscan Client
//!
//! The connection layer: async query traits for the consensus layer and the
//! ROFL module of a paratime, and their implementation over an HTTP/JSON
//! query gateway.
//!
//! Callers program against [`ConsensusApi`] and [`RoflApi`]; the concrete
//! clients come from a [`Connection`]:
//!
//! ```no_run
//! # async fn demo(network: &roflscan_types::config::NetworkConfig) -> anyhow::Result<()> {
//! use roflscan_client::{Connection, ConsensusApi, Height, RoflApi, RoflClient, Round};
//!
//! let conn = Connection::connect(network)?;
//! let block = conn.consensus().block(Height::Latest).await?;
//! let rofl = RoflClient::new(conn.runtime(network.paratime("sapphire")?));
//! let apps = rofl.apps(Round::Latest).await?;
//! # let _ = (block, apps);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod connection;
pub mod error;
pub mod gateway;

pub use api::{ConsensusApi, Height, RoflApi, Round};
pub use connection::Connection;
pub use error::ClientError;
pub use gateway::{ConsensusClient, RoflClient, RuntimeClient};
