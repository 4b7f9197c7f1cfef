// Path: crates/types/src/error/mod.rs
//! Core error types for roflscan.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised while parsing the textual form of an identifier or key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The string is not valid bech32 (bad charset, mixed case or checksum).
    #[error("Invalid bech32 encoding: {0}")]
    Bech32(String),
    /// The bech32 human-readable part does not match the identifier kind.
    #[error("Unexpected bech32 prefix. Expected '{expected}', got '{got}'")]
    WrongPrefix {
        /// The human-readable part this identifier must carry.
        expected: &'static str,
        /// The human-readable part found in the input.
        got: String,
    },
    /// The decoded payload has the wrong number of bytes.
    #[error("Invalid length. Expected {expected} bytes, got {got}")]
    Length {
        /// The required payload length.
        expected: usize,
        /// The length actually decoded.
        got: usize,
    },
    /// The string is not valid base64.
    #[error("Invalid base64 encoding: {0}")]
    Base64(String),
    /// The string is not valid hex.
    #[error("Invalid hex encoding: {0}")]
    Hex(String),
    /// The string is not a valid decimal amount.
    #[error("Invalid amount: {0}")]
    Amount(String),
}

impl ErrorCode for IdError {
    fn code(&self) -> &'static str {
        match self {
            Self::Bech32(_) => "ID_INVALID_BECH32",
            Self::WrongPrefix { .. } => "ID_WRONG_PREFIX",
            Self::Length { .. } => "ID_INVALID_LENGTH",
            Self::Base64(_) => "ID_INVALID_BASE64",
            Self::Hex(_) => "ID_INVALID_HEX",
            Self::Amount(_) => "ID_INVALID_AMOUNT",
        }
    }
}

/// Errors raised while decoding an endorsement policy rule.
///
/// The wire form is a record of optional fields; exactly one of them must be
/// populated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndorsementError {
    /// No recognised field was populated.
    #[error("Endorsement has no populated variant")]
    Empty,
    /// More than one field was populated.
    #[error("Endorsement has multiple populated variants: {}", .0.join(", "))]
    Ambiguous(Vec<&'static str>),
}

impl ErrorCode for EndorsementError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "ENDORSEMENT_EMPTY",
            Self::Ambiguous(_) => "ENDORSEMENT_AMBIGUOUS",
        }
    }
}

/// Errors related to the network configuration table.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested network is not present in the configuration table.
    #[error("Network '{0}' not found in configuration")]
    UnknownNetwork(String),
    /// The requested paratime is not configured for the selected network.
    #[error("ParaTime '{paratime}' not found in configuration of network '{network}'")]
    UnknownSubNetwork {
        /// The network that was searched.
        network: String,
        /// The paratime name that was requested.
        paratime: String,
    },
    /// The configuration file could not be read or parsed.
    #[error("Failed to load network configuration: {0}")]
    Load(String),
    /// The configuration parsed but contains an invalid value.
    #[error("Invalid network configuration: {0}")]
    Invalid(String),
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownNetwork(_) => "CONFIG_UNKNOWN_NETWORK",
            Self::UnknownSubNetwork { .. } => "CONFIG_UNKNOWN_PARATIME",
            Self::Load(_) => "CONFIG_LOAD_FAILED",
            Self::Invalid(_) => "CONFIG_INVALID",
        }
    }
}
