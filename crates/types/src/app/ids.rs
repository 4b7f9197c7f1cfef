// Path: crates/types/src/app/ids.rs
//! Identifiers and key references, with the textual encodings used both on
//! the wire and in the report.

use crate::error::IdError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bech32::{Bech32, Hrp};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Length of a bech32-encoded on-chain identifier: a version byte plus a 20-byte digest.
pub const BECH32_ID_LEN: usize = 21;
/// Length of a public key, hash or enclave measurement.
pub const KEY_LEN: usize = 32;

/// Deserializes a type through its `FromStr` text form.
macro_rules! text_serde {
    ($ty:ident) => {
        impl TryFrom<String> for $ty {
            type Error = IdError;
            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}

fn decode_bech32(s: &str, hrp: &'static str) -> Result<[u8; BECH32_ID_LEN], IdError> {
    let (got, data) = bech32::decode(s).map_err(|e| IdError::Bech32(e.to_string()))?;
    let got = got.to_string().to_lowercase();
    if got != hrp {
        return Err(IdError::WrongPrefix { expected: hrp, got });
    }
    let len = data.len();
    data.try_into().map_err(|_| IdError::Length {
        expected: BECH32_ID_LEN,
        got: len,
    })
}

fn encode_bech32(f: &mut fmt::Formatter<'_>, hrp: &'static str, data: &[u8]) -> fmt::Result {
    let s = bech32::encode::<Bech32>(Hrp::parse_unchecked(hrp), data).map_err(|_| fmt::Error)?;
    f.write_str(&s)
}

fn decode_fixed<const N: usize>(bytes: Vec<u8>) -> Result<[u8; N], IdError> {
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| IdError::Length { expected: N, got: len })
}

fn decode_base64(s: &str) -> Result<Vec<u8>, IdError> {
    STANDARD
        .decode(s)
        .map_err(|e| IdError::Base64(e.to_string()))
}

/// Unique identifier of a ROFL app, encoded as bech32 with the `rofl` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct AppId([u8; BECH32_ID_LEN]);

impl AppId {
    /// The bech32 human-readable part of app identifiers.
    pub const HRP: &'static str = "rofl";

    /// Wraps raw identifier bytes.
    pub fn from_bytes(bytes: [u8; BECH32_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for AppId {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_bech32(s, Self::HRP).map(Self)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        encode_bech32(f, Self::HRP, &self.0)
    }
}

text_serde!(AppId);

/// An account address, encoded as bech32 with the `oasis` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Address([u8; BECH32_ID_LEN]);

impl Address {
    /// The bech32 human-readable part of account addresses.
    pub const HRP: &'static str = "oasis";

    /// Wraps raw address bytes.
    pub fn from_bytes(bytes: [u8; BECH32_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Address {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_bech32(s, Self::HRP).map(Self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        encode_bech32(f, Self::HRP, &self.0)
    }
}

text_serde!(Address);

/// A 32-byte public key (SEK, RAK, REK, node and entity identities), base64 encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct PublicKey([u8; KEY_LEN]);

impl PublicKey {
    /// Wraps raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for PublicKey {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(decode_base64(s)?).map(Self)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&STANDARD.encode(self.0))
    }
}

text_serde!(PublicKey);

/// A key of unspecified scheme and length, base64 encoded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct OpaqueKey(Vec<u8>);

impl OpaqueKey {
    /// Wraps raw key bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl FromStr for OpaqueKey {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_base64(s).map(Self)
    }
}

impl fmt::Display for OpaqueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&STANDARD.encode(&self.0))
    }
}

text_serde!(OpaqueKey);

/// A 32-byte block hash, hex encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Hash([u8; KEY_LEN]);

impl Hash {
    /// Wraps raw hash bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Hash {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| IdError::Hex(e.to_string()))?;
        decode_fixed(bytes).map(Self)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

text_serde!(Hash);

/// A TEE measurement (MrEnclave or MrSigner), hex encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Measurement([u8; KEY_LEN]);

impl Measurement {
    /// Wraps raw measurement bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Measurement {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| IdError::Hex(e.to_string()))?;
        decode_fixed(bytes).map(Self)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

text_serde!(Measurement);

/// An encrypted secret value.
///
/// Deliberately has no `Display` and a redacted `Debug`, so the value can
/// not end up in a report or a log line.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    /// Wraps raw ciphertext bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Size of the ciphertext in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the ciphertext is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for Ciphertext {
    type Error = IdError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        decode_base64(&s).map(Self)
    }
}

impl fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ciphertext(<{} bytes redacted>)", self.0.len())
    }
}

#[derive(Deserialize)]
struct RawBaseUnits {
    amount: String,
    #[serde(default)]
    denomination: String,
}

/// A token amount in base units together with its denomination.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBaseUnits")]
pub struct BaseUnits {
    /// Amount in the smallest indivisible unit.
    pub amount: u128,
    /// Denomination symbol; empty for the native token.
    pub denomination: String,
}

impl TryFrom<RawBaseUnits> for BaseUnits {
    type Error = IdError;
    fn try_from(raw: RawBaseUnits) -> Result<Self, Self::Error> {
        let amount = raw
            .amount
            .parse()
            .map_err(|_| IdError::Amount(raw.amount.clone()))?;
        Ok(Self {
            amount,
            denomination: raw.denomination,
        })
    }
}

impl fmt::Display for BaseUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denomination.is_empty() {
            write!(f, "{} <native>", self.amount)
        } else {
            write!(f, "{} {}", self.amount, self.denomination)
        }
    }
}
