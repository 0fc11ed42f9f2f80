//! The store's 12-byte binary identifier and its textual codec.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InvalidBinIdError;

/// Number of bytes in a [`BinId`].
pub const BIN_ID_LEN: usize = 12;

/// Length of the canonical textual form (two hex digits per byte).
pub const BIN_ID_HEX_LEN: usize = BIN_ID_LEN * 2;

/// Canonical 12-byte document identifier.
///
/// The textual form is exactly 24 hexadecimal digits, most significant byte
/// first. Parsing accepts either case; printing is always lowercase, so
/// `parse(print(id)) == id` and `print(parse(s)) == s.to_lowercase()`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinId([u8; BIN_ID_LEN]);

impl BinId {
    /// Creates an identifier from its raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; BIN_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Creates an identifier from a byte slice of exactly 12 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBinIdError`] (carrying the input rendered as hex) if
    /// the slice has any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, InvalidBinIdError> {
        <[u8; BIN_ID_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| InvalidBinIdError::new(hex::encode(bytes)))
    }

    /// Parses the canonical 24-hex-digit form.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBinIdError`] carrying `text` if it is not exactly 24
    /// hexadecimal digits.
    pub fn parse(text: &str) -> Result<Self, InvalidBinIdError> {
        let mut bytes = [0u8; BIN_ID_LEN];
        if text.len() != BIN_ID_HEX_LEN || hex::decode_to_slice(text, &mut bytes).is_err() {
            tracing::debug!(input = text, "rejected binary identifier");
            return Err(InvalidBinIdError::new(text));
        }
        Ok(Self(bytes))
    }

    /// Renders the canonical lowercase 24-hex-digit form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the raw bytes in storage order.
    #[must_use]
    pub const fn bytes(&self) -> [u8; BIN_ID_LEN] {
        self.0
    }

    /// Returns a reference to the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BIN_ID_LEN] {
        &self.0
    }
}

impl fmt::Debug for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinId({})", self.to_hex())
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for BinId {
    type Err = InvalidBinIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; BIN_ID_LEN]> for BinId {
    fn from(bytes: [u8; BIN_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<BinId> for [u8; BIN_ID_LEN] {
    fn from(id: BinId) -> Self {
        id.0
    }
}

impl From<bson::oid::ObjectId> for BinId {
    fn from(oid: bson::oid::ObjectId) -> Self {
        Self(oid.bytes())
    }
}

impl From<BinId> for bson::oid::ObjectId {
    fn from(id: BinId) -> Self {
        bson::oid::ObjectId::from_bytes(id.0)
    }
}
