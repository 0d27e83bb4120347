//! Account address type.
//!
//! On the wire an account is a bare 20-byte identifier. This module turns the
//! `thor1<40 hex chars>` strings this SDK works with into those 20 bytes.
//!
//! The decoding is a narrow shortcut, not a bech32 decoder: the literal
//! `thor1` prefix is stripped and the rest is read as hexadecimal. There is no
//! checksum validation, and a real bech32 address (whose data part is base32)
//! is rejected or, worse, would decode to unrelated bytes if it happened to be
//! valid hex. Do not extend this to other prefixes or formats.

use crate::error::{ThorError, ThorResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of an account identifier in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// The literal prefix every accepted address starts with.
pub const THOR_ADDRESS_PREFIX: &str = "thor1";

/// A 20-byte account identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountAddress([u8; ADDRESS_LENGTH]);

impl AccountAddress {
    /// Creates an address from a byte array.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Decodes a `thor1`-prefixed hex address.
    ///
    /// # Errors
    ///
    /// Returns [`ThorError::AddressFormat`] if the prefix is missing, the
    /// remainder has odd length or non-hex characters, or it does not decode
    /// to exactly [`ADDRESS_LENGTH`] bytes.
    pub fn from_thor_address(address: &str) -> ThorResult<Self> {
        let hex_part = address.strip_prefix(THOR_ADDRESS_PREFIX).ok_or_else(|| {
            ThorError::address_format(format!(
                "expected prefix '{}' in '{}'",
                THOR_ADDRESS_PREFIX, address
            ))
        })?;

        let bytes = hex::decode(hex_part).map_err(|err| match err {
            hex::FromHexError::OddLength => ThorError::address_format(format!(
                "odd number of hex digits ({}) after '{}'",
                hex_part.len(),
                THOR_ADDRESS_PREFIX
            )),
            hex::FromHexError::InvalidHexCharacter { c, index } => ThorError::address_format(
                format!("invalid hex character {:?} at position {}", c, index),
            ),
            other => ThorError::address_format(other.to_string()),
        })?;

        Self::from_bytes(bytes)
    }

    /// Creates an address from a byte slice.
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> ThorResult<Self> {
        let bytes = bytes.as_ref();
        let array: [u8; ADDRESS_LENGTH] = bytes.try_into().map_err(|_| {
            ThorError::address_format(format!(
                "expected {} bytes, got {}",
                ADDRESS_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self(array))
    }

    /// Returns the address as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the address as a byte array.
    pub fn to_bytes(&self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    /// Returns the `thor1<hex>` string this address was decoded from.
    pub fn to_thor_address(&self) -> String {
        format!("{}{}", THOR_ADDRESS_PREFIX, hex::encode(self.0))
    }
}

/// Decodes a `thor1`-prefixed hex address into its 20-byte account id.
///
/// See [`AccountAddress::from_thor_address`].
pub fn decode_address(address: &str) -> ThorResult<AccountAddress> {
    AccountAddress::from_thor_address(address)
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self.to_thor_address())
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_thor_address())
    }
}

impl FromStr for AccountAddress {
    type Err = ThorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_thor_address(s)
    }
}

impl Serialize for AccountAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_thor_address())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_thor_address(&s).map_err(serde::de::Error::custom)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for AccountAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for AccountAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
