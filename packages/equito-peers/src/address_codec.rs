//! Equito `bytes64` Address Encoding
//!
//! The Equito message struct stores sender and receiver addresses as a
//! 64-byte slot split into two 32-byte words. EVM addresses only occupy the
//! low 20 bytes of the first word:
//!
//! ```text
//! lower: | 12 zero bytes | 20-byte EVM address |
//! upper: | 32 zero bytes (reserved for extended addressing) |
//! ```
//!
//! Encoding always zeroes the high bytes; decoding never inspects them.
//! That asymmetry matches the on-chain library and is deliberate: a pair
//! with garbage in `upper` still decodes to the address in `lower`.

use alloy::primitives::Address;
use std::fmt;

use crate::error::Error;

/// A 64-byte Equito address slot as two 32-byte words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bytes64 {
    /// Low word: 20-byte address right-aligned, left-padded with zeros
    pub lower: [u8; 32],
    /// High word: all zeros on encode, ignored on decode
    pub upper: [u8; 32],
}

impl Bytes64 {
    /// Encode a typed EVM address into its `bytes64` representation.
    pub fn from_evm_address(addr: Address) -> Self {
        let mut lower = [0u8; 32];
        lower[12..32].copy_from_slice(addr.as_slice());
        Self {
            lower,
            upper: [0u8; 32],
        }
    }

    /// Parse a hex address string and encode it.
    ///
    /// Accepts an optional `0x` prefix and any casing; checksum casing is
    /// normalized rather than rejected.
    pub fn from_evm_str(addr: &str) -> Result<Self, Error> {
        let parsed = parse_evm_address(addr)?;
        Ok(Self::from_evm_address(parsed))
    }

    /// Construct from two raw 32-byte words.
    pub fn from_words(lower: [u8; 32], upper: [u8; 32]) -> Self {
        Self { lower, upper }
    }

    /// Decode back to the EVM address held in the low word.
    ///
    /// Never fails: `upper` and the first 12 bytes of `lower` are discarded
    /// without validation.
    pub fn to_evm_address(&self) -> Address {
        Address::from_slice(&self.lower[12..32])
    }

    /// Canonical EIP-55 checksummed string of the decoded address.
    pub fn to_checksum_string(&self) -> String {
        self.to_evm_address().to_checksum(None)
    }
}

impl From<Address> for Bytes64 {
    fn from(addr: Address) -> Self {
        Self::from_evm_address(addr)
    }
}

impl fmt::Display for Bytes64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{}{}",
            hex::encode(self.lower),
            hex::encode(self.upper)
        )
    }
}

/// Parse a hex EVM address (optional `0x` prefix) to a typed [`Address`].
///
/// Wrong length or non-hex characters fail with
/// [`Error::InvalidAddressFormat`]; the error carries the original input
/// for diagnostics.
pub fn parse_evm_address(addr: &str) -> Result<Address, Error> {
    let hex_str = addr.strip_prefix("0x").unwrap_or(addr);

    if hex_str.len() != 40 {
        return Err(Error::InvalidAddressFormat {
            input: addr.to_string(),
        });
    }

    let bytes = hex::decode(hex_str).map_err(|_| Error::InvalidAddressFormat {
        input: addr.to_string(),
    })?;

    Ok(Address::from_slice(&bytes))
}

/// Format a typed address as its canonical EIP-55 checksummed string.
pub fn checksum_address(addr: Address) -> String {
    addr.to_checksum(None)
}
