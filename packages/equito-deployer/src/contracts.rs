//! Equito app contract ABI definitions
//!
//! Uses alloy's sol! macro to generate type-safe bindings for the slice of
//! the Equito app interface the tooling calls. The `bytes64` struct mirrors
//! the on-chain 64-byte address slot; see `equito_peers::address_codec`.

use alloy::primitives::FixedBytes;
use alloy::sol;
use equito_peers::Bytes64;

sol! {
    #[sol(rpc)]
    contract EquitoApp {
        /// 64-byte address slot of the Equito message struct
        struct bytes64 {
            bytes32 lower;
            bytes32 upper;
        }

        /// Register the peer contract address for each chain selector.
        /// Both arrays must have the same length; entry i of `addresses`
        /// is the peer on the chain identified by `chainSelectors[i]`.
        function setPeers(uint256[] calldata chainSelectors, bytes64[] calldata addresses) external;

        /// Peer address registered for a chain selector
        function getPeer(uint256 chainSelector) external view returns (bytes64 memory);

        /// Router this app is bound to
        function router() external view returns (address);
    }
}

impl From<Bytes64> for EquitoApp::bytes64 {
    fn from(value: Bytes64) -> Self {
        Self {
            lower: FixedBytes(value.lower),
            upper: FixedBytes(value.upper),
        }
    }
}

impl From<EquitoApp::bytes64> for Bytes64 {
    fn from(value: EquitoApp::bytes64) -> Self {
        Bytes64::from_words(value.lower.0, value.upper.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::Address;
    use std::str::FromStr;

    #[test]
    fn test_bytes64_conversion_preserves_words() {
        let addr = Address::from_str("0x1234567890abcdef1234567890abcdef12345678").unwrap();
        let encoded = Bytes64::from_evm_address(addr);

        let sol_value: EquitoApp::bytes64 = encoded.into();
        assert_eq!(sol_value.lower.0, encoded.lower);
        assert_eq!(sol_value.upper.0, [0u8; 32]);

        let back: Bytes64 = sol_value.into();
        assert_eq!(back, encoded);
        assert_eq!(back.to_evm_address(), addr);
    }
}
