//! Peer List Document
//!
//! Deployment state lives in `equito.json`: a `peers` array with one entry
//! per chain the local contract knows about. The deploy tool writes it, the
//! peer-registration tool reads it. Fields other than `peers` are preserved
//! verbatim across a load/save cycle so external tooling can keep its own
//! keys in the same document.
//!
//! The at-most-one-peer-per-chain invariant is enforced by [`PeersConfig::upsert`],
//! not by the container itself.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;

/// A remote chain's deployed contract instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    /// Chain name as used by the selector table (e.g. "ethereum")
    pub chain: String,
    /// Deployed contract address on that chain
    pub address: Address,
}

/// Outcome of inserting a peer into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No peer existed for the chain; a new entry was appended
    Added,
    /// A peer existed with a different address; it was replaced
    Updated,
    /// An identical peer already existed; nothing changed
    Unchanged,
}

/// The `equito.json` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeersConfig {
    #[serde(default)]
    pub peers: Vec<Peer>,

    /// Any other document fields, carried through untouched.
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl PeersConfig {
    /// Read the document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the document back, pretty-printed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let mut raw = serde_json::to_string_pretty(self)?;
        raw.push('\n');
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Find the peer for a chain by exact name.
    pub fn find(&self, chain: &str) -> Option<&Peer> {
        self.peers.iter().find(|peer| peer.chain == chain)
    }

    /// Insert or replace the peer for `peer.chain`, keeping at most one
    /// entry per chain name.
    pub fn upsert(&mut self, peer: Peer) -> UpsertOutcome {
        match self.peers.iter_mut().find(|p| p.chain == peer.chain) {
            None => {
                self.peers.push(peer);
                UpsertOutcome::Added
            }
            Some(existing) if existing.address == peer.address => UpsertOutcome::Unchanged,
            Some(existing) => {
                existing.address = peer.address;
                UpsertOutcome::Updated
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn addr(n: u8) -> Address {
        Address::from_slice(&[n; 20])
    }

    #[test]
    fn test_upsert_outcomes() {
        let mut config = PeersConfig::default();

        let outcome = config.upsert(Peer {
            chain: "ethereum".to_string(),
            address: addr(1),
        });
        assert_eq!(outcome, UpsertOutcome::Added);
        assert_eq!(config.peers.len(), 1);

        // Same chain, same address
        let outcome = config.upsert(Peer {
            chain: "ethereum".to_string(),
            address: addr(1),
        });
        assert_eq!(outcome, UpsertOutcome::Unchanged);
        assert_eq!(config.peers.len(), 1);

        // Same chain, new address replaces in place
        let outcome = config.upsert(Peer {
            chain: "ethereum".to_string(),
            address: addr(2),
        });
        assert_eq!(outcome, UpsertOutcome::Updated);
        assert_eq!(config.peers.len(), 1);
        assert_eq!(config.peers[0].address, addr(2));

        // Different chain is appended
        let outcome = config.upsert(Peer {
            chain: "polygon".to_string(),
            address: addr(3),
        });
        assert_eq!(outcome, UpsertOutcome::Added);
        assert_eq!(config.peers.len(), 2);
    }

    #[test]
    fn test_find_by_chain_name() {
        let mut config = PeersConfig::default();
        config.upsert(Peer {
            chain: "polygon".to_string(),
            address: addr(7),
        });

        assert_eq!(config.find("polygon").unwrap().address, addr(7));
        assert!(config.find("ethereum").is_none());
        // Name matching is exact here; case folding belongs to the selector table
        assert!(config.find("Polygon").is_none());
    }

    #[test]
    fn test_parse_document() {
        let config: PeersConfig = serde_json::from_str(
            r#"{
                "peers": [
                    {"chain": "ethereum", "address": "0x1234567890abcdef1234567890abcdef12345678"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.peers.len(), 1);
        assert_eq!(config.peers[0].chain, "ethereum");
        assert_eq!(
            config.peers[0].address,
            Address::from_str("0x1234567890abcdef1234567890abcdef12345678").unwrap()
        );
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let raw = r#"{"peers": [], "routerAddress": "0xabc", "note": 42}"#;
        let config: PeersConfig = serde_json::from_str(raw).unwrap();

        let reserialized = serde_json::to_string(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&reserialized).unwrap();
        assert_eq!(value["routerAddress"], "0xabc");
        assert_eq!(value["note"], 42);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equito.json");

        let mut config = PeersConfig::default();
        config.upsert(Peer {
            chain: "ethereum".to_string(),
            address: addr(9),
        });
        config.save(&path).unwrap();

        let loaded = PeersConfig::load(&path).unwrap();
        assert_eq!(loaded.peers, config.peers);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = PeersConfig::load("/nonexistent/equito.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
