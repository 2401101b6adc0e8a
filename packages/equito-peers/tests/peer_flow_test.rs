//! End-to-end test of the off-chain peer pipeline: selector table load,
//! name resolution, peer document round trip, and address encoding of the
//! resulting peer set. No network access required.

use alloy::primitives::Address;
use equito_peers::{Bytes64, ChainSelector, ChainSelectorTable, Peer, PeersConfig, UpsertOutcome};
use std::str::FromStr;

const SELECTORS: &str = r#"{
    "1": ["ethereum", "eth", "sepolia"],
    "2": ["bsc", "bnb"],
    "137": ["polygon", "matic"]
}"#;

#[test]
fn deploy_then_register_flow() {
    let dir = tempfile::tempdir().unwrap();
    let selectors_path = dir.path().join("chain-selectors.json");
    let peers_path = dir.path().join("equito.json");

    std::fs::write(&selectors_path, SELECTORS).unwrap();
    std::fs::write(&peers_path, r#"{"peers": []}"#).unwrap();

    let table = ChainSelectorTable::load(&selectors_path).unwrap();

    // Simulate two deployments recording their addresses
    let eth_peer = Address::from_str("0x1111111111111111111111111111111111111111").unwrap();
    let polygon_peer = Address::from_str("0x2222222222222222222222222222222222222222").unwrap();

    let mut doc = PeersConfig::load(&peers_path).unwrap();
    assert_eq!(
        doc.upsert(Peer {
            chain: "ethereum".to_string(),
            address: eth_peer,
        }),
        UpsertOutcome::Added
    );
    assert_eq!(
        doc.upsert(Peer {
            chain: "polygon".to_string(),
            address: polygon_peer,
        }),
        UpsertOutcome::Added
    );
    doc.save(&peers_path).unwrap();

    // The registration pass reloads the document and builds call arguments
    let doc = PeersConfig::load(&peers_path).unwrap();
    assert_eq!(doc.peers.len(), 2);

    let args: Vec<(ChainSelector, Bytes64)> = doc
        .peers
        .iter()
        .map(|peer| {
            (
                table.resolve(&peer.chain).unwrap(),
                Bytes64::from_evm_address(peer.address),
            )
        })
        .collect();

    assert_eq!(args[0].0, ChainSelector(1));
    assert_eq!(args[1].0, ChainSelector(137));

    // Encoded addresses decode back to what was deployed
    assert_eq!(args[0].1.to_evm_address(), eth_peer);
    assert_eq!(args[1].1.to_evm_address(), polygon_peer);
    for (_, encoded) in &args {
        assert_eq!(encoded.upper, [0u8; 32]);
        assert_eq!(&encoded.lower[0..12], &[0u8; 12]);
    }
}

#[test]
fn redeploy_updates_existing_peer() {
    let dir = tempfile::tempdir().unwrap();
    let peers_path = dir.path().join("equito.json");
    std::fs::write(&peers_path, r#"{"peers": []}"#).unwrap();

    let first = Address::from_str("0x1111111111111111111111111111111111111111").unwrap();
    let second = Address::from_str("0x3333333333333333333333333333333333333333").unwrap();

    let mut doc = PeersConfig::load(&peers_path).unwrap();
    doc.upsert(Peer {
        chain: "bsc".to_string(),
        address: first,
    });
    doc.save(&peers_path).unwrap();

    // Redeploy on the same chain
    let mut doc = PeersConfig::load(&peers_path).unwrap();
    assert_eq!(
        doc.upsert(Peer {
            chain: "bsc".to_string(),
            address: second,
        }),
        UpsertOutcome::Updated
    );
    doc.save(&peers_path).unwrap();

    let doc = PeersConfig::load(&peers_path).unwrap();
    assert_eq!(doc.peers.len(), 1);
    assert_eq!(doc.find("bsc").unwrap().address, second);
}
