//! Equito-Peers: Shared Library for Equito Peer Deployment Tooling
//!
//! This crate provides the pieces shared by the deployment binaries:
//!
//! - **Address Codec** - Conversion between 20-byte EVM addresses and the
//!   64-byte `bytes64` slot used by the Equito message struct
//! - **Chain Selectors** - Resolution of human-readable chain names to the
//!   numeric selectors used by the Equito routing table
//! - **Peer List** - The `equito.json` document tracking the deployed
//!   contract instance per chain
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! equito-peers = { path = "../equito-peers" }
//! ```

pub mod address_codec;
pub mod error;
pub mod peers;
pub mod selectors;

// Re-export commonly used items at the crate root
pub use address_codec::Bytes64;
pub use error::Error;
pub use peers::{Peer, PeersConfig, UpsertOutcome};
pub use selectors::{ChainSelector, ChainSelectorTable};
