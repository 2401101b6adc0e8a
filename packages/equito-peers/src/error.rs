//! Error types for the equito-peers library
//!
//! Every variant is terminal: callers are expected to halt rather than
//! retry, since proceeding with an unresolved chain or a malformed address
//! would corrupt on-chain peer state.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a well-formed 20-byte EVM address.
    #[error("Invalid EVM address format: {input}")]
    InvalidAddressFormat { input: String },

    /// The chain name is not present in any alias list of the selector table.
    #[error("Invalid or un-supported chain name: {name}")]
    UnknownChain { name: String },

    /// The same alias appears under two different selectors in the table.
    /// Detected at load time so resolution never silently picks one.
    #[error("Duplicate alias '{alias}' maps to selectors {first} and {second}")]
    DuplicateAlias {
        alias: String,
        first: u64,
        second: u64,
    },

    /// A selector key in the table is not a string-encoded integer.
    #[error("Invalid selector key '{key}': expected a non-negative integer")]
    InvalidSelectorKey { key: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
