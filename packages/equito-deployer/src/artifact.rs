//! Compiled Contract Artifacts
//!
//! The user contract is compiled by the external build pipeline into the
//! conventional artifact tree: `<artifacts>/contracts/<Name>.sol/<Name>.json`
//! with the ABI and creation bytecode. This module loads an artifact and
//! assembles the creation code for an Equito app contract, whose constructor
//! takes the router address for the target chain.

use alloy::primitives::Address;
use equito_peers::Bytes64;
use eyre::{eyre, Result, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A compiled contract artifact (ABI + creation bytecode).
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    #[serde(rename = "contractName")]
    pub contract_name: String,
    pub abi: serde_json::Value,
    pub bytecode: String,
}

impl ContractArtifact {
    /// Conventional artifact path for a contract name.
    pub fn path_for(artifacts_dir: impl AsRef<Path>, contract_name: &str) -> PathBuf {
        artifacts_dir
            .as_ref()
            .join("contracts")
            .join(format!("{contract_name}.sol"))
            .join(format!("{contract_name}.json"))
    }

    /// Load the artifact for a contract from the artifacts tree.
    pub fn load(artifacts_dir: impl AsRef<Path>, contract_name: &str) -> Result<Self> {
        let path = Self::path_for(artifacts_dir, contract_name);
        let raw = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read artifact {}", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Parse an artifact from its JSON representation.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).wrap_err("Malformed contract artifact")
    }

    /// Creation code for deployment: bytecode followed by the ABI-encoded
    /// constructor argument (router address left-padded to 32 bytes).
    pub fn deploy_code(&self, router: Address) -> Result<Vec<u8>> {
        let hex_str = self.bytecode.strip_prefix("0x").unwrap_or(&self.bytecode);
        let mut code = hex::decode(hex_str)
            .wrap_err_with(|| format!("Invalid bytecode in artifact {}", self.contract_name))?;

        // Interfaces and abstract contracts compile to empty bytecode
        if code.is_empty() {
            return Err(eyre!(
                "Artifact {} has no creation bytecode (abstract contract or interface?)",
                self.contract_name
            ));
        }

        code.extend_from_slice(&Bytes64::from_evm_address(router).lower);
        Ok(code)
    }
}
