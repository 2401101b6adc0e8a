//! Deployer configuration
//!
//! Loaded from environment variables, with an optional `.env` file picked up
//! first. Required variables fail loudly at startup; path variables fall
//! back to the conventional repo layout.

use eyre::{eyre, Result, WrapErr};
use std::env;
use std::fmt;
use std::path::Path;

/// Main configuration for the deployment binaries.
#[derive(Clone)]
pub struct Config {
    /// Equito network RPC endpoint (router lookups)
    pub equito_rpc_url: String,
    /// Target EVM chain RPC endpoint
    pub evm_rpc_url: String,
    /// Private key used for deployment and peer registration
    pub private_key: String,
    /// Name of the chain being targeted, resolved via the selector table
    pub chain_name: String,
    /// Name of the user contract to deploy
    pub contract_name: String,
    /// Path to the peers document (equito.json)
    pub peers_config_path: String,
    /// Path to the chain selector table
    pub chain_selectors_path: String,
    /// Root of the compiled contract artifacts tree
    pub artifacts_dir: String,
}

/// Custom Debug that redacts the private key to prevent accidental log leakage.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("equito_rpc_url", &self.equito_rpc_url)
            .field("evm_rpc_url", &self.evm_rpc_url)
            .field("private_key", &"<redacted>")
            .field("chain_name", &self.chain_name)
            .field("contract_name", &self.contract_name)
            .field("peers_config_path", &self.peers_config_path)
            .field("chain_selectors_path", &self.chain_selectors_path)
            .field("artifacts_dir", &self.artifacts_dir)
            .finish()
    }
}

fn default_peers_config_path() -> String {
    "config/equito.json".to_string()
}

fn default_chain_selectors_path() -> String {
    "config/chain-selectors.json".to_string()
}

fn default_artifacts_dir() -> String {
    "artifacts".to_string()
}

impl Config {
    /// Load configuration, reading a `.env` file first if one exists.
    pub fn load() -> Result<Self> {
        Self::load_from_file(".env")
    }

    /// Load from a specific `.env` file path, then the environment.
    pub fn load_from_file(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            dotenvy::from_filename(path)
                .wrap_err_with(|| format!("Failed to load .env file from {}", path))?;
        }
        Self::load_from_env()
    }

    /// Load configuration from environment variables only.
    pub fn load_from_env() -> Result<Self> {
        let config = Config {
            equito_rpc_url: env::var("EQUITO_RPC_URL")
                .map_err(|_| eyre!("EQUITO_RPC_URL environment variable is required"))?,
            evm_rpc_url: env::var("EVM_RPC_URL")
                .map_err(|_| eyre!("EVM_RPC_URL environment variable is required"))?,
            private_key: env::var("EVM_PRIVATE_KEY")
                .map_err(|_| eyre!("EVM_PRIVATE_KEY environment variable is required"))?,
            chain_name: env::var("CHAIN_NAME")
                .map_err(|_| eyre!("CHAIN_NAME environment variable is required"))?,
            contract_name: env::var("CONTRACT_NAME")
                .map_err(|_| eyre!("CONTRACT_NAME environment variable is required"))?,
            peers_config_path: env::var("PEERS_CONFIG_PATH")
                .unwrap_or_else(|_| default_peers_config_path()),
            chain_selectors_path: env::var("CHAIN_SELECTORS_PATH")
                .unwrap_or_else(|_| default_chain_selectors_path()),
            artifacts_dir: env::var("ARTIFACTS_DIR").unwrap_or_else(|_| default_artifacts_dir()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.equito_rpc_url.is_empty() {
            return Err(eyre!("EQUITO_RPC_URL cannot be empty"));
        }

        if self.evm_rpc_url.is_empty() {
            return Err(eyre!("EVM_RPC_URL cannot be empty"));
        }

        if self.private_key.len() != 66 || !self.private_key.starts_with("0x") {
            return Err(eyre!(
                "EVM_PRIVATE_KEY must be 66 chars (0x + 64 hex chars)"
            ));
        }

        if self.chain_name.is_empty() {
            return Err(eyre!("CHAIN_NAME cannot be empty"));
        }

        if self.contract_name.is_empty() {
            return Err(eyre!("CONTRACT_NAME cannot be empty"));
        }

        Ok(())
    }
}
