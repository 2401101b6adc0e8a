//! Registers every peer from the peers document on the local contract
//! instance (the one deployed for `CHAIN_NAME`), by calling `setPeers` with
//! parallel chain-selector and `bytes64` address lists.

use alloy::network::EthereumWallet;
use alloy::primitives::U256;
use alloy::providers::ProviderBuilder;
use alloy::signers::local::PrivateKeySigner;
use eyre::{eyre, Result, WrapErr};
use tracing::info;

use equito_deployer::contracts::EquitoApp;
use equito_deployer::{init_logging, Config};
use equito_peers::{Bytes64, ChainSelectorTable, PeersConfig};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    init_logging();

    let config = Config::load()?;
    info!(chain = %config.chain_name, "Registering peers");

    let peers = PeersConfig::load(&config.peers_config_path).wrap_err_with(|| {
        format!("Failed to load peers document from {}", config.peers_config_path)
    })?;

    // The contract we call lives at this chain's own peer entry
    let local = peers
        .find(&config.chain_name)
        .ok_or_else(|| eyre!("No peer found for chain: {}", config.chain_name))?;
    info!(address = %local.address, "Local peer contract");

    let selectors = ChainSelectorTable::load(&config.chain_selectors_path).wrap_err_with(|| {
        format!(
            "Failed to load chain selector table from {}",
            config.chain_selectors_path
        )
    })?;

    // Parallel argument lists for the setPeers call. Any unresolvable chain
    // name aborts the whole run; registering a partial peer set would leave
    // the contracts disagreeing about the network topology.
    let mut chain_selectors = Vec::with_capacity(peers.peers.len());
    let mut addresses = Vec::with_capacity(peers.peers.len());
    for peer in &peers.peers {
        let selector = selectors.resolve(&peer.chain)?;
        chain_selectors.push(U256::from(selector.as_u64()));
        addresses.push(EquitoApp::bytes64::from(Bytes64::from_evm_address(
            peer.address,
        )));
    }

    if chain_selectors.len() != addresses.len() {
        return Err(eyre!(
            "Selector and address list lengths do not match: {} vs {}",
            chain_selectors.len(),
            addresses.len()
        ));
    }

    // Build provider with signer
    let signer: PrivateKeySigner = config
        .private_key
        .parse()
        .wrap_err("Invalid private key")?;
    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .on_http(config.evm_rpc_url.parse().wrap_err("Invalid RPC URL")?);

    let contract = EquitoApp::new(local.address, &provider);

    info!(count = chain_selectors.len(), "Submitting setPeers");
    let pending = contract
        .setPeers(chain_selectors, addresses)
        .send()
        .await
        .map_err(|e| eyre!("Failed to send transaction: {}", e))?;

    let tx_hash = *pending.tx_hash();
    info!(tx_hash = %tx_hash, "Transaction sent, waiting for confirmation");

    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| eyre!("Failed to get receipt: {}", e))?;

    if !receipt.status() {
        return Err(eyre!("setPeers transaction reverted"));
    }

    info!("Peers set successfully");
    Ok(())
}
