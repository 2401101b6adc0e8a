//! Deploys the user contract named by `CONTRACT_NAME` to the chain named by
//! `CHAIN_NAME`, passing the chain's Equito router address to the
//! constructor, and records the deployed address in the peers document.

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use eyre::{eyre, Result, WrapErr};
use tracing::info;

use equito_deployer::artifact::ContractArtifact;
use equito_deployer::{init_logging, Config, RouterClient};
use equito_peers::{ChainSelectorTable, Peer, PeersConfig, UpsertOutcome};

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
    info!(
        chain = %config.chain_name,
        contract = %config.contract_name,
        "Starting contract deployment"
    );

    // Resolve the target chain's selector, then its router on the Equito network
    let selectors = ChainSelectorTable::load(&config.chain_selectors_path).wrap_err_with(|| {
        format!(
            "Failed to load chain selector table from {}",
            config.chain_selectors_path
        )
    })?;
    let selector = selectors.resolve(&config.chain_name)?;

    let router = RouterClient::new(&config.equito_rpc_url)?
        .get_router(selector)
        .await?;
    info!(selector = %selector, router = %router, "Resolved Equito router");

    // Assemble creation code: compiled bytecode + router constructor argument
    let artifact = ContractArtifact::load(&config.artifacts_dir, &config.contract_name)?;
    let deploy_code = artifact.deploy_code(router)?;

    // Build provider with signer
    let signer: PrivateKeySigner = config
        .private_key
        .parse()
        .wrap_err("Invalid private key")?;
    let deployer = signer.address();
    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .on_http(config.evm_rpc_url.parse().wrap_err("Invalid RPC URL")?);

    info!(deployer = %deployer, code_len = deploy_code.len(), "Submitting deployment transaction");
    let tx = TransactionRequest::default().with_deploy_code(deploy_code);

    let pending = provider
        .send_transaction(tx)
        .await
        .map_err(|e| eyre!("Failed to send deployment transaction: {}", e))?;
    let tx_hash = *pending.tx_hash();
    info!(tx_hash = %tx_hash, "Transaction sent, waiting for confirmation");

    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| eyre!("Failed to get receipt: {}", e))?;

    if !receipt.status() {
        return Err(eyre!("Deployment transaction reverted"));
    }
    let contract_address = receipt
        .contract_address
        .ok_or_else(|| eyre!("Receipt has no contract address"))?;
    info!(
        contract = %config.contract_name,
        address = %contract_address,
        "Contract deployed"
    );

    // Record the new peer for this chain
    let mut peers = PeersConfig::load(&config.peers_config_path).wrap_err_with(|| {
        format!("Failed to load peers document from {}", config.peers_config_path)
    })?;

    let outcome = peers.upsert(Peer {
        chain: config.chain_name.clone(),
        address: contract_address,
    });
    match outcome {
        UpsertOutcome::Added => {
            peers.save(&config.peers_config_path)?;
            info!(
                chain = %config.chain_name,
                path = %config.peers_config_path,
                "Added new peer to peers document"
            );
        }
        UpsertOutcome::Updated => {
            peers.save(&config.peers_config_path)?;
            info!(
                chain = %config.chain_name,
                address = %contract_address,
                "Updated peer with new address"
            );
        }
        UpsertOutcome::Unchanged => {
            info!(chain = %config.chain_name, "Peer already recorded with this address");
        }
    }

    Ok(())
}
