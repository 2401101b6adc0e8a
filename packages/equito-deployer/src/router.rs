//! Equito Network Router Lookup
//!
//! Each chain supported by Equito has a router contract registered on the
//! Equito network, keyed by chain selector. The deploy flow needs that
//! router address as the user contract's constructor argument, so this
//! module provides a thin JSON-RPC client against the Equito RPC endpoint.

use alloy::primitives::Address;
use equito_peers::address_codec::parse_evm_address;
use equito_peers::selectors::ChainSelector;
use eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<serde_json::Value>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Client for router address lookups on the Equito network.
pub struct RouterClient {
    http: reqwest::Client,
    rpc_url: String,
}

impl RouterClient {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            http,
            rpc_url: rpc_url.to_string(),
        })
    }

    /// Fetch the router contract address registered for a chain selector.
    ///
    /// Fails if the RPC returns an error, no result, or anything that does
    /// not parse as an EVM address. Proceeding with a bad router address
    /// would bake it into the deployed contract, so callers must halt.
    pub async fn get_router(&self, selector: ChainSelector) -> Result<Address> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "equito_getRouter",
            params: json!([selector.as_u64()]),
        };

        debug!(selector = %selector, rpc_url = %self.rpc_url, "Querying router address");

        let response: RpcResponse = self
            .http
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .wrap_err("Equito RPC request failed")?
            .json()
            .await
            .wrap_err("Equito RPC returned invalid JSON")?;

        parse_router_response(response)
            .wrap_err_with(|| format!("Could not fetch router for selector {}", selector))
    }
}

fn parse_router_response(response: RpcResponse) -> Result<Address> {
    if let Some(error) = response.error {
        return Err(eyre!("RPC error {}: {}", error.code, error.message));
    }

    let result = response.result.ok_or_else(|| eyre!("RPC returned no result"))?;

    let raw = result
        .as_str()
        .ok_or_else(|| eyre!("Router result is not a string: {result}"))?;

    let router = parse_evm_address(raw)
        .map_err(|e| eyre!("Invalid router address from Equito network: {e}"))?;

    Ok(router)
}
