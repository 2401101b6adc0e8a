//! Equito Deployer Library
//!
//! Shared pieces for the `deploy-contract` and `set-peers` binaries:
//!
//! - `config` - Environment-driven configuration (`.env` aware)
//! - `router` - Equito network RPC client for router address lookup
//! - `artifact` - Compiled contract artifact loading and creation code
//! - `contracts` - Equito app contract bindings (alloy `sol!` macro)

pub mod artifact;
pub mod config;
pub mod contracts;
pub mod router;

pub use config::Config;
pub use router::RouterClient;

/// Initialize tracing/logging with structured output.
///
/// Both binaries call this first; `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,equito_deployer=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}
