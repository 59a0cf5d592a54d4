//! Configuration module for Token Doctor
//!
//! Addresses, endpoint and simulation amount are read once from the
//! environment. Missing values are not fatal here: `resolve` reports them per
//! request so each simulation stays independently observable.

use alloy_primitives::{utils::parse_ether, Address, U256};
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::RouterVersion;
use crate::utils::constants::{
    DEFAULT_RPC_TIMEOUT_SECS, DEFAULT_SIMULATE_AMOUNT_ETH, ENV_DOCTOR_ADDRESS, ENV_RPC_TIMEOUT,
    ENV_RPC_URL, ENV_SENDER, ENV_SIMULATE_AMOUNT, ENV_V2_ROUTER, ENV_V3_ROUTER, ENV_WETH_ADDRESS,
};

/// Static configuration shared read-only by every simulation
#[derive(Debug, Clone)]
pub struct DoctorConfig {
    /// JSON-RPC endpoint
    pub rpc_url: Option<String>,
    /// Where the helper contract lives (or gets injected)
    pub doctor_address: Option<Address>,
    /// Wrapped native asset (WETH)
    pub weth_address: Option<Address>,
    pub v3_router: Option<Address>,
    pub v2_router: Option<Address>,
    /// Synthetic `from` of the simulation call
    pub sender: Option<Address>,
    /// Notional as decimal ether, e.g. "0.1"
    pub simulate_amount_eth: String,
    /// Bound on the whole RPC round trip
    pub rpc_timeout: Duration,
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            doctor_address: None,
            weth_address: None,
            v3_router: None,
            v2_router: None,
            sender: None,
            simulate_amount_eth: DEFAULT_SIMULATE_AMOUNT_ETH.to_string(),
            rpc_timeout: Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECS),
        }
    }
}

/// Everything one simulation needs, with every setting present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub doctor: Address,
    pub router: Address,
    pub weth: Address,
    pub sender: Address,
    pub value: U256,
}

impl DoctorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let rpc_url = std::env::var(ENV_RPC_URL)
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let rpc_timeout = std::env::var(ENV_RPC_TIMEOUT)
            .ok()
            .and_then(|secs| match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    warn!("⚠️ Ignoring invalid {}={}", ENV_RPC_TIMEOUT, secs);
                    None
                }
            })
            .unwrap_or(defaults.rpc_timeout);

        Self {
            rpc_url,
            doctor_address: env_address(ENV_DOCTOR_ADDRESS),
            weth_address: env_address(ENV_WETH_ADDRESS),
            v3_router: env_address(ENV_V3_ROUTER),
            v2_router: env_address(ENV_V2_ROUTER),
            sender: env_address(ENV_SENDER),
            simulate_amount_eth: std::env::var(ENV_SIMULATE_AMOUNT)
                .unwrap_or(defaults.simulate_amount_eth),
            rpc_timeout,
        }
    }

    /// Router for the requested interaction style
    pub fn router_for(&self, version: RouterVersion) -> Option<Address> {
        match version {
            RouterVersion::V3 => self.v3_router,
            RouterVersion::V2 => self.v2_router,
        }
    }

    /// Simulation notional in wei
    pub fn simulate_amount_wei(&self) -> AppResult<U256> {
        parse_ether(self.simulate_amount_eth.trim())
            .map_err(|_| AppError::invalid_config(ENV_SIMULATE_AMOUNT))
    }

    /// Check that every setting the simulation needs is present
    pub fn resolve(&self, version: RouterVersion) -> AppResult<ResolvedRoute> {
        let router_var = match version {
            RouterVersion::V3 => ENV_V3_ROUTER,
            RouterVersion::V2 => ENV_V2_ROUTER,
        };

        Ok(ResolvedRoute {
            doctor: self
                .doctor_address
                .ok_or_else(|| AppError::missing_config(ENV_DOCTOR_ADDRESS))?,
            router: self
                .router_for(version)
                .ok_or_else(|| AppError::missing_config(router_var))?,
            weth: self
                .weth_address
                .ok_or_else(|| AppError::missing_config(ENV_WETH_ADDRESS))?,
            sender: self
                .sender
                .ok_or_else(|| AppError::missing_config(ENV_SENDER))?,
            value: self.simulate_amount_wei()?,
        })
    }
}

fn env_address(var: &str) -> Option<Address> {
    let raw = std::env::var(var).ok()?;
    match Address::from_str(raw.trim()) {
        Ok(addr) => Some(addr),
        Err(_) => {
            warn!("⚠️ Ignoring invalid address in {}: {}", var, raw);
            None
        }
    }
}
