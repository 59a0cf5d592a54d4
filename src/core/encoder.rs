//! Calldata for the helper contract's `simulation` entry point

use alloy_primitives::{aliases::U24, Address, Bytes};
use alloy_sol_types::{sol, SolCall};

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::MAX_FEE_TIER;

sol! {
    /// Buys `token` with the sent value via `router`, sells it back, then
    /// reverts with `SimulationResult`. Never returns normally.
    function simulation(address token, address router, address weth, uint24 fee) external payable;
}

/// Encode `simulation(token, router, weth, fee)`.
///
/// `fee` must already be zero for routers without fee tiers.
pub fn encode_simulation(
    token: Address,
    router: Address,
    weth: Address,
    fee: u32,
) -> AppResult<Bytes> {
    if fee > MAX_FEE_TIER {
        return Err(AppError::encode_failed(format!(
            "Fee tier {} does not fit in uint24",
            fee
        )));
    }

    let call = simulationCall {
        token,
        router,
        weth,
        fee: U24::from(fee),
    };
    Ok(Bytes::from(call.abi_encode()))
}
