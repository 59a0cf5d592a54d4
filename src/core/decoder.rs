//! Result decoder for the helper contract's revert payload
//!
//! The payload must be the custom error
//! `SimulationResult(bool,bool,uint256,uint256,uint256,uint256,string)`.
//! Anything else is a decode failure; standard `Error(string)` and
//! `Panic(uint256)` reverts are recognised only to give operators a reason.

use alloy_primitives::Bytes;
use alloy_sol_types::{sol, Panic, Revert, SolError};

use crate::models::errors::{AppError, AppResult};
use crate::models::types::DecodedOutcome;

sol! {
    /// Outcome of the buy/sell round trip. Taxes are scaled by 100.
    error SimulationResult(
        bool buySuccess,
        bool sellSuccess,
        uint256 buyTax,
        uint256 sellTax,
        uint256 buyGasUsed,
        uint256 sellGasUsed,
        string reason
    );
}

impl From<SimulationResult> for DecodedOutcome {
    fn from(result: SimulationResult) -> Self {
        Self {
            buy_success: result.buySuccess,
            sell_success: result.sellSuccess,
            buy_tax: result.buyTax,
            sell_tax: result.sellTax,
            buy_gas_used: result.buyGasUsed,
            sell_gas_used: result.sellGasUsed,
            contract_error: result.reason,
        }
    }
}

/// Parse a `0x`-prefixed (or bare) hex string into bytes
pub fn parse_revert_hex(data: &str) -> AppResult<Bytes> {
    let trimmed = data.trim();
    if trimmed.is_empty() {
        return Err(AppError::decode_failed("Empty revert data"));
    }

    hex::decode(trimmed.strip_prefix("0x").unwrap_or(trimmed))
        .map(Bytes::from)
        .map_err(|e| AppError::decode_failed(format!("Revert data is not hex: {}", e)))
}

/// Decode unwrapped revert data into a `DecodedOutcome`
pub fn decode_simulation_result(data: &str) -> AppResult<DecodedOutcome> {
    let bytes = parse_revert_hex(data)?;

    match SimulationResult::abi_decode(&bytes, true) {
        Ok(result) => Ok(result.into()),
        Err(e) => Err(AppError::decode_failed(describe_foreign_revert(&bytes)
            .unwrap_or_else(|| format!("Not a SimulationResult: {}", e)))),
    }
}

/// Name a standard Solidity revert, if that's what the payload is
fn describe_foreign_revert(bytes: &[u8]) -> Option<String> {
    if let Ok(revert) = Revert::abi_decode(bytes, true) {
        return Some(format!("Reverted with Error(\"{}\")", revert.reason));
    }
    if let Ok(panic) = Panic::abi_decode(bytes, true) {
        return Some(format!("Reverted with Panic({:#x})", panic.code));
    }
    None
}
