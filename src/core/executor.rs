//! Call executor
//!
//! Runs the helper contract through `eth_call`, never a transaction. The
//! helper always reverts with its result, so a revert is the expected path
//! and a normal return is an anomaly.
//!
//! When the helper address has no code on the target chain, its bytecode is
//! injected for this one call through the `eth_call` state-override
//! parameter. Nothing is deployed.

use alloy_primitives::{Address, Bytes, U256};
use serde_json::{json, Map, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::providers::rpc::{RpcFailure, RpcProvider};
use crate::utils::constants::{BLOCK_TAG_LATEST, EMPTY_CODE, ENV_ARTIFACT_PATH};

/// One `eth_call` against the helper contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationCall {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
}

/// What the node did with the call
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// Call returned normally (hex output)
    Returned(String),
    /// Call failed; the transport's error object, whatever its shape
    Failed(Value),
}

/// `[{from,to,data,value}, "latest"(, {to: {code}})]`
pub fn build_call_params(call: &SimulationCall, code_override: Option<&Bytes>) -> Value {
    let tx = json!({
        "from": call.from.to_string(),
        "to": call.to.to_string(),
        "data": format!("0x{}", hex::encode(&call.data)),
        "value": format!("{:#x}", call.value),
    });

    let mut params = vec![tx, Value::from(BLOCK_TAG_LATEST)];

    if let Some(code) = code_override {
        let mut overrides = Map::new();
        overrides.insert(
            call.to.to_string(),
            json!({ "code": format!("0x{}", hex::encode(code)) }),
        );
        params.push(Value::Object(overrides));
    }

    Value::Array(params)
}

/// Executes simulation calls over a shared provider
pub struct CallExecutor<'a> {
    provider: &'a RpcProvider,
    bytecode: Option<&'a Bytes>,
    timeout: Duration,
}

impl<'a> CallExecutor<'a> {
    pub fn new(provider: &'a RpcProvider, bytecode: Option<&'a Bytes>, timeout: Duration) -> Self {
        Self {
            provider,
            bytecode,
            timeout,
        }
    }

    /// Run the call, bounded by the configured timeout.
    ///
    /// `Err` only for local misconfiguration (override needed but no
    /// bytecode loaded). Every remote failure is `CallOutcome::Failed`.
    pub async fn execute(&self, call: &SimulationCall) -> AppResult<CallOutcome> {
        match tokio::time::timeout(self.timeout, self.execute_inner(call)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!("⏱️ Simulation call timed out after {:?}", self.timeout);
                let err = AppError::rpc_timeout(format!(
                    "Simulation call timed out after {}ms",
                    self.timeout.as_millis()
                ));
                Ok(CallOutcome::Failed(RpcFailure::Transport(err).into_error_value()))
            }
        }
    }

    async fn execute_inner(&self, call: &SimulationCall) -> AppResult<CallOutcome> {
        let code = match self.provider.get_code(call.to).await {
            Ok(code) => code,
            Err(failure) => {
                warn!("⚠️ eth_getCode failed for {}: {}", call.to, failure);
                return Ok(CallOutcome::Failed(failure.into_error_value()));
            }
        };

        let code_override = if is_empty_code(&code) {
            let bytecode = self.bytecode.ok_or_else(|| {
                AppError::new(
                    ErrorCode::ConfigArtifact,
                    format!(
                        "Helper contract not deployed at {} and no bytecode loaded ({})",
                        call.to, ENV_ARTIFACT_PATH
                    ),
                )
            })?;
            info!("💉 Injecting helper bytecode at {} via state override", call.to);
            Some(bytecode)
        } else {
            debug!("Helper contract already deployed at {}", call.to);
            None
        };

        let params = build_call_params(call, code_override);
        match self.provider.eth_call(params).await {
            Ok(output) => Ok(CallOutcome::Returned(output)),
            Err(failure) => Ok(CallOutcome::Failed(failure.into_error_value())),
        }
    }
}

fn is_empty_code(code: &str) -> bool {
    let trimmed = code.trim();
    trimmed.is_empty() || trimmed == EMPTY_CODE
}
