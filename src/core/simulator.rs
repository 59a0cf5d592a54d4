//! Token simulation pipeline
//!
//! encode → execute → unwrap revert → decode → classify → report.
//!
//! `simulate` never fails: every configuration problem, transport error,
//! protocol anomaly and decode failure ends in a CRITICAL error report.
//! A honeypot is not a failure; it is a successful decode with a severe
//! risk level.

use alloy_primitives::{Address, Bytes};
use std::str::FromStr;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::core::decoder::decode_simulation_result;
use crate::core::encoder::encode_simulation;
use crate::core::executor::{CallExecutor, CallOutcome, SimulationCall};
use crate::core::revert::unwrap_revert_data;
use crate::models::config::DoctorConfig;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{RouterVersion, SimulationReport, SimulationRequest};
use crate::providers::rpc::RpcProvider;
use crate::utils::artifact::ContractArtifact;
use crate::utils::constants::{
    ENV_RPC_URL, MSG_DECODE_FAILED, MSG_INVALID_TOKEN, MSG_NO_REVERT,
};

/// Honeypot simulator. Build once at startup and share behind an `Arc`.
pub struct TokenSimulator {
    config: DoctorConfig,
    /// `None` when `RPC_URL` is unset or the client could not be built
    provider: Option<RpcProvider>,
    bytecode: Option<Bytes>,
}

impl TokenSimulator {
    /// Build the simulator. Never fails: missing pieces are reported per call.
    pub fn new(config: DoctorConfig, artifact: Option<ContractArtifact>) -> Self {
        let provider = config.rpc_url.as_deref().and_then(|url| {
            match RpcProvider::new(url, config.rpc_timeout) {
                Ok(provider) => {
                    info!("✅ RPC provider initialized ({})", provider.masked_url());
                    Some(provider)
                }
                Err(e) => {
                    error!("❌ Failed to initialize RPC provider: {}", e);
                    None
                }
            }
        });

        if provider.is_none() && config.rpc_url.is_none() {
            warn!("⚠️ {} not set; simulations will report a configuration error", ENV_RPC_URL);
        }

        Self {
            config,
            provider,
            bytecode: artifact.and_then(|a| a.bytecode),
        }
    }

    /// Load configuration and artifact from the environment
    pub fn from_env() -> Self {
        Self::new(DoctorConfig::from_env(), ContractArtifact::from_env())
    }

    /// Simulate a request object
    pub async fn run(&self, request: &SimulationRequest) -> SimulationReport {
        self.simulate(request.token().unwrap_or_default(), request.is_v3, request.fee_tier)
            .await
    }

    /// Simulate a buy → sell round trip for `token_address`.
    ///
    /// `fee_tier` only applies to V3; V2 always sends 0.
    pub async fn simulate(&self, token_address: &str, is_v3: bool, fee_tier: u32) -> SimulationReport {
        let start = Instant::now();
        let version = RouterVersion::from_flag(is_v3);
        let fee = version.effective_fee(fee_tier);

        info!(
            "💉 Simulating {} on {} (Fee: {})",
            token_address,
            version.as_str(),
            fee
        );

        let report = match self.try_simulate(token_address, version, fee).await {
            Ok(report) => report,
            Err(e) => {
                error!("❌ Simulation aborted [{}]: {}", e.code_str(), e.message);
                SimulationReport::error(e.message)
            }
        };

        info!(
            "📊 Report for {}: {} ({}ms)",
            token_address,
            report.summary(),
            start.elapsed().as_millis()
        );
        report
    }

    async fn try_simulate(
        &self,
        token_address: &str,
        version: RouterVersion,
        fee: u32,
    ) -> AppResult<SimulationReport> {
        let token = Address::from_str(token_address.trim())
            .map_err(|_| AppError::invalid_address(MSG_INVALID_TOKEN))?;

        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| AppError::missing_config(ENV_RPC_URL))?;
        let route = self.config.resolve(version)?;

        let call = SimulationCall {
            from: route.sender,
            to: route.doctor,
            data: encode_simulation(token, route.router, route.weth, fee)?,
            value: route.value,
        };

        let executor = CallExecutor::new(provider, self.bytecode.as_ref(), self.config.rpc_timeout);
        let failure = match executor.execute(&call).await? {
            CallOutcome::Returned(_) => {
                warn!("Simulation finished without revert (Unexpected).");
                return Err(AppError::no_revert(MSG_NO_REVERT));
            }
            CallOutcome::Failed(failure) => failure,
        };

        let revert_data = unwrap_revert_data(&failure);
        match decode_simulation_result(&revert_data) {
            Ok(outcome) => Ok(SimulationReport::from_outcome(&outcome)),
            Err(e) => {
                error!("Failed to decode error data: {}", e);
                Err(AppError::decode_failed(MSG_DECODE_FAILED))
            }
        }
    }
}
