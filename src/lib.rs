//! Token Doctor Library
//!
//! Detects honeypot and high-tax tokens by running a buy → sell round trip
//! through a helper contract inside `eth_call`. The helper reverts with the
//! outcome, so nothing is broadcast, nothing persists and no gas is spent.

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::core::{CallExecutor, CallOutcome, SimulationCall, TokenSimulator};
pub use models::{
    AppError, AppResult, DecodedOutcome, DoctorConfig, ErrorCode, RiskLevel, RouterVersion,
    SimulationReport, SimulationRequest,
};
pub use providers::{RpcFailure, RpcProvider};
pub use utils::ContractArtifact;
