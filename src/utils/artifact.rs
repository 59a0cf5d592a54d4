//! Compiled helper contract artifact (`{ "abi": [...], "bytecode": "0x..." }`)
//!
//! The calldata and error layouts are declared statically in
//! `core::encoder`/`core::decoder`; the artifact supplies the bytecode that
//! gets injected via state override, and its ABI is only checked for drift.

use alloy_primitives::Bytes;
use serde::Deserialize;
use std::path::Path;
use tracing::{error, info, warn};

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::utils::constants::{
    DEFAULT_ARTIFACT_PATH, ENV_ARTIFACT_PATH, ENV_DOCTOR_BYTECODE,
};

/// Function the simulation calls
pub const SIMULATION_FUNCTION: &str = "simulation";
/// Error the helper reverts with
pub const SIMULATION_ERROR: &str = "SimulationResult";

#[derive(Debug, Deserialize)]
struct RawArtifact {
    #[serde(default)]
    abi: Vec<AbiEntry>,
    #[serde(default)]
    bytecode: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct AbiEntry {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    name: Option<String>,
}

/// Helper contract bytecode plus what its ABI declares
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub bytecode: Option<Bytes>,
    pub has_simulation_function: bool,
    pub has_simulation_error: bool,
}

impl ContractArtifact {
    /// Artifact carrying only bytecode (ABI assumed to match)
    pub fn from_bytecode(bytecode: Bytes) -> Self {
        Self {
            bytecode: Some(bytecode),
            has_simulation_function: true,
            has_simulation_error: true,
        }
    }

    /// Parse artifact JSON
    pub fn from_json(json: &str) -> AppResult<Self> {
        let raw: RawArtifact = serde_json::from_str(json).map_err(|e| {
            AppError::with_source(ErrorCode::ConfigArtifact, "Malformed contract artifact", e)
        })?;

        let declares = |kind: &str, name: &str| {
            raw.abi
                .iter()
                .any(|entry| entry.kind == kind && entry.name.as_deref() == Some(name))
        };
        let has_simulation_function = declares("function", SIMULATION_FUNCTION);
        let has_simulation_error = declares("error", SIMULATION_ERROR);

        let bytecode = match raw.bytecode.as_deref().map(str::trim) {
            None | Some("") | Some("0x") => None,
            Some(code) => Some(decode_bytecode(code)?),
        };

        Ok(Self {
            bytecode,
            has_simulation_function,
            has_simulation_error,
        })
    }

    /// Read artifact from disk
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorCode::ConfigArtifact,
                format!("Contract artifact not found at path: {}", path.display()),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    /// Load from `DOCTOR_ARTIFACT_PATH`, falling back to inline
    /// `DOCTOR_BYTECODE`. Failures are logged, never fatal.
    pub fn from_env() -> Option<Self> {
        let path = std::env::var(ENV_ARTIFACT_PATH)
            .unwrap_or_else(|_| DEFAULT_ARTIFACT_PATH.to_string());

        match Self::load(&path) {
            Ok(artifact) => {
                artifact.check_abi();
                info!("✅ Contract artifact loaded successfully from {}", path);
                return Some(artifact);
            }
            Err(e) => error!("❌ Failed to load contract artifact: {}", e),
        }

        let inline = std::env::var(ENV_DOCTOR_BYTECODE).ok()?;
        match decode_bytecode(inline.trim()) {
            Ok(code) => {
                info!("✅ Using helper bytecode from {}", ENV_DOCTOR_BYTECODE);
                Some(Self::from_bytecode(code))
            }
            Err(e) => {
                error!("❌ {}", e);
                None
            }
        }
    }

    /// Warn when the compiled ABI no longer matches the static declarations
    pub fn check_abi(&self) {
        if !self.has_simulation_function {
            warn!("⚠️ Artifact ABI does not declare function `{}`", SIMULATION_FUNCTION);
        }
        if !self.has_simulation_error {
            warn!("⚠️ Artifact ABI does not declare error `{}`", SIMULATION_ERROR);
        }
    }
}

fn decode_bytecode(code: &str) -> AppResult<Bytes> {
    hex::decode(code.strip_prefix("0x").unwrap_or(code))
        .map(Bytes::from)
        .map_err(|e| AppError::with_source(ErrorCode::ConfigArtifact, "Bytecode is not valid hex", e))
}
