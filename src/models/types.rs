//! Type definitions for Token Doctor
//! Request, decoded outcome and report structures

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_V3_FEE_TIER;

/// Risk level produced by a simulation.
///
/// Terminal classifications, not points on a scale: there is no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Round trip worked with tolerable tax
    Low,
    /// Buy failed or sell tax above 30%
    High,
    /// Token cannot be sold, or the simulation itself failed
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::Low => "🟢",
            RiskLevel::High => "🔴",
            RiskLevel::Critical => "💀",
        }
    }
}

/// DEX interaction style targeted by the helper contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterVersion {
    V2,
    V3,
}

impl RouterVersion {
    pub fn from_flag(is_v3: bool) -> Self {
        if is_v3 {
            Self::V3
        } else {
            Self::V2
        }
    }

    /// Fee tier actually sent on-chain; V2 pools have no tiers
    pub fn effective_fee(&self, fee_tier: u32) -> u32 {
        match self {
            Self::V3 => fee_tier,
            Self::V2 => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "V2",
            Self::V3 => "V3",
        }
    }
}

/// Inbound simulation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// `null` and absent both mean "not given"
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default = "default_is_v3")]
    pub is_v3: bool,
    #[serde(default = "default_fee_tier")]
    pub fee_tier: u32,
}

impl SimulationRequest {
    /// Token address, if one was given and is not blank
    pub fn token(&self) -> Option<&str> {
        self.token_address
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

fn default_is_v3() -> bool {
    true
}

fn default_fee_tier() -> u32 {
    DEFAULT_V3_FEE_TIER
}

/// Fields carried by the helper contract's `SimulationResult` revert.
///
/// Taxes are scaled by 100 (`100` = 1.00%).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedOutcome {
    pub buy_success: bool,
    pub sell_success: bool,
    pub buy_tax: U256,
    pub sell_tax: U256,
    pub buy_gas_used: U256,
    pub sell_gas_used: U256,
    pub contract_error: String,
}

/// Result of one simulation, as handed to callers.
///
/// `success` says whether decoding worked, not whether the token is safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub success: bool,
    pub buy_success: bool,
    pub sell_success: bool,
    pub buy_gas_used: String,
    pub sell_gas_used: String,
    pub buy_tax_percent: String,
    /// Sell tax is the total round-trip loss
    pub sell_tax_percent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::Critical).unwrap(), "\"CRITICAL\"");
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"LOW\"");
        assert_eq!(RiskLevel::High.as_str(), "HIGH");
    }

    #[test]
    fn test_request_defaults() {
        let req: SimulationRequest =
            serde_json::from_str(r#"{"tokenAddress":"0xabc"}"#).unwrap();
        assert!(req.is_v3);
        assert_eq!(req.fee_tier, 3000);
        assert_eq!(req.token(), Some("0xabc"));
    }

    #[test]
    fn test_request_token_null_or_blank() {
        for body in [r#"{"tokenAddress":null}"#, r#"{"tokenAddress":"  "}"#, "{}"] {
            let req: SimulationRequest = serde_json::from_str(body).unwrap();
            assert_eq!(req.token(), None, "{}", body);
        }
    }

    #[test]
    fn test_v2_forces_zero_fee() {
        assert_eq!(RouterVersion::from_flag(false).effective_fee(3000), 0);
        assert_eq!(RouterVersion::from_flag(true).effective_fee(500), 500);
    }

    #[test]
    fn test_report_omits_absent_error() {
        let report = SimulationReport {
            success: true,
            buy_success: true,
            sell_success: true,
            buy_gas_used: "1".to_string(),
            sell_gas_used: "2".to_string(),
            buy_tax_percent: "0.00".to_string(),
            sell_tax_percent: "0.00".to_string(),
            error: None,
            risk_level: RiskLevel::Low,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["riskLevel"], "LOW");
        assert_eq!(json["buyGasUsed"], "1");
    }
}
