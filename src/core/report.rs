//! Report builder

use crate::core::risk::{classify, format_tax_percent};
use crate::models::types::{DecodedOutcome, RiskLevel, SimulationReport};

impl SimulationReport {
    /// Report for a successfully decoded round trip
    pub fn from_outcome(outcome: &DecodedOutcome) -> Self {
        Self {
            success: true,
            buy_success: outcome.buy_success,
            sell_success: outcome.sell_success,
            buy_gas_used: outcome.buy_gas_used.to_string(),
            sell_gas_used: outcome.sell_gas_used.to_string(),
            buy_tax_percent: format_tax_percent(outcome.buy_tax),
            sell_tax_percent: format_tax_percent(outcome.sell_tax),
            error: Some(outcome.contract_error.clone()).filter(|e| !e.is_empty()),
            risk_level: classify(outcome),
        }
    }

    /// Canonical failure report.
    ///
    /// Tax fields are the bare `"0"`, not `"0.00"`: nothing was measured.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            buy_success: false,
            sell_success: false,
            buy_gas_used: "0".to_string(),
            sell_gas_used: "0".to_string(),
            buy_tax_percent: "0".to_string(),
            sell_tax_percent: "0".to_string(),
            error: Some(message.into()),
            risk_level: RiskLevel::Critical,
        }
    }

    /// One-line summary for logs and the CLI
    pub fn summary(&self) -> String {
        if !self.success {
            return format!(
                "{} {} | Simulation failed: {}",
                self.risk_level.emoji(),
                self.risk_level.as_str(),
                self.error.as_deref().unwrap_or("unknown")
            );
        }
        format!(
            "{} {} | Buy: {} | Sell: {} | Buy Tax: {}% | Sell Tax: {}% | Gas: {}/{}",
            self.risk_level.emoji(),
            self.risk_level.as_str(),
            if self.buy_success { "✅" } else { "❌" },
            if self.sell_success { "✅" } else { "❌" },
            self.buy_tax_percent,
            self.sell_tax_percent,
            self.buy_gas_used,
            self.sell_gas_used
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    fn outcome(buy_tax: u64, sell_tax: u64) -> DecodedOutcome {
        DecodedOutcome {
            buy_success: true,
            sell_success: true,
            buy_tax: U256::from(buy_tax),
            sell_tax: U256::from(sell_tax),
            buy_gas_used: U256::from(100_000u64),
            sell_gas_used: U256::from(80_000u64),
            contract_error: String::new(),
        }
    }

    #[test]
    fn test_clean_token_report() {
        let report = SimulationReport::from_outcome(&outcome(100, 150));
        assert!(report.success);
        assert!(report.buy_success);
        assert!(report.sell_success);
        assert_eq!(report.buy_tax_percent, "1.00");
        assert_eq!(report.sell_tax_percent, "1.50");
        assert_eq!(report.buy_gas_used, "100000");
        assert_eq!(report.sell_gas_used, "80000");
        assert_eq!(report.error, None);
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_high_tax_report() {
        let report = SimulationReport::from_outcome(&outcome(3500, 3500));
        assert!(report.success);
        assert_eq!(report.sell_tax_percent, "35.00");
        assert_eq!(report.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_honeypot_report_keeps_contract_error() {
        let honeypot = DecodedOutcome {
            sell_success: false,
            sell_tax: U256::from(10_000u64),
            sell_gas_used: U256::ZERO,
            contract_error: "Sell failed".to_string(),
            ..outcome(100, 0)
        };
        let report = SimulationReport::from_outcome(&honeypot);
        assert!(report.success);
        assert!(!report.sell_success);
        assert_eq!(report.error.as_deref(), Some("Sell failed"));
        assert_eq!(report.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn test_error_report_shape() {
        let report = SimulationReport::error("Test error");
        assert!(!report.success);
        assert!(!report.buy_success);
        assert!(!report.sell_success);
        assert_eq!(report.buy_gas_used, "0");
        assert_eq!(report.sell_gas_used, "0");
        assert_eq!(report.buy_tax_percent, "0");
        assert_eq!(report.sell_tax_percent, "0");
        assert_eq!(report.error.as_deref(), Some("Test error"));
        assert_eq!(report.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn test_summary_mentions_failure_reason() {
        let summary = SimulationReport::error("boom").summary();
        assert!(summary.contains("CRITICAL"));
        assert!(summary.contains("boom"));
    }
}
