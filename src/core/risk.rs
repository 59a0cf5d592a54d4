//! Risk classification of a decoded round trip
//!
//! Rules, first match wins:
//! 1. sell failed → CRITICAL (token cannot be resold)
//! 2. buy failed, or sell tax above 30% → HIGH
//! 3. otherwise → LOW

use alloy_primitives::U256;

use crate::models::types::{DecodedOutcome, RiskLevel};
use crate::utils::constants::{HIGH_SELL_TAX_THRESHOLD, TAX_SCALE};

/// Classify a decoded outcome
pub fn classify(outcome: &DecodedOutcome) -> RiskLevel {
    if !outcome.sell_success {
        return RiskLevel::Critical;
    }
    if !outcome.buy_success || outcome.sell_tax > U256::from(HIGH_SELL_TAX_THRESHOLD) {
        return RiskLevel::High;
    }
    RiskLevel::Low
}

/// Render a x100-scaled tax as a percentage with exactly two decimals.
///
/// Integer arithmetic, so exact for any `U256`: `3500` → `"35.00"`.
pub fn format_tax_percent(raw: U256) -> String {
    let scale = U256::from(TAX_SCALE);
    let whole = raw / scale;
    let cents = (raw % scale).to::<u64>();
    format!("{}.{:02}", whole, cents)
}
