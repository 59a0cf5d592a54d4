//! API Request/Response Types
//!
//! `SimulationReport` itself is the success body; these are the extras.

use serde::{Deserialize, Serialize};

use crate::models::errors::AppError;

/// API Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code_str().to_string(),
            message: err.message,
        }
    }
}

/// Query for `GET /simulation/check`
#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub token: Option<String>,
    /// Only the exact string "true" selects V3
    pub v3: Option<String>,
}

impl CheckQuery {
    pub fn is_v3(&self) -> bool {
        self.v3.as_deref() == Some("true")
    }
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v3_flag_is_strict() {
        let query = |v3: Option<&str>| CheckQuery {
            token: None,
            v3: v3.map(String::from),
        };
        assert!(query(Some("true")).is_v3());
        assert!(!query(Some("TRUE")).is_v3());
        assert!(!query(Some("1")).is_v3());
        assert!(!query(None).is_v3());
    }

    #[test]
    fn test_api_error_from_app_error() {
        let err = ApiError::from(AppError::bad_request("Token address is required"));
        assert_eq!(err.code, "API_BAD_REQUEST");
        assert_eq!(err.message, "Token address is required");
    }
}
