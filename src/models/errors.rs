//! Centralized Error Handling Module
//!
//! Every internal failure carries a unique error code so operators can grep
//! the logs. None of these escape `TokenSimulator::simulate`: they are turned
//! into CRITICAL reports at the boundary.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - RPC_xxx: RPC-related errors
//! - SIM_xxx: Simulation errors
//! - API_xxx: API errors
//! - CFG_xxx: Configuration errors
//! - TOKEN_xxx: Token input errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // RPC Errors
    // ============================================
    /// RPC connection failed
    RpcConnectionFailed,
    /// RPC request timeout
    RpcTimeout,
    /// RPC returned error response
    RpcError,
    /// Invalid RPC response
    RpcInvalidResponse,

    // ============================================
    // Simulation Errors
    // ============================================
    /// Helper contract returned instead of reverting
    SimulationNoRevert,
    /// Revert data missing or not a SimulationResult
    SimulationDecodeFailed,
    /// Calldata could not be encoded
    SimulationEncodeFailed,

    // ============================================
    // API Errors
    // ============================================
    /// Invalid request format
    ApiBadRequest,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Missing environment variable
    ConfigMissingEnv,
    /// Invalid configuration value
    ConfigInvalidValue,
    /// Contract artifact missing or malformed
    ConfigArtifact,

    // ============================================
    // Token Errors
    // ============================================
    /// Invalid token address
    TokenInvalidAddress,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RpcConnectionFailed => "RPC_CONNECTION_FAILED",
            Self::RpcTimeout => "RPC_TIMEOUT",
            Self::RpcError => "RPC_ERROR",
            Self::RpcInvalidResponse => "RPC_INVALID_RESPONSE",

            Self::SimulationNoRevert => "SIM_NO_REVERT",
            Self::SimulationDecodeFailed => "SIM_DECODE_FAILED",
            Self::SimulationEncodeFailed => "SIM_ENCODE_FAILED",

            Self::ApiBadRequest => "API_BAD_REQUEST",

            Self::ConfigMissingEnv => "CFG_MISSING_ENV",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
            Self::ConfigArtifact => "CFG_ARTIFACT",

            Self::TokenInvalidAddress => "TOKEN_INVALID_ADDRESS",
        }
    }

    /// HTTP status when the error is answered directly by the API
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ApiBadRequest => 400,
            _ => 500,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// RPC timeout
    pub fn rpc_timeout(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::RpcTimeout, msg)
    }

    /// Helper contract returned normally
    pub fn no_revert(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::SimulationNoRevert, msg)
    }

    /// Revert payload could not be decoded
    pub fn decode_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::SimulationDecodeFailed, msg)
    }

    /// Calldata encoding rejected an argument
    pub fn encode_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::SimulationEncodeFailed, msg)
    }

    /// Required setting absent
    pub fn missing_config(var: &str) -> Self {
        Self::new(
            ErrorCode::ConfigMissingEnv,
            format!("Missing configuration: {}", var),
        )
    }

    /// Setting present but unusable
    pub fn invalid_config(var: &str) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            format!("Invalid configuration: {}", var),
        )
    }

    /// Invalid token address
    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::TokenInvalidAddress, msg)
    }

    /// API bad request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiBadRequest, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorCode::RpcTimeout, "Request timeout")
        } else if err.is_connect() {
            Self::new(ErrorCode::RpcConnectionFailed, "Connection failed")
        } else {
            Self::new(ErrorCode::RpcError, err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::RpcInvalidResponse, "JSON parse error", err)
    }
}
