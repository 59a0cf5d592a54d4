//! RPC Client Module
//!
//! Thin JSON-RPC client over `reqwest` for a single endpoint. No retries and
//! no fallback: a failed call is handed back to the caller with the node's
//! error object intact, because the simulation result travels inside it.

use alloy_primitives::Address;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING, USER_AGENT};
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;
use tracing::debug;

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::utils::constants::{BLOCK_TAG_LATEST, USER_AGENT as USER_AGENT_CONST};

/// Why a JSON-RPC request produced no result
#[derive(Debug)]
pub enum RpcFailure {
    /// The node answered with a JSON-RPC error; holds the whole response body
    Rejected(Value),
    /// The request never produced a JSON-RPC answer
    Transport(AppError),
}

impl RpcFailure {
    /// Error as a generic key/value object, in the shape the transport saw it
    pub fn into_error_value(self) -> Value {
        match self {
            Self::Rejected(body) => body,
            Self::Transport(err) => json!({
                "code": err.code_str(),
                "message": err.message,
            }),
        }
    }
}

impl fmt::Display for RpcFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(body) => {
                let message = body
                    .pointer("/error/message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown");
                write!(f, "RPC error: {}", message)
            }
            Self::Transport(err) => write!(f, "{}", err),
        }
    }
}

impl From<AppError> for RpcFailure {
    fn from(err: AppError) -> Self {
        Self::Transport(err)
    }
}

impl From<reqwest::Error> for RpcFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.into())
    }
}

/// JSON-RPC provider bound to one endpoint
#[derive(Clone)]
pub struct RpcProvider {
    url: String,
    /// HTTP client with custom headers (gzip enabled)
    client: reqwest::Client,
}

impl RpcProvider {
    /// Create a provider; `timeout` bounds every HTTP request
    pub fn new(url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            url: url.into(),
            client: Self::build_client(timeout)?,
        })
    }

    /// Build HTTP client with custom headers
    fn build_client(timeout: Duration) -> AppResult<reqwest::Client> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_CONST));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));

        reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| AppError::with_source(ErrorCode::RpcConnectionFailed, "Failed to build HTTP client", e))
    }

    /// Execute a single JSON-RPC call and return its `result`
    pub async fn call(&self, method: &str, params: Value) -> Result<Value, RpcFailure> {
        let payload = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });

        debug!("➡️ {} {}", method, self.masked_url());

        let response = self.client.post(&self.url).json(&payload).send().await?;
        let status = response.status();
        let text = response.text().await?;

        // Some nodes pair reverts with non-2xx codes, so look at the body first
        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(AppError::from(e).into()),
            Err(_) => {
                return Err(AppError::new(ErrorCode::RpcError, format!("HTTP error: {}", status)).into())
            }
        };

        if body.get("error").map_or(false, |e| !e.is_null()) {
            return Err(RpcFailure::Rejected(body));
        }
        if !status.is_success() {
            return Err(AppError::new(ErrorCode::RpcError, format!("HTTP error: {}", status)).into());
        }

        match body {
            Value::Object(mut map) => map.remove("result").ok_or_else(|| {
                AppError::new(ErrorCode::RpcInvalidResponse, "No result in response").into()
            }),
            _ => Err(AppError::new(ErrorCode::RpcInvalidResponse, "Response is not an object").into()),
        }
    }

    /// `eth_getCode` at the latest block, as a hex string
    pub async fn get_code(&self, address: Address) -> Result<String, RpcFailure> {
        let params = json!([address.to_string(), BLOCK_TAG_LATEST]);
        let result = self.call("eth_getCode", params).await?;
        as_hex_string(result)
    }

    /// `eth_call` with caller-built params, returning the hex output
    pub async fn eth_call(&self, params: Value) -> Result<String, RpcFailure> {
        let result = self.call("eth_call", params).await?;
        as_hex_string(result)
    }

    /// RPC URL with any path secret hidden (for logging)
    pub fn masked_url(&self) -> String {
        match self.url.split_once("/v2/") {
            Some((base, _)) => format!("{}/v2/***HIDDEN***", base),
            None => self.url.clone(),
        }
    }
}

fn as_hex_string(result: Value) -> Result<String, RpcFailure> {
    match result {
        Value::String(s) => Ok(s),
        other => Err(AppError::new(
            ErrorCode::RpcInvalidResponse,
            format!("Expected hex string, got {}", other),
        )
        .into()),
    }
}
