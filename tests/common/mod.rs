//! In-process fake JSON-RPC node for pipeline tests

#![allow(dead_code)]

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolError;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use token_doctor::core::decoder::SimulationResult;
use token_doctor::{DoctorConfig, TokenSimulator};
use tokio::net::TcpListener;

pub const USDC: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";

pub fn doctor() -> Address {
    Address::repeat_byte(0xd0)
}
pub fn weth() -> Address {
    Address::repeat_byte(0xee)
}
pub fn v3_router() -> Address {
    Address::repeat_byte(0x33)
}
pub fn v2_router() -> Address {
    Address::repeat_byte(0x22)
}
pub fn sender() -> Address {
    Address::repeat_byte(0x5e)
}

/// How the fake node answers `eth_call`
#[derive(Clone)]
pub enum CallReply {
    /// JSON-RPC error object, returned with the given HTTP status
    Error { status: u16, error: Value },
    /// Normal result
    Return(String),
    /// Never answers in time
    Hang,
}

impl CallReply {
    /// Standard `execution reverted` with a payload
    pub fn revert(data: String) -> Self {
        Self::Error {
            status: 200,
            error: json!({"code": 3, "message": "execution reverted", "data": data}),
        }
    }

    /// Node-side rejection without revert data
    pub fn rejected(message: &str) -> Self {
        Self::Error {
            status: 200,
            error: json!({"code": -32000, "message": message}),
        }
    }
}

struct NodeState {
    code: String,
    reply: CallReply,
    requests: Mutex<Vec<Value>>,
}

pub struct FakeNode {
    pub url: String,
    state: Arc<NodeState>,
}

impl FakeNode {
    /// Start a node whose helper address holds `code` ("0x" = not deployed)
    pub async fn spawn(code: &str, reply: CallReply) -> Self {
        let state = Arc::new(NodeState {
            code: code.to_string(),
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().route("/", post(handle)).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            state,
        }
    }

    /// Params of every request received for `method`
    pub fn params_of(&self, method: &str) -> Vec<Value> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|req| req["method"] == method)
            .map(|req| req["params"].clone())
            .collect()
    }

    pub fn config(&self) -> DoctorConfig {
        DoctorConfig {
            rpc_url: Some(self.url.clone()),
            doctor_address: Some(doctor()),
            weth_address: Some(weth()),
            v3_router: Some(v3_router()),
            v2_router: Some(v2_router()),
            sender: Some(sender()),
            rpc_timeout: Duration::from_secs(5),
            ..DoctorConfig::default()
        }
    }

    pub fn simulator(&self) -> TokenSimulator {
        TokenSimulator::new(self.config(), None)
    }
}

async fn handle(State(state): State<Arc<NodeState>>, Json(req): Json<Value>) -> (StatusCode, Json<Value>) {
    state.requests.lock().unwrap().push(req.clone());
    let id = req["id"].clone();

    match req["method"].as_str() {
        Some("eth_getCode") => (
            StatusCode::OK,
            Json(json!({"jsonrpc": "2.0", "id": id, "result": state.code})),
        ),
        Some("eth_call") => match &state.reply {
            CallReply::Error { status, error } => (
                StatusCode::from_u16(*status).unwrap(),
                Json(json!({"jsonrpc": "2.0", "id": id, "error": error})),
            ),
            CallReply::Return(output) => (
                StatusCode::OK,
                Json(json!({"jsonrpc": "2.0", "id": id, "result": output})),
            ),
            CallReply::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                (StatusCode::OK, Json(json!({"jsonrpc": "2.0", "id": id, "result": "0x"})))
            }
        },
        _ => (
            StatusCode::OK,
            Json(json!({"jsonrpc": "2.0", "id": id, "error": {"code": -32601, "message": "Method not found"}})),
        ),
    }
}

/// Hex revert payload for a `SimulationResult`
pub fn simulation_result(
    buy_success: bool,
    sell_success: bool,
    buy_tax: u64,
    sell_tax: u64,
    buy_gas: u64,
    sell_gas: u64,
    reason: &str,
) -> String {
    let result = SimulationResult {
        buySuccess: buy_success,
        sellSuccess: sell_success,
        buyTax: U256::from(buy_tax),
        sellTax: U256::from(sell_tax),
        buyGasUsed: U256::from(buy_gas),
        sellGasUsed: U256::from(sell_gas),
        reason: reason.to_string(),
    };
    format!("0x{}", hex::encode(result.abi_encode()))
}

/// Helper bytecode used for state-override tests
pub fn helper_bytecode() -> Bytes {
    Bytes::from(vec![0x60, 0x80, 0x60, 0x40, 0x52])
}
