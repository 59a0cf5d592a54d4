//! HTTP API tests

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use common::*;
use serde_json::{json, Value};
use std::sync::Arc;
use token_doctor::api::{create_router, AppState};
use token_doctor::{DoctorConfig, TokenSimulator};
use tower::ServiceExt;

fn app(simulator: TokenSimulator) -> Router {
    create_router(Arc::new(AppState::new(Arc::new(simulator))))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app(TokenSimulator::new(DoctorConfig::default(), None));

    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["uptimeSeconds"].is_u64());
}

#[tokio::test]
async fn test_post_without_token_is_bad_request() {
    let app = app(TokenSimulator::new(DoctorConfig::default(), None));

    let (status, body) = send(app, post_json("/simulation", json!({ "isV3": true }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "API_BAD_REQUEST");
    assert_eq!(body["message"], "Token address is required");
}

#[tokio::test]
async fn test_post_with_null_or_blank_token_is_bad_request() {
    for token in [Value::Null, json!(""), json!("   ")] {
        let app = app(TokenSimulator::new(DoctorConfig::default(), None));

        let request = post_json("/simulation", json!({ "tokenAddress": token }));
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "tokenAddress = {}", token);
        assert_eq!(body["code"], "API_BAD_REQUEST");
        assert_eq!(body["message"], "Token address is required");
        assert!(body.get("details").is_none());
    }
}

#[tokio::test]
async fn test_get_without_token_is_bad_request() {
    let app = app(TokenSimulator::new(DoctorConfig::default(), None));

    let (status, body) = send(app, get("/simulation/check?v3=true")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Token address is required");
}

#[tokio::test]
async fn test_post_returns_report() {
    let revert = simulation_result(true, true, 100, 150, 120_000, 95_000, "");
    let node = FakeNode::spawn("0x6080604052", CallReply::revert(revert)).await;

    let request = post_json(
        "/simulation",
        json!({ "tokenAddress": USDC, "isV3": true, "feeTier": 3000 }),
    );
    let (status, body) = send(app(node.simulator()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["buyTaxPercent"], "1.00");
    assert_eq!(body["sellTaxPercent"], "1.50");
    assert_eq!(body["buyGasUsed"], "120000");
    assert_eq!(body["riskLevel"], "LOW");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_simulation_failure_is_still_ok_status() {
    let app = app(TokenSimulator::new(DoctorConfig::default(), None));

    let request = post_json("/simulation", json!({ "tokenAddress": USDC }));
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["riskLevel"], "CRITICAL");
    assert_eq!(body["error"], "Missing configuration: RPC_URL");
}

#[tokio::test]
async fn test_check_defaults_to_v2_unless_v3_is_true() {
    let revert = simulation_result(true, false, 0, 0, 1, 0, "Sell failed");
    let node = FakeNode::spawn("0x6080604052", CallReply::revert(revert)).await;

    let uri = format!("/simulation/check?token={}&v3=yes", USDC);
    let (status, body) = send(app(node.simulator()), get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "CRITICAL");
    assert_eq!(body["error"], "Sell failed");

    let tx = &node.params_of("eth_call")[0][0];
    let data = hex::decode(tx["data"].as_str().unwrap().trim_start_matches("0x")).unwrap();
    let call = <token_doctor::core::encoder::simulationCall as alloy_sol_types::SolCall>::abi_decode(&data, true).unwrap();
    assert_eq!(call.router, v2_router());
    assert_eq!(call.fee.to::<u32>(), 0);
}
