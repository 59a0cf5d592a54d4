//! API Request Handlers

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use std::time::Instant;

use super::types::*;
use crate::core::simulator::TokenSimulator;
use crate::models::errors::AppError;
use crate::models::types::{SimulationReport, SimulationRequest};
use crate::utils::constants::{DEFAULT_V3_FEE_TIER, MSG_TOKEN_REQUIRED};

type ApiRejection = (StatusCode, Json<ApiError>);

/// Shared application state
pub struct AppState {
    pub simulator: Arc<TokenSimulator>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(simulator: Arc<TokenSimulator>) -> Self {
        Self {
            simulator,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

fn rejection(err: AppError) -> ApiRejection {
    let status = StatusCode::from_u16(err.code.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ApiError::from(err)))
}

fn token_required() -> ApiRejection {
    rejection(AppError::bad_request(MSG_TOKEN_REQUIRED))
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthData> {
    Json(HealthData {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

// ============================================
// Simulation
// ============================================

/// `POST /simulation`
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SimulationRequest>,
) -> Result<Json<SimulationReport>, ApiRejection> {
    if req.token().is_none() {
        return Err(token_required());
    }

    Ok(Json(state.simulator.run(&req).await))
}

/// `GET /simulation/check?token=..&v3=..`
pub async fn check_token(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CheckQuery>,
) -> Result<Json<SimulationReport>, ApiRejection> {
    let token = match query.token.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => token,
        _ => return Err(token_required()),
    };

    let report = state
        .simulator
        .simulate(token, query.is_v3(), DEFAULT_V3_FEE_TIER)
        .await;
    Ok(Json(report))
}
