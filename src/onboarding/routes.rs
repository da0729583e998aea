//! REST endpoints for the onboarding flow.
//!
//! Wire contract: JSON bodies, camelCase field names. Client-input failures
//! return 400 with a `{message}` body; anything else is a 500.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::error::Error;

use super::service::{OnboardingService, Registration};

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<OnboardingService>,
}

// Absent fields deserialize to empty values so the service's completeness
// check (not a framework 422) decides the response.

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RegisterRequest {
    full_name: String,
    email: String,
    password: String,
    confirm_password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SelectRoleRequest {
    email: String,
    role: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SurveyRequest {
    email: String,
    answers: Vec<String>,
}

/// Map a service error onto the wire.
fn error_response(err: Error) -> Response {
    match err {
        Error::Onboarding(err) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": err.to_string() })),
        )
            .into_response(),
        other => {
            tracing::error!(error = %other, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
                .into_response()
        }
    }
}

/// POST /api/register
async fn register(State(state): State<AppState>, Json(req): Json<RegisterRequest>) -> Response {
    let registration = Registration {
        full_name: req.full_name,
        email: req.email,
        password: req.password,
        confirm_password: req.confirm_password,
    };
    match state.service.register(registration).await {
        Ok(_) => Json(json!({ "message": "Registration successful" })).into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /api/login
async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    match state.service.login(&req.email, &req.password).await {
        Ok(token) => Json(json!({ "token": token })).into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /api/select-role
async fn select_role(State(state): State<AppState>, Json(req): Json<SelectRoleRequest>) -> Response {
    match state.service.select_role(&req.email, req.role).await {
        Ok(_) => Json(json!({ "message": "Role updated" })).into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /api/survey
async fn submit_survey(State(state): State<AppState>, Json(req): Json<SurveyRequest>) -> Response {
    match state.service.submit_survey(&req.email, req.answers).await {
        Ok(score) => Json(json!({ "message": "Survey saved", "score": score })).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Build the onboarding REST routes.
pub fn onboarding_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/select-role", post(select_role))
        .route("/api/survey", post(submit_survey))
        .route("/health", get(health))
        .with_state(state)
}
