//! HTTP API handlers.

use std::time::Instant;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use crate::config::Config;
use crate::metrics;
use crate::utils::iso8601_now;

/// Application name reported by `/api/info`.
pub const APP_NAME: &str = "cicd-pipeline-app";

/// Welcome message served at the root endpoint.
pub const WELCOME_MESSAGE: &str = "Welcome to CI/CD Pipeline Demo App";

/// Minimum supported Rust toolchain, reported as the runtime version.
pub const RUNTIME_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

/// Read-only process state shared with handlers.
///
/// Constructed once at startup from [`Config`]; handlers never read
/// the process environment directly.
#[derive(Debug, Clone)]
pub struct AppState {
    /// When the process started, for uptime reporting.
    pub started_at: Instant,
    /// Reported version string.
    pub version: String,
    /// Environment label (development, staging, production).
    pub environment: String,
}

impl AppState {
    /// Create app state from configuration, starting the uptime clock now.
    pub fn from_config(config: &Config) -> Self {
        Self {
            started_at: Instant::now(),
            version: config.app_version.clone(),
            environment: config.app_env.clone(),
        }
    }

    /// Seconds elapsed since the process started.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: always "healthy".
    pub status: &'static str,
    /// Current time, RFC 3339.
    pub timestamp: String,
    /// Reported version.
    pub version: String,
}

/// Welcome response served at the root endpoint.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    /// Welcome message.
    pub message: &'static str,
    /// Environment label.
    pub environment: String,
    /// Current time, RFC 3339.
    pub timestamp: String,
}

/// Application info response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    /// Application name.
    pub app: &'static str,
    /// Reported version.
    pub version: String,
    /// Rust toolchain version the crate declares.
    pub runtime_version: &'static str,
    /// Environment label.
    pub environment: String,
    /// Seconds since process start.
    pub uptime_seconds: f64,
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    metrics::inc_requests("/health");

    Json(HealthResponse {
        status: "healthy",
        timestamp: iso8601_now(),
        version: state.version.clone(),
    })
}

/// Root handler - welcome message with environment label.
pub async fn welcome(State(state): State<AppState>) -> impl IntoResponse {
    metrics::inc_requests("/");

    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
        environment: state.environment.clone(),
        timestamp: iso8601_now(),
    })
}

/// Info handler - application identity and uptime.
pub async fn info(State(state): State<AppState>) -> impl IntoResponse {
    metrics::inc_requests("/api/info");

    Json(InfoResponse {
        app: APP_NAME,
        version: state.version.clone(),
        runtime_version: RUNTIME_VERSION,
        environment: state.environment.clone(),
        uptime_seconds: state.uptime_seconds(),
    })
}
