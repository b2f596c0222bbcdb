//! Health check endpoints
//!
//! Liveness never touches shared state. Readiness reads the user repository
//! and session store so a wedged repository shows up as 503.

use actix_web::HttpResponse;
use actix_web::web::{Data, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repositories::UserRepository;
use crate::session::SessionStore;

/// Liveness health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LivenessResponse {
    /// Service status
    pub status: String,
    /// Timestamp of the check
    pub timestamp: DateTime<Utc>,
}

/// Readiness health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    /// Service readiness status
    pub status: String,
    /// Application version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: DateTime<Utc>,
    /// User repository status
    pub repository: String,
    /// Number of stored accounts, absent when the repository is unavailable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<usize>,
    /// Number of stored sessions
    pub sessions: usize,
}

/// Liveness check endpoint
///
/// Always 200 while the process is serving requests.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = LivenessResponse),
    )
)]
#[get("/health")]
pub async fn health() -> Json<LivenessResponse> {
    ::tracing::debug!("Liveness check: healthy");

    Json(LivenessResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// Readiness probe
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Service is not ready", body = ReadinessResponse),
    )
)]
#[get("/health/ready")]
pub async fn ready(users: Data<dyn UserRepository>, sessions: Data<SessionStore>) -> HttpResponse {
    let users = match users.count().await {
        Ok(count) => Some(count),
        Err(e) => {
            ::tracing::warn!(error = %e, "User repository unavailable");
            None
        }
    };
    let is_ready = users.is_some();
    let status = if is_ready { "ready" } else { "not_ready" };

    let response = ReadinessResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        repository: if is_ready { "available" } else { "unavailable" }.to_string(),
        users,
        sessions: sessions.len(),
    };

    ::tracing::debug!(status, users = ?response.users, sessions = response.sessions, "Readiness check performed");

    if is_ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
