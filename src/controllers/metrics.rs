use actix_web::HttpResponse;
use actix_web::web::Data;

use crate::metrics::AppMetrics;
use crate::repositories::UserRepository;
use crate::session::SessionStore;

/// Metrics endpoint for Prometheus scraping
///
/// Gauges are refreshed from the repository and session store on every scrape.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses((status = 200, description = "Prometheus text format", content_type = "text/plain", body = String)),
)]
#[get("/metrics")]
pub async fn metrics(
    metrics: Data<AppMetrics>,
    users: Data<dyn UserRepository>,
    sessions: Data<SessionStore>,
) -> HttpResponse {
    match users.count().await {
        Ok(count) => metrics.set_users_total(count),
        Err(e) => ::tracing::warn!(error = %e, "Unable to count users for metrics"),
    }
    metrics.set_sessions_active(sessions.len());

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics.render())
}
