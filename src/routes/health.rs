//! Liveness probe for container orchestration.
//!
//! Returns 200 OK while the process can answer HTTP. Served at `/healthz` so the
//! panel UI can keep `/health` for the health panel and the asset server does
//! not shadow a front-end route of that name.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
