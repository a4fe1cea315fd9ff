//! HTTP routers for the two applications.
//!
//! The asset server answers `/api/config` and the liveness probe, and hands
//! every other path to the static service with its entry-document fallback.
//! The panel UI serves the form page, one page route and one JSON route per
//! panel, and a 404 page for anything else.
//!
//! Both routers wrap everything in the request ID middleware so every log line
//! of a request carries the same ID.

pub mod api;
pub mod health;
pub mod panels;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::config::AssetsConfig;
use crate::http::static_files::create_static_service;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Liveness probe path on both servers
pub const HEALTH_PATH: &str = "/healthz";

/// Creates the router of the static asset server.
pub fn create_site_router(assets: &AssetsConfig) -> Router {
    Router::new()
        .route("/api/config", get(api::get_config))
        .route(HEALTH_PATH, get(health::health))
        .fallback_service(create_static_service(assets))
        .layer(middleware::from_fn(request_id_layer))
}

/// Creates the router of the panel UI.
pub fn create_ui_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(panels::index))
        .route("/plan", get(panels::plan_page))
        .route("/schedule", get(panels::schedule_page))
        .route("/weather", get(panels::weather_page))
        .route("/health", get(panels::health_page))
        .route("/about", get(panels::about_page));

    let api_routes = Router::new()
        .route("/api/plan", post(panels::plan_api))
        .route("/api/schedule", post(panels::schedule_api))
        .route("/api/weather", post(panels::weather_api))
        .route("/api/health", post(panels::health_api))
        .route("/api/about", get(panels::about_api));

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .route(HEALTH_PATH, get(health::health))
        .fallback(panels::not_found)
        .with_state(state)
        .layer(middleware::from_fn(request_id_layer))
}
