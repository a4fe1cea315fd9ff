//! Form UI handlers.
//!
//! Page handlers run a responder on the query string and render the panel
//! page with that panel's output. API handlers take JSON and return the
//! markdown directly.

use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
    Json,
};
use serde::Serialize;
use tracing::instrument;

use crate::config::APP_VERSION;
use crate::error::AppError;
use crate::responders::{
    self, plan::DURATION_RANGE, plan::PLANS, schedule::SCHEDULES, weather::WEATHER_ADVICE,
    HealthRequest, Panel, PlanRequest, ScheduleRequest, WeatherRequest,
};
use crate::state::AppState;
use crate::templates::PANELS_TEMPLATE;

/// Dropdown options, taken from the lookup tables
#[derive(Debug, Serialize)]
struct Choices {
    goals: Vec<&'static str>,
    intensities: Vec<&'static str>,
    activities: Vec<&'static str>,
    times: Vec<&'static str>,
    cities: Vec<&'static str>,
    weather_types: Vec<&'static str>,
}

impl Choices {
    fn from_tables() -> Self {
        Self {
            goals: PLANS.outer_keys().collect(),
            intensities: PLANS.inner_keys().collect(),
            activities: SCHEDULES.outer_keys().collect(),
            times: SCHEDULES.inner_keys().collect(),
            cities: WEATHER_ADVICE.outer_keys().collect(),
            weather_types: WEATHER_ADVICE.inner_keys().collect(),
        }
    }
}

/// Current value of every form, so a submitted panel keeps its selection
#[derive(Debug, Default, Serialize)]
struct Forms {
    plan: PlanRequest,
    schedule: ScheduleRequest,
    weather: WeatherRequest,
    health: HealthRequest,
}

#[derive(Debug, Serialize)]
struct PanelLink {
    slug: &'static str,
    title: &'static str,
}

/// JSON answer of the panel API
#[derive(Debug, Serialize)]
pub struct PanelResponse {
    pub panel: Panel,
    pub markdown: String,
}

impl PanelResponse {
    fn new(panel: Panel, markdown: String) -> Json<Self> {
        Json(Self { panel, markdown })
    }
}

fn render_page(
    state: &AppState,
    active: Option<Panel>,
    forms: &Forms,
    output: Option<String>,
) -> Result<Html<String>, AppError> {
    let panels: Vec<PanelLink> = Panel::ALL
        .iter()
        .map(|p| PanelLink {
            slug: p.slug(),
            title: p.title(),
        })
        .collect();

    let mut context = tera::Context::new();
    context.insert("site_name", state.config.ui.site_name());
    context.insert("version", APP_VERSION);
    context.insert("panels", &panels);
    context.insert("active", &active.map(Panel::slug).unwrap_or(""));
    context.insert("choices", &Choices::from_tables());
    context.insert(
        "limits",
        &serde_json::json!({
            "duration_min": DURATION_RANGE.0,
            "duration_max": DURATION_RANGE.1,
        }),
    );
    context.insert("forms", forms);
    context.insert("output", &output);

    let html = state.tera.render(PANELS_TEMPLATE, &context)?;
    Ok(Html(html))
}

/// Panel page with every form at its defaults
#[instrument(name = "panels::index", skip_all)]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, None, &Forms::default(), None)
}

#[instrument(
    name = "panels::plan",
    skip_all,
    fields(goal = %request.goal, duration = request.duration, intensity = %request.intensity)
)]
pub async fn plan_page(
    State(state): State<AppState>,
    Query(request): Query<PlanRequest>,
) -> Result<Html<String>, AppError> {
    let output = responders::plan(&request);
    let forms = Forms {
        plan: request,
        ..Forms::default()
    };
    render_page(&state, Some(Panel::Plan), &forms, Some(output))
}

#[instrument(
    name = "panels::schedule",
    skip_all,
    fields(activity = %request.activity, time = %request.time)
)]
pub async fn schedule_page(
    State(state): State<AppState>,
    Query(request): Query<ScheduleRequest>,
) -> Result<Html<String>, AppError> {
    let output = responders::schedule(&request);
    let forms = Forms {
        schedule: request,
        ..Forms::default()
    };
    render_page(&state, Some(Panel::Schedule), &forms, Some(output))
}

#[instrument(
    name = "panels::weather",
    skip_all,
    fields(city = %request.city, weather = %request.weather)
)]
pub async fn weather_page(
    State(state): State<AppState>,
    Query(request): Query<WeatherRequest>,
) -> Result<Html<String>, AppError> {
    let output = responders::weather(&request);
    let forms = Forms {
        weather: request,
        ..Forms::default()
    };
    render_page(&state, Some(Panel::Weather), &forms, Some(output))
}

#[instrument(
    name = "panels::health",
    skip_all,
    fields(steps = request.steps, calories = request.calories)
)]
pub async fn health_page(
    State(state): State<AppState>,
    Query(request): Query<HealthRequest>,
) -> Result<Html<String>, AppError> {
    let output = responders::health(&request);
    let forms = Forms {
        health: request,
        ..Forms::default()
    };
    render_page(&state, Some(Panel::Health), &forms, Some(output))
}

#[instrument(name = "panels::about", skip_all)]
pub async fn about_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(
        &state,
        Some(Panel::About),
        &Forms::default(),
        Some(responders::about()),
    )
}

pub async fn plan_api(Json(request): Json<PlanRequest>) -> Json<PanelResponse> {
    tracing::debug!(?request, "Plan requested");
    PanelResponse::new(Panel::Plan, responders::plan(&request))
}

pub async fn schedule_api(Json(request): Json<ScheduleRequest>) -> Json<PanelResponse> {
    tracing::debug!(?request, "Schedule requested");
    PanelResponse::new(Panel::Schedule, responders::schedule(&request))
}

pub async fn weather_api(Json(request): Json<WeatherRequest>) -> Json<PanelResponse> {
    tracing::debug!(?request, "Weather advice requested");
    PanelResponse::new(Panel::Weather, responders::weather(&request))
}

pub async fn health_api(Json(request): Json<HealthRequest>) -> Json<PanelResponse> {
    tracing::debug!(?request, "Health analysis requested");
    PanelResponse::new(Panel::Health, responders::health(&request))
}

pub async fn about_api() -> Json<PanelResponse> {
    PanelResponse::new(Panel::About, responders::about())
}

/// Fallback for paths the panel UI does not serve
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
