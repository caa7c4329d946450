use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::models::DashboardData;
use crate::render::render_dashboard_html;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

const MISSING_USERNAME: &str = "GITHUB_USERNAME environment variable not set";

/// Liveness check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Shared state for the dashboard handlers
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub username: Option<String>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/dashboard", get(dashboard_json))
        .route("/healthz", get(liveness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the dashboard HTTP server
pub async fn start_server(state: AppState, port: u16) -> Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Dashboard server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn dashboard_page(State(state): State<AppState>) -> Response {
    match load(&state).await {
        Ok(data) => Html(render_dashboard_html(&data)).into_response(),
        Err(response) => response,
    }
}

async fn dashboard_json(State(state): State<AppState>) -> Response {
    match load(&state).await {
        Ok(data) => Json(data).into_response(),
        Err(response) => response,
    }
}

async fn liveness_check() -> impl IntoResponse {
    Json(LivenessResponse {
        status: "ok".to_string(),
    })
}

async fn load(state: &AppState) -> std::result::Result<DashboardData, Response> {
    let Some(username) = state.username.as_deref() else {
        return Err((StatusCode::BAD_REQUEST, MISSING_USERNAME).into_response());
    };

    state.dashboard.get_dashboard_data(username).await.map_err(|e| {
        error!(username, "Failed to load dashboard: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error fetching data: {}", e),
        )
            .into_response()
    })
}
