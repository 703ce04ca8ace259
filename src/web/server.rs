//! axum HTTP server

use super::form::FormFields;
use super::handler::{self, PageResponse};
use super::page::PageRenderer;
use crate::config::ServerConfig;
use crate::error::ProjectionError;
use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;

type SharedRenderer = Arc<PageRenderer>;

impl IntoResponse for ProjectionError {
    fn into_response(self) -> Response {
        log::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Html(self.body)).into_response()
    }
}

/// Routes for the form page and the JSON projection endpoint
pub fn router(renderer: SharedRenderer) -> Router {
    Router::new()
        .route("/", get(index_get).post(index_post))
        .route("/api/projection", get(projection_api))
        .fallback(not_found)
        .with_state(renderer)
}

/// Bind to the configured address and serve until the process stops
pub async fn run_server(config: &ServerConfig) -> anyhow::Result<()> {
    let renderer = Arc::new(PageRenderer::new()?);
    let app = router(renderer);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    if config.debug {
        log::debug!("Debug logging enabled");
    }

    axum::serve(listener, app).await?;
    Ok(())
}

async fn index_get(State(renderer): State<SharedRenderer>) -> Result<PageResponse, ProjectionError> {
    log::debug!("GET /");
    handler::landing_page(&renderer)
}

async fn index_post(
    State(renderer): State<SharedRenderer>,
    Form(fields): Form<FormFields>,
) -> Result<PageResponse, ProjectionError> {
    log::debug!("POST / {:?}", fields);
    handler::submit_form(&renderer, &fields)
}

async fn projection_api(Query(fields): Query<FormFields>) -> Result<Response, ProjectionError> {
    log::debug!("GET /api/projection {:?}", fields);
    let (status, body) = handler::projection_json(&fields)?;
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Ok((status, Json(body)).into_response())
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
