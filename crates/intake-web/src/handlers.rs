//! Request handlers for the intake page

use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use intake_core::IntakeError;
use serde_json::json;
use uuid::Uuid;

use crate::error::HttpError;
use crate::render::IndexTemplate;
use crate::staging::stage_multipart;
use crate::state::AppState;

/// Render the page. Pending alerts are shown once and then dropped.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let session = state.session.lock().await;
    let alerts = state.alerts.take();
    let controller = &session.controller;

    let page = IndexTemplate::new(
        controller.records(),
        controller.selection(),
        controller.previews(),
        &alerts,
        &state.upload_field,
    )
    .render()
    .map_err(|e| IntakeError::Internal(format!("Failed to render page: {}", e)))?;

    Ok(Html(page))
}

/// File-picker change: stage the posted files and rebuild previews.
pub async fn select(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, HttpError> {
    let staged = stage_multipart(multipart, &state.upload_field).await?;
    let mut session = state.session.lock().await;

    let Some(staged) = staged else {
        session.controller.handle_selection(None).await?;
        return Ok(Redirect::to("/"));
    };

    let count = session.apply_selection(staged).await?;
    tracing::debug!(previews = count, "Previews rebuilt");
    Ok(Redirect::to("/"))
}

/// Upload button: send the held selection to the service.
pub async fn submit(State(state): State<AppState>) -> Result<Redirect, HttpError> {
    let session = state.session.lock().await;
    session.controller.submit_selection().await?;
    Ok(Redirect::to("/"))
}

/// Serve the bytes behind a live preview URL.
pub async fn preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let source = Uuid::parse_str(&id)
        .ok()
        .and_then(|id| state.registry.resolve(id))
        .ok_or_else(|| HttpError::not_found("Preview not found"))?;

    let data = tokio::fs::read(&source.path)
        .await
        .map_err(IntakeError::from)?;

    let content_type = if source.mime_type.is_empty() {
        "application/octet-stream".to_string()
    } else {
        source.mime_type
    };

    Ok(([(header::CONTENT_TYPE, content_type)], data))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "alive" }))
}
