use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::storage::RepoError;
use crate::AppState;
use shared::ProjectDocument;

fn status_for(err: RepoError) -> StatusCode {
    match err {
        RepoError::NotFound(_) => StatusCode::NOT_FOUND,
        RepoError::Invalid(_) => StatusCode::BAD_REQUEST,
        RepoError::Io(e) => {
            tracing::error!("Storage error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Health check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// List projects, most recently updated first
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<ProjectDocument>> {
    Json(state.projects.list().await)
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectDocument>, StatusCode> {
    state.projects.get(&id).await.map(Json).map_err(status_for)
}

/// Create project; the service assigns id and updated_date
pub async fn create_project(
    State(state): State<AppState>,
    Json(doc): Json<ProjectDocument>,
) -> Result<(StatusCode, Json<ProjectDocument>), StatusCode> {
    let created = state.projects.create(doc).await.map_err(status_for)?;
    tracing::info!(
        "Created project {} ({} parts)",
        created.id.as_deref().unwrap_or_default(),
        created.parts.len()
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(doc): Json<ProjectDocument>,
) -> Result<Json<ProjectDocument>, StatusCode> {
    state
        .projects
        .update(&id, doc)
        .await
        .map(Json)
        .map_err(status_for)
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    match state.projects.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => status_for(e),
    }
}
