// rest/routes/tasks.rs — Task CRUD routes.
//
// Thin adapters over the store: each mutating handler performs exactly
// one store operation. Request bodies are explicit schemas — unknown or
// mistyped fields are rejected with 400 rather than silently coerced.

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::ApiError;
use crate::store::TaskRow;
use crate::AppContext;

pub async fn list_tasks(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<TaskRow>>, ApiError> {
    let tasks = ctx.store.list_all().await?;
    Ok(Json(tasks))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskRow>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    if body.title.trim().is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }

    let task = ctx
        .store
        .insert(&body.title, body.description.as_deref().unwrap_or(""))
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTaskRequest {
    pub completed: bool,
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<TaskRow>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    match ctx.store.update_completed(id, body.completed).await? {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::not_found(id)),
    }
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    match ctx.store.delete(id).await? {
        Some(task) => Ok(Json(json!({ "message": "task deleted", "task": task }))),
        None => Err(ApiError::not_found(id)),
    }
}
