//! Handlers for the task resource.

use axum::extract::{Path, State};
use axum::Json;
use tasktrack_core::error::CoreError;
use tasktrack_core::task::{CompletionUpdate, DELETE_CONFIRMATION, TASK_ENTITY};
use tasktrack_core::types::DbId;
use tasktrack_db::models::task::{CreateTask, Task, UpdateTask};
use tasktrack_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::OptionalJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: TASK_ENTITY,
        id,
    })
}

/// POST /tasks/
///
/// Always stores `completed = false`, whatever the request says.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<Json<Task>> {
    let mut tx = state.pool.begin().await?;
    let task = TaskRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(task_id = task.id, "Task created");
    Ok(Json(task))
}

/// GET /task/{id}/
///
/// A missing task is not an error: the body is `null`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Option<Task>>> {
    let mut tx = state.pool.begin().await?;
    let task = TaskRepo::find_by_id(&mut *tx, id).await?;
    tx.commit().await?;

    if task.is_none() {
        tracing::debug!(task_id = id, "Task lookup found nothing");
    }
    Ok(Json(task))
}

/// PUT /task/{id}/
///
/// Only ever sets `completed = true`; see [`CompletionUpdate`].
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    OptionalJson(input): OptionalJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    let change = CompletionUpdate::from_request(input.as_ref().map(|i| i.completed));

    let mut tx = state.pool.begin().await?;
    let task = match change {
        CompletionUpdate::MarkCompleted => {
            TaskRepo::mark_completed(&mut *tx, id).await?
        }
        CompletionUpdate::Unchanged => TaskRepo::find_by_id(&mut *tx, id).await?,
    }
    .ok_or_else(|| not_found(id))?;
    tx.commit().await?;

    tracing::info!(task_id = id, ?change, "Task updated");
    Ok(Json(task))
}

/// DELETE /task/{id}/
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<&'static str>> {
    let mut tx = state.pool.begin().await?;
    let deleted = TaskRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    tx.commit().await?;

    tracing::info!(task_id = id, "Task deleted");
    Ok(Json(DELETE_CONFIRMATION))
}
