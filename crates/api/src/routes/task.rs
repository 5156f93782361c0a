//! Route definitions for the task resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Task routes, mounted at the root.
///
/// ```text
/// POST   /tasks/        -> create
/// GET    /task/{id}/    -> get_by_id
/// PUT    /task/{id}/    -> update
/// DELETE /task/{id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/tasks/", post(task::create)).route(
        "/task/{id}/",
        get(task::get_by_id)
            .put(task::update)
            .delete(task::delete),
    )
}
