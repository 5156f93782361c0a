//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasktrack_core::types::DbId;

/// A row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// DTO for creating a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    /// Accepted for compatibility; new tasks always start incomplete.
    #[serde(default)]
    pub completed: Option<bool>,
}

/// DTO for updating a task. All fields are optional.
///
/// Only `completed` has any effect; `title` and `description` are parsed
/// but never written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}
