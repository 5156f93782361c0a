//! Rules for how task requests affect stored tasks.

/// Entity name used in not-found errors.
pub const TASK_ENTITY: &str = "Task";

/// Body returned by a successful delete.
pub const DELETE_CONFIRMATION: &str = "Deleted successfully!";

/// What an update request does to a task's `completed` flag.
///
/// Updates never touch `title` or `description`, and never clear the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionUpdate {
    MarkCompleted,
    Unchanged,
}

impl CompletionUpdate {
    /// Decide the effect of an update request.
    ///
    /// `requested` is `None` when the request carried no payload at all,
    /// otherwise it holds the payload's `completed` field.
    ///
    /// | payload               | effect          |
    /// |-----------------------|-----------------|
    /// | none                  | `MarkCompleted` |
    /// | `completed: true`     | `MarkCompleted` |
    /// | `completed: false`    | `Unchanged`     |
    /// | `completed` missing   | `Unchanged`     |
    pub fn from_request(requested: Option<Option<bool>>) -> Self {
        match requested {
            None | Some(Some(true)) => Self::MarkCompleted,
            Some(Some(false)) | Some(None) => Self::Unchanged,
        }
    }

    pub fn marks_completed(self) -> bool {
        matches!(self, Self::MarkCompleted)
    }
}
