//! Domain types shared by the task store and the HTTP service.

pub mod error;
pub mod task;
pub mod types;
