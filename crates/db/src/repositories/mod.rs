//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! `&mut PgConnection`, so callers decide the transaction boundary.

pub mod task_repo;

pub use task_repo::TaskRepo;
