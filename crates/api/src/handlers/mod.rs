//! Request handlers.
//!
//! Each handler opens one transaction from the pool, runs a single
//! repository call inside it, and commits. Returning early drops the
//! transaction, which rolls it back and releases the connection.

pub mod task;
