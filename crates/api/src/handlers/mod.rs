//! Request handlers.
//!
//! Each submodule provides the async handler functions for one entity.
//! Handlers validate input via `lean_core`, delegate to the corresponding
//! repository in `lean_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod articles;
pub mod todos;
