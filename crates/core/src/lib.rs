//! Domain primitives shared by the blog and todo services.
//!
//! This crate has no I/O and no internal dependencies so that both the
//! repository layer (`lean-db`) and the HTTP layer (`lean-api`) can use it.

pub mod article;
pub mod error;
pub mod ids;
pub mod pagination;
pub mod search;
pub mod todo;
pub mod types;
pub mod validation;
