//! HTTP layer for the blog and todo services.
//!
//! Exposes the building blocks (config, state, error handling, extractors,
//! routes, router) so integration tests and the two binaries can all use
//! the same application.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
