//! Shared query parameter types for API handlers.
//!
//! Values are kept as raw strings so that unparsable input falls back to
//! defaults in `lean_core` instead of being rejected by the extractor.

use serde::Deserialize;

/// Page-based pagination parameters (`?page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Keyword search parameters (`?q=`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Record identifier passed as a query string (`?id=`).
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}
