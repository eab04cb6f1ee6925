//! Shared response envelope types for API handlers.
//!
//! Every `/api` response uses a `{ "code", "message", "data" }` envelope.
//! `code` is `0` on success. On failure it carries the error category as a
//! status number (400, 404, 405, 500) and `data` is `null`; the HTTP status
//! itself stays 200 either way.

use lean_core::types::DbId;
use serde::Serialize;

pub const SUCCESS_CODE: i32 = 0;
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success";

/// Standard `{ code, message, data }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::success(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Successful response with the default `"Success"` message.
    pub fn success(data: T) -> Self {
        Self::with_message(data, DEFAULT_SUCCESS_MESSAGE)
    }

    /// Successful response with a custom message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Failure response; `data` serializes as `null`.
    pub fn failure(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// Payload for single-record deletes: `{ "id": N }`.
#[derive(Debug, Serialize)]
pub struct DeletedId {
    pub id: DbId,
}

/// Payload for bulk deletes: `{ "deleted": N }`.
#[derive(Debug, Serialize)]
pub struct DeletedCount {
    pub deleted: u64,
}
