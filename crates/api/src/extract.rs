//! Custom Axum extractors that reject with the standard envelope.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use lean_core::ids::parse_id;
use lean_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::query::IdParams;

/// A record id taken from the `{id}` path segment, or from `?id=` on routes
/// without one.
///
/// Anything that is not a positive integer is a 400 `"Invalid ID format"`.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub DbId);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(_) => Query::<IdParams>::try_from_uri(&parts.uri)
                .ok()
                .and_then(|Query(params)| params.id)
                .unwrap_or_default(),
        };

        Ok(Self(parse_id(&raw)?))
    }
}

/// JSON request body; decode failures become a 400 envelope instead of
/// axum's plain-text rejection.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
            })?;
        Ok(Self(value))
    }
}
