//! Parsing of record identifiers taken from paths and query strings.

use crate::error::CoreError;
use crate::types::DbId;

/// Message returned for any identifier that is not a positive integer.
pub const INVALID_ID_MESSAGE: &str = "Invalid ID format";

/// Parse a raw identifier (`"42"`) into a [`DbId`].
///
/// Rowids start at 1, so zero and negative values are rejected along with
/// anything that is not an integer.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.trim().parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(INVALID_ID_MESSAGE.into())),
    }
}
