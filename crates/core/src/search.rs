//! Keyword handling for substring search.

use crate::error::CoreError;

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Validate a raw `?q=` value and return the trimmed keyword.
pub fn normalize_keyword(raw: Option<&str>) -> Result<String, CoreError> {
    let keyword = raw.map(str::trim).unwrap_or_default();
    if keyword.is_empty() {
        return Err(CoreError::Validation("Search keyword is required".into()));
    }
    Ok(keyword.to_string())
}

/// Build a `%keyword%` pattern for `LIKE ... ESCAPE '\'`.
///
/// `%` and `_` in the keyword match literally.
pub fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
