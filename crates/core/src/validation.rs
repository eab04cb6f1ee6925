//! Field-level validation helpers shared by the article and todo rules.

use crate::error::CoreError;

/// Reject a value that is empty or whitespace-only.
///
/// `field` is the user-facing field name, e.g. `"Title"`, and ends up in
/// the message verbatim (`"Title is required"`).
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject a value longer than `max` characters.
pub fn require_max_chars(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
