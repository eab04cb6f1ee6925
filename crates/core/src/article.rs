//! Blog article rules.

use crate::error::CoreError;
use crate::validation::{require_max_chars, require_non_empty};

pub const ENTITY: &str = "Article";

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_AUTHOR_CHARS: usize = 100;
pub const MAX_CATEGORY_CHARS: usize = 50;

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    require_non_empty("Title", title)?;
    require_max_chars("Title", title, MAX_TITLE_CHARS)
}

pub fn validate_content(content: &str) -> Result<(), CoreError> {
    require_non_empty("Content", content)
}

pub fn validate_author(author: &str) -> Result<(), CoreError> {
    require_non_empty("Author", author)?;
    require_max_chars("Author", author, MAX_AUTHOR_CHARS)
}

/// Categories are optional; an empty string means "uncategorised".
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    require_max_chars("Category", category, MAX_CATEGORY_CHARS)
}
