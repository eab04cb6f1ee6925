//! Todo item rules.

use crate::error::CoreError;
use crate::validation::{require_max_chars, require_non_empty};

pub const ENTITY: &str = "Todo";

pub const MAX_TITLE_CHARS: usize = 200;

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    require_non_empty("Title", title)?;
    require_max_chars("Title", title, MAX_TITLE_CHARS)
}
