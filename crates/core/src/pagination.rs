//! Page/limit normalisation for paginated listings.
//!
//! Out-of-range or unparsable values fall back to defaults instead of
//! producing an error, so `?page=abc&limit=999` is still a valid request.

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 50;

/// A normalised 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: i64,
    pub limit: i64,
}

impl Page {
    /// Build a page from raw query values.
    ///
    /// - `page` below 1 or unparsable becomes [`DEFAULT_PAGE`].
    /// - `limit` below 1, above [`MAX_PAGE_SIZE`], or unparsable becomes
    ///   [`DEFAULT_PAGE_SIZE`] (it is reset, not clamped).
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE);

        let limit = limit
            .and_then(|l| l.trim().parse::<i64>().ok())
            .filter(|l| (1..=MAX_PAGE_SIZE).contains(l))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self { page, limit }
    }

    /// Row offset for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}
