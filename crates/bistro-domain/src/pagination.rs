//! Page windows for newest-first list endpoints.

/// Hard cap on rows returned by a single list call.
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub per_page: u32,
    pub page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: MAX_PER_PAGE,
            page: 1,
        }
    }
}

impl PageRequest {
    /// Missing values fall back to the defaults; out-of-range values are pulled
    /// into `1..=100` for `per_page` and `>= 1` for `page`.
    pub fn new(per_page: Option<u32>, page: Option<u32>) -> Self {
        Self {
            per_page: per_page.unwrap_or(MAX_PER_PAGE).clamp(1, MAX_PER_PAGE),
            page: page.unwrap_or(1).max(1),
        }
    }

    pub fn limit(self) -> u64 {
        u64::from(self.per_page.clamp(1, MAX_PER_PAGE))
    }

    pub fn offset(self) -> u64 {
        u64::from(self.page.max(1) - 1) * self.limit()
    }
}
