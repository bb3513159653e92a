use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 50;
/// Highest page whose offset still binds as a Postgres BIGINT.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_LIMIT;

/// Requested page window. Always `1 <= page <= MAX_PAGE` and `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPage {
    page: u64,
    limit: u64,
}

impl SearchPage {
    /// Out-of-range values are clamped rather than rejected.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.map_or(DEFAULT_PAGE, |p| p.clamp(1, MAX_PAGE as i64) as u64);
        let limit = limit.map_or(DEFAULT_LIMIT, |l| l.clamp(1, MAX_LIMIT as i64) as u64);
        Self { page, limit }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Never exceeds `i64::MAX`.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

impl Default for SearchPage {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub limit: u64,
}

impl PaginationMeta {
    pub fn new(page: SearchPage, total_count: u64) -> Self {
        let total_pages = total_count.div_ceil(page.limit());
        Self {
            current_page: page.page(),
            total_pages,
            total_count,
            has_next_page: page.page() < total_pages,
            has_prev_page: page.page() > 1,
            limit: page.limit(),
        }
    }
}
