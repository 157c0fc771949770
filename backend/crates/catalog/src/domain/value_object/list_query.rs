//! List Query
//!
//! Pagination and ordering for product listings. Query parameters are
//! parsed leniently: anything that is not a non-negative integer becomes 0,
//! and 0 on either `page` or `limit` means "no pagination".

/// Direction of the `created_at` ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `"desc"` (any case) is newest first; everything else is ascending
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number; 0 disables pagination
    pub page: u32,
    /// Page size; 0 disables pagination
    pub limit: u32,
    pub sort: SortOrder,
}

impl ListQuery {
    pub fn from_params(page: Option<&str>, limit: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            page: parse_count(page),
            limit: parse_count(limit),
            sort: SortOrder::from_param(sort),
        }
    }

    /// `(offset, limit)` when both page and limit are set
    pub fn window(&self) -> Option<(u64, u64)> {
        if self.page == 0 || self.limit == 0 {
            return None;
        }
        let limit = u64::from(self.limit);
        Some((u64::from(self.page - 1) * limit, limit))
    }
}

fn parse_count(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}
