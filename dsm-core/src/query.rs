use serde::Serialize;
use std::str::FromStr;

/// Default page size for list endpoints.
pub const DEFAULT_PAGE_LIMIT: usize = 20;

/// Parse an optional query-parameter string, falling back to a default.
///
/// Bad parameters are never an error anywhere in the API; they degrade to
/// the default value.
pub fn parse_param<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// Normalized pagination input. `page` is 1-indexed.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page: usize,
    pub limit: usize,
}

impl PageParams {
    /// Build from raw query-parameter strings.
    ///
    /// Unparseable values fall back to the defaults, `page < 1` is treated
    /// as page 1, and `limit < 1` falls back to the endpoint default.
    pub fn from_query(page: Option<&str>, limit: Option<&str>, default_limit: usize) -> Self {
        let page = parse_param(page, 1usize).max(1);
        let limit = match parse_param(limit, default_limit) {
            0 => default_limit,
            n => n,
        };
        Self { page, limit }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Pagination metadata returned alongside every list response.
///
/// `total` counts items after filtering, before slicing. `totalPages` is
/// literal `ceil(total / limit)`, so an empty result set reports 0 pages.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// One page of filtered results.
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,
    pub pagination: Pagination,
}

/// Filter a collection down to matching items and slice out the requested
/// page. An out-of-range page yields an empty item list, not an error.
pub fn paginate<'a, T, F>(items: &'a [T], matches: F, params: PageParams) -> Page<'a, T>
where
    F: Fn(&T) -> bool,
{
    let filtered: Vec<&T> = items.iter().filter(|item| matches(*item)).collect();
    let total = filtered.len();
    let total_pages = (total + params.limit - 1) / params.limit;
    let start = (params.page - 1) * params.limit;

    let items = filtered
        .into_iter()
        .skip(start)
        .take(params.limit)
        .collect();

    Page {
        items,
        pagination: Pagination {
            page: params.page,
            limit: params.limit,
            total,
            total_pages,
        },
    }
}
