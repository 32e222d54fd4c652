//! Optional page selection for listing.

use super::Post;

/// Largest skip or take a store is asked for. SQL backends bind these as
/// signed 64-bit integers.
pub const MAX_WINDOW: u64 = i64::MAX as u64;

/// Parse a query value as a positive whole number.
///
/// Integers parse directly; integral decimal or exponent forms such as
/// `"2.0"` or `"1e1"` are accepted too. Values past `MAX_WINDOW` clamp.
fn parse_count(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u64>() {
        return Some(n.min(MAX_WINDOW));
    }

    let f = raw.parse::<f64>().ok()?;
    if !f.is_finite() || f.fract() != 0.0 || f < 0.0 {
        return None;
    }
    // Float to int casts saturate.
    Some((f as u64).min(MAX_WINDOW))
}

/// A requested page. Both values are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: u64,
    /// Page number (1-indexed).
    pub page: u64,
}

impl Pagination {
    pub fn new(page_size: u64, page: u64) -> Option<Self> {
        (page_size > 0 && page > 0).then_some(Self { page_size, page })
    }

    /// Interpret raw query values.
    ///
    /// Returns `None` (list everything) when either value is missing,
    /// not a whole number, or zero.
    pub fn from_query(page_size: Option<&str>, page: Option<&str>) -> Option<Self> {
        let page_size = parse_count(page_size?)?;
        let page = parse_count(page?)?;
        Self::new(page_size, page)
    }

    /// Number of records to skip, at most `MAX_WINDOW`.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .min(MAX_WINDOW)
    }

    /// Maximum number of records to return, at most `MAX_WINDOW`.
    pub fn limit(&self) -> u64 {
        self.page_size.min(MAX_WINDOW)
    }
}

/// One page of posts plus the size of the whole collection.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: u64,
}
