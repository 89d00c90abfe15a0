//! Domain models.
//!
//! - Entities are what the database stores (`QuoteRequest`).
//! - Request/response DTOs are what the API exchanges; their wire names stay
//!   camelCase because the marketing-site form already speaks that shape.

mod quote;
mod dto;

pub use quote::*;
pub use dto::*;

use serde::{Deserialize, Serialize};

// =====================================
// Id newtype
// =====================================
/// Opaque row identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id(String);

impl Id {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(nanoid::nanoid!(21))
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

// =====================================
// Pagination
// =====================================
/// Page selection for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page, capped at 100.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

impl Pagination {
    /// SQL offset for this page.
    ///
    /// Saturates instead of overflowing; an absurd page number from the
    /// query string yields an empty page, not a panic.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.limit())
    }

    /// Effective page size.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.per_page.clamp(1, 100)
    }
}

/// A page of results plus paging metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationInfo {
    #[must_use]
    pub fn new(pagination: &Pagination, total_items: u64) -> Self {
        let per_page = pagination.limit();
        let total_pages = ((total_items as f64) / (per_page as f64)).ceil() as u32;

        Self {
            current_page: pagination.page,
            per_page,
            total_items,
            total_pages,
            has_next: pagination.page < total_pages,
            has_prev: pagination.page > 1,
        }
    }
}

impl<T> PaginatedResult<T> {
    pub fn new(data: Vec<T>, pagination: &Pagination, total_items: u64) -> Self {
        Self {
            data,
            pagination: PaginationInfo::new(pagination, total_items),
        }
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_unique() {
        assert_ne!(Id::new(), Id::new());
    }

    #[test]
    fn test_pagination_offset() {
        let p = Pagination { page: 3, per_page: 20 };
        assert_eq!(p.offset(), 40);
        assert_eq!(p.limit(), 20);
    }

    #[test]
    fn test_pagination_caps_per_page() {
        let p = Pagination { page: 1, per_page: 500 };
        assert_eq!(p.limit(), 100);
    }

    #[test]
    fn test_pagination_offset_saturates_on_huge_page() {
        let p = Pagination { page: u32::MAX, per_page: 100 };
        assert_eq!(p.offset(), u32::MAX);

        let p = Pagination { page: u32::MAX, per_page: 1 };
        assert_eq!(p.offset(), u32::MAX - 1);
    }

    #[test]
    fn test_pagination_info() {
        let p = Pagination { page: 2, per_page: 10 };
        let info = PaginationInfo::new(&p, 25);

        assert_eq!(info.total_pages, 3);
        assert!(info.has_next);
        assert!(info.has_prev);
    }
}
