//! Offset windows over an ordered sequence.

use serde::{Deserialize, Serialize};

use crate::constants::pagination::{DEFAULT_PER_PAGE, FIRST_PAGE, MAX_PER_PAGE, MIN_PER_PAGE};

/// Offset-based window: how many records to skip and how many to take.
///
/// Both deferred sources and materialized sequences compute their page
/// window through this type, so page `n` of size `p` always covers
/// `(n - 1) * p .. n * p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPagination {
    /// Maximum number of records to return.
    pub limit: u64,
    /// Number of records to skip.
    pub offset: u64,
}

impl OffsetPagination {
    /// Creates a new window, clamping the limit into the page size bounds.
    pub fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit: limit.clamp(MIN_PER_PAGE as u64, MAX_PER_PAGE as u64),
            offset,
        }
    }

    /// Creates a window from a 1-based page number and a page size.
    pub fn from_page(page: u64, page_size: u32) -> Self {
        let page = page.max(FIRST_PAGE);
        let limit = (page_size as u64).clamp(MIN_PER_PAGE as u64, MAX_PER_PAGE as u64);
        Self {
            limit,
            offset: (page - 1).saturating_mul(limit),
        }
    }

    /// Gets the current page number (1-based).
    pub fn page_number(&self) -> u64 {
        (self.offset / self.limit.max(1)) + 1
    }

    /// Gets the page size.
    pub fn page_size(&self) -> u64 {
        self.limit
    }

    /// Returns the index range this window covers within a sequence of `len` items.
    ///
    /// A window past the end yields an empty range.
    pub fn range_within(&self, len: usize) -> std::ops::Range<usize> {
        let start = usize::try_from(self.offset).unwrap_or(usize::MAX).min(len);
        let end = usize::try_from(self.limit)
            .map(|limit| start.saturating_add(limit))
            .unwrap_or(usize::MAX)
            .min(len);
        start..end
    }
}

impl Default for OffsetPagination {
    fn default() -> Self {
        Self::from_page(FIRST_PAGE, DEFAULT_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_bounds_checking() {
        let pagination = OffsetPagination::new(0, 10);
        assert_eq!(pagination.limit, 1);

        let pagination = OffsetPagination::new(1500, 10);
        assert_eq!(pagination.limit, MAX_PER_PAGE as u64);
    }

    #[test]
    fn pagination_from_page() {
        let pagination = OffsetPagination::from_page(1, 20);
        assert_eq!(pagination.limit, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = OffsetPagination::from_page(2, 20);
        assert_eq!(pagination.offset, 20);

        let pagination = OffsetPagination::from_page(3, 10);
        assert_eq!(pagination.offset, 20);

        let pagination = OffsetPagination::from_page(0, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = OffsetPagination::from_page(1, 0);
        assert_eq!(pagination.limit, 1);

        let pagination = OffsetPagination::from_page(u64::MAX, 100);
        assert_eq!(pagination.offset, u64::MAX);
    }

    #[test]
    fn pagination_page_number() {
        assert_eq!(OffsetPagination::new(20, 0).page_number(), 1);
        assert_eq!(OffsetPagination::new(20, 20).page_number(), 2);
        assert_eq!(OffsetPagination::new(10, 25).page_number(), 3);
        assert_eq!(OffsetPagination::from_page(7, 15).page_number(), 7);
    }

    #[test]
    fn default_is_first_page() {
        let pagination = OffsetPagination::default();
        assert_eq!(pagination.offset, 0);
        assert_eq!(pagination.page_size(), 15);
    }

    #[test]
    fn range_within_sequence() {
        assert_eq!(OffsetPagination::from_page(1, 15).range_within(75), 0..15);
        assert_eq!(OffsetPagination::from_page(5, 15).range_within(75), 60..75);
        assert_eq!(OffsetPagination::from_page(6, 15).range_within(75), 75..75);
        assert_eq!(OffsetPagination::from_page(3, 10).range_within(25), 20..25);
        assert_eq!(OffsetPagination::from_page(1, 10).range_within(0), 0..0);
        assert_eq!(OffsetPagination::from_page(u64::MAX, 100).range_within(3), 3..3);
    }
}
