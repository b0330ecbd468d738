//! Page request arithmetic.

use serde::Serialize;

use crate::{PageNumber, PageSize};

/// A request for one page of a filtered, ordered collection.
///
/// Pages past the end of the collection are valid requests; they resolve to
/// an empty window rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    number: PageNumber,
    size: PageSize,
}

impl PageRequest {
    /// Build a request for `number` with `size` items per page.
    #[must_use]
    pub const fn new(number: PageNumber, size: PageSize) -> Self {
        Self { number, size }
    }

    /// Requested page number.
    #[must_use]
    pub const fn number(self) -> PageNumber {
        self.number
    }

    /// Page size.
    #[must_use]
    pub const fn size(self) -> PageSize {
        self.size
    }

    /// The same request pointed at the first page.
    #[must_use]
    pub const fn first(self) -> Self {
        Self {
            number: PageNumber::FIRST,
            size: self.size,
        }
    }

    /// Zero-based index of the first item on the page.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.number.get() - 1).saturating_mul(u64::from(self.size.get()))
    }

    /// Number of items the page must hold when `total` items match.
    ///
    /// `min(size, max(0, total - size * (number - 1)))`
    #[must_use]
    pub fn expected_len(self, total: u64) -> u64 {
        total
            .saturating_sub(self.offset())
            .min(u64::from(self.size.get()))
    }

    /// Number of pages needed to show `total` items.
    #[must_use]
    pub fn total_pages(self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.size.get()))
    }
}
