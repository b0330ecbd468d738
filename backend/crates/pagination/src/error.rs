//! Error types for the pagination crate.

use thiserror::Error;

/// Errors raised when pagination values violate their invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A page size of zero was requested.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// The items handed to [`crate::Page::new`] do not agree with the total.
///
/// The rejected items are kept so the caller can retry or reconcile without
/// reading them again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("page {page} expected {expected} items for {total} total but received {}", .items.len())]
pub struct InconsistentPage<T> {
    pub(crate) items: Vec<T>,
    pub(crate) page: u32,
    pub(crate) total: u64,
    pub(crate) expected: u64,
}

impl<T> InconsistentPage<T> {
    /// Total the items were checked against.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Give back the rejected items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
