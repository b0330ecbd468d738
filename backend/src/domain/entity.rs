//! Behaviour shared by every entity shown in a paginated directory.

use std::cmp::Ordering;
use std::fmt;

/// An entity that can be listed, paged and redirected to.
///
/// Listings are ordered by last name, then by identifier, so page boundaries
/// are reproducible across repeated requests with the same filters.
pub trait ListedEntity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Stable identifier used for detail-view redirects.
    type Id: Copy + Eq + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Stable identifier of the record.
    fn id(&self) -> Self::Id;

    /// Primary sort key.
    fn last_name(&self) -> &str;

    /// Deterministic listing order.
    fn listing_order(&self, other: &Self) -> Ordering {
        self.last_name()
            .cmp(other.last_name())
            .then_with(|| self.id().cmp(&other.id()))
    }
}
