//! Driving port for the owner directory.
//!
//! HTTP handlers call this port with raw query parameters and render the
//! outcome; validation, paging and the redirect decision stay in the domain.

use async_trait::async_trait;

use crate::domain::{Error, ListingOutcome, Owner, OwnerId, OwnerSearchParams};

/// Domain use-case port for browsing owners.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerDirectoryQuery: Send + Sync {
    /// Validate `params`, run the filtered query and decide the response.
    async fn list_owners(&self, params: &OwnerSearchParams) -> Result<ListingOutcome<Owner>, Error>;

    /// Fetch one owner for the detail view.
    async fn owner(&self, id: OwnerId) -> Result<Option<Owner>, Error>;
}
