//! Driving port for the veterinarian directory.

use async_trait::async_trait;

use crate::domain::{Error, Vet, VetId, VetListing, VetSearchParams};

/// Domain use-case port for browsing vets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VetDirectoryQuery: Send + Sync {
    /// Classify `params`, run the filtered query and decide the response.
    async fn list_vets(&self, params: &VetSearchParams) -> Result<VetListing, Error>;

    /// Fetch one vet for the detail view.
    async fn vet(&self, id: VetId) -> Result<Option<Vet>, Error>;
}
