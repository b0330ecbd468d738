//! Directory services implementing the owner and vet driving ports.
//!
//! Both listings share one resolution pipeline: validate, build the
//! predicate, execute the paged query, then resolve navigation. Validation
//! failures end the pipeline before any port is queried.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::PageRequest;
use tracing::debug;

use crate::domain::ports::{
    DirectoryError, EntityCollection, OwnerDirectoryQuery, SpecialtyCatalogue, VetDirectoryQuery,
};
use crate::domain::{
    Error, ListedEntity, ListingCriteria, ListingOutcome, NavigationDecision, Owner,
    OwnerCriteria, OwnerId, OwnerSearchParams, Vet, VetCriteria, VetId, VetListing,
    VetSearchParams, execute, listing_request, resolve_navigation,
};

/// Run the paged query for `criteria` and decide the response shape.
///
/// A single match that falls outside the requested page is re-read from the
/// first page, so the redirect does not depend on the page asked for.
///
/// # Errors
/// Propagates [`DirectoryError`] from the collection.
pub async fn resolve_listing<E, C, K>(
    collection: &C,
    criteria: &K,
    request: PageRequest,
) -> Result<NavigationDecision<E>, DirectoryError>
where
    E: ListedEntity,
    C: EntityCollection<E> + ?Sized,
    K: ListingCriteria<E>,
{
    let predicate = criteria.predicate();
    let mut page = execute(collection, &predicate, request).await?;
    if page.total_items() == 1 && page.is_empty() {
        debug!(
            page = request.number().get(),
            "single match outside requested page; reading first page"
        );
        page = execute(collection, &predicate, request.first()).await?;
    }
    let decision = resolve_navigation(page, criteria.link_template());
    match decision.redirect_target() {
        Some(id) => debug!(listing = K::LISTING_PATH, %id, "redirecting to single match"),
        None => debug!(listing = K::LISTING_PATH, "showing listing page"),
    }
    Ok(decision)
}

/// Owner directory service.
#[derive(Clone)]
pub struct OwnerDirectoryService<C> {
    owners: Arc<C>,
}

impl<C> OwnerDirectoryService<C> {
    /// Create a service over the given owner collection.
    pub fn new(owners: Arc<C>) -> Self {
        Self { owners }
    }
}

#[async_trait]
impl<C> OwnerDirectoryQuery for OwnerDirectoryService<C>
where
    C: EntityCollection<Owner>,
{
    async fn list_owners(&self, params: &OwnerSearchParams) -> Result<ListingOutcome<Owner>, Error> {
        let criteria = match OwnerCriteria::from_params(params) {
            Ok(criteria) => criteria,
            Err(err) => {
                debug!(field = err.field(), code = err.code(), "owner criteria rejected");
                return Ok(ListingOutcome::Rejected(err));
            }
        };
        let request = listing_request(params.page.as_deref());
        let decision = resolve_listing(self.owners.as_ref(), &criteria, request).await?;
        Ok(ListingOutcome::Resolved(decision))
    }

    async fn owner(&self, id: OwnerId) -> Result<Option<Owner>, Error> {
        Ok(self.owners.find(id).await?)
    }
}

/// Veterinarian directory service.
#[derive(Clone)]
pub struct VetDirectoryService<C, S> {
    vets: Arc<C>,
    specialties: Arc<S>,
}

impl<C, S> VetDirectoryService<C, S> {
    /// Create a service over the vet collection and specialty catalogue.
    pub fn new(vets: Arc<C>, specialties: Arc<S>) -> Self {
        Self { vets, specialties }
    }
}

#[async_trait]
impl<C, S> VetDirectoryQuery for VetDirectoryService<C, S>
where
    C: EntityCollection<Vet>,
    S: SpecialtyCatalogue,
{
    async fn list_vets(&self, params: &VetSearchParams) -> Result<VetListing, Error> {
        let specialties = self.specialties.specialty_names().await?;
        let criteria = VetCriteria::from_params(params, &specialties);
        debug!(specialty = %criteria.specialty(), "classified specialty filter");
        let request = listing_request(params.page.as_deref());
        let decision = resolve_listing(self.vets.as_ref(), &criteria, request).await?;
        Ok(VetListing {
            criteria,
            specialties,
            decision,
        })
    }

    async fn vet(&self, id: VetId) -> Result<Option<Vet>, Error> {
        Ok(self.vets.find(id).await?)
    }
}
