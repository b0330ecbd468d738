//! Behaviour tests for the owner and vet listing use cases.
//!
//! Scenarios run the directory services over the seeded in-memory
//! collections and check paging, redirects, validation and the specialty
//! filter.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use clinic_directory::domain::ports::{
    DirectoryError, EntityCollection, OwnerDirectoryQuery, VetDirectoryQuery,
};
use clinic_directory::domain::{
    ListedEntity, ListingOutcome, ListingPage, NavigationDecision, Owner, OwnerDirectoryService,
    OwnerId, OwnerSearchParams, Predicate, Vet, VetDirectoryService, VetId, VetListing,
    VetSearchParams,
};
use clinic_directory::outbound::memory::{InMemoryCollection, InMemoryDirectory};
use pagination::PageRequest;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;

/// Owner collection that counts every call reaching it.
#[derive(Clone)]
struct CountingOwners {
    inner: InMemoryCollection<Owner>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl EntityCollection<Owner> for CountingOwners {
    async fn count(&self, predicate: &Predicate<Owner>) -> Result<u64, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.count(predicate).await
    }

    async fn page(
        &self,
        predicate: &Predicate<Owner>,
        request: PageRequest,
    ) -> Result<Vec<Owner>, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.page(predicate, request).await
    }

    async fn find(&self, id: OwnerId) -> Result<Option<Owner>, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find(id).await
    }
}

#[derive(Default, ScenarioState)]
struct DirectoryWorld {
    directory: Slot<InMemoryDirectory>,
    owner_calls: Slot<Arc<AtomicUsize>>,
    owner_outcome: Slot<ListingOutcome<Owner>>,
    vet_listing: Slot<VetListing>,
}

impl DirectoryWorld {
    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        Runtime::new().expect("create runtime").block_on(future)
    }

    fn directory(&self) -> InMemoryDirectory {
        self.directory.get().expect("directory should be seeded")
    }

    fn search_owners(&self, params: OwnerSearchParams) {
        let calls = Arc::new(AtomicUsize::new(0));
        let owners = CountingOwners {
            inner: self.directory().owners,
            calls: Arc::clone(&calls),
        };
        let service = OwnerDirectoryService::new(Arc::new(owners));
        let outcome =
            Self::block_on(async { service.list_owners(&params).await }).expect("owner listing");
        self.owner_calls.set(calls);
        self.owner_outcome.set(outcome);
    }

    fn owner_decision(&self) -> NavigationDecision<Owner> {
        match self.owner_outcome.get().expect("owners should be searched") {
            ListingOutcome::Resolved(decision) => decision,
            ListingOutcome::Rejected(error) => panic!("criteria rejected: {error}"),
        }
    }

    fn owner_page(&self) -> ListingPage<Owner> {
        match self.owner_decision() {
            NavigationDecision::ShowListing(listing) => listing,
            NavigationDecision::Redirect { entity_id } => panic!("redirected to owner {entity_id}"),
        }
    }

    fn vet_page(&self) -> ListingPage<Vet> {
        match self.vet_listing.get().expect("vets should be searched").decision {
            NavigationDecision::ShowListing(listing) => listing,
            NavigationDecision::Redirect { entity_id } => panic!("redirected to vet {entity_id}"),
        }
    }
}

#[fixture]
fn world() -> DirectoryWorld {
    DirectoryWorld::default()
}

#[given("the seeded directory")]
fn the_seeded_directory(world: &DirectoryWorld) {
    world
        .directory
        .set(InMemoryDirectory::seeded().expect("seed data is valid"));
}

#[when("owners are searched with last name {last_name} on page {page}")]
fn owners_are_searched_by_last_name(world: &DirectoryWorld, last_name: String, page: String) {
    world.search_owners(OwnerSearchParams {
        last_name: Some(last_name),
        page: Some(page),
        ..OwnerSearchParams::default()
    });
}

#[when("owners are searched with telephone {telephone}")]
fn owners_are_searched_by_telephone(world: &DirectoryWorld, telephone: String) {
    world.search_owners(OwnerSearchParams {
        telephone: Some(telephone),
        ..OwnerSearchParams::default()
    });
}

#[when("vets are searched with specialty {specialty}")]
fn vets_are_searched_by_specialty(world: &DirectoryWorld, specialty: String) {
    let InMemoryDirectory {
        vets, specialties, ..
    } = world.directory();
    let service = VetDirectoryService::new(Arc::new(vets), Arc::new(specialties));
    let params = VetSearchParams {
        specialty: Some(specialty),
        ..VetSearchParams::default()
    };
    let listing =
        DirectoryWorld::block_on(async { service.list_vets(&params).await }).expect("vet listing");
    world.vet_listing.set(listing);
}

#[then("{shown} owners are listed out of {total}")]
fn owners_are_listed_out_of(world: &DirectoryWorld, shown: usize, total: u64) {
    let listing = world.owner_page();
    assert_eq!(listing.page().items().len(), shown);
    assert_eq!(listing.page().total_items(), total);
}

#[then("there are {pages} pages")]
fn there_are_pages(world: &DirectoryWorld, pages: u64) {
    assert_eq!(world.owner_page().page().total_pages(), pages);
}

#[then("every pager link keeps {param}")]
fn every_pager_link_keeps(world: &DirectoryWorld, param: String) {
    let listing = world.owner_page();
    let links = listing.links();
    let fixed = [Some(&links.first), links.previous.as_ref(), links.next.as_ref(), Some(&links.last)];
    for href in fixed
        .into_iter()
        .flatten()
        .chain(links.pages.iter().map(|link| &link.href))
    {
        assert!(href.contains(&param), "{href} dropped {param}");
    }
}

#[then("the listing redirects to owner {id}")]
fn the_listing_redirects_to_owner(world: &DirectoryWorld, id: u32) {
    assert_eq!(world.owner_decision().redirect_target(), Some(OwnerId::new(id)));
}

#[then("the telephone field is rejected")]
fn the_telephone_field_is_rejected(world: &DirectoryWorld) {
    match world.owner_outcome.get().expect("owners should be searched") {
        ListingOutcome::Rejected(error) => assert_eq!(error.field(), "telephone"),
        ListingOutcome::Resolved(_) => panic!("telephone should be rejected"),
    }
}

#[then("the owner collection was not queried")]
fn the_owner_collection_was_not_queried(world: &DirectoryWorld) {
    let calls = world.owner_calls.get().expect("call counter");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[then("the owner listing reports not found")]
fn the_owner_listing_reports_not_found(world: &DirectoryWorld) {
    let listing = world.owner_page();
    assert!(listing.not_found());
    assert!(listing.page().is_empty());
}

#[then("the listed vets are {names}")]
fn the_listed_vets_are(world: &DirectoryWorld, names: String) {
    let listed: Vec<String> = world
        .vet_page()
        .page()
        .items()
        .iter()
        .map(|vet| vet.last_name().to_owned())
        .collect();
    let expected: Vec<&str> = names.split(", ").collect();
    assert_eq!(listed, expected);
}

#[then("the vet listing reports not found")]
fn the_vet_listing_reports_not_found(world: &DirectoryWorld) {
    assert!(world.vet_page().not_found());
}

#[then("the listing redirects to vet {id}")]
fn the_listing_redirects_to_vet(world: &DirectoryWorld, id: u32) {
    let listing = world.vet_listing.get().expect("vets should be searched");
    assert_eq!(listing.decision.redirect_target(), Some(VetId::new(id)));
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "Owners sharing a last name span two pages"
)]
fn owners_sharing_a_last_name_span_two_pages(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "The second page holds the remaining owners"
)]
fn the_second_page_holds_the_remaining_owners(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "A page past the end is empty"
)]
fn a_page_past_the_end_is_empty(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "A single matching owner redirects to its detail view"
)]
fn a_single_matching_owner_redirects(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "A single match redirects whichever page was requested"
)]
fn a_single_match_redirects_whichever_page(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "A non-numeric telephone is rejected before any query"
)]
fn a_non_numeric_telephone_is_rejected(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "No owner matches the last name"
)]
fn no_owner_matches_the_last_name(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "Vets filtered by a named specialty"
)]
fn vets_filtered_by_a_named_specialty(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "Specialty names ignore case"
)]
fn specialty_names_ignore_case(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "The none sentinel lists vets without specialties"
)]
fn the_none_sentinel_lists_vets_without_specialties(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "An unknown specialty matches nothing"
)]
fn an_unknown_specialty_matches_nothing(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_listing.feature",
    name = "A single vet with the specialty redirects"
)]
fn a_single_vet_with_the_specialty_redirects(world: DirectoryWorld) {
    let _ = world;
}
