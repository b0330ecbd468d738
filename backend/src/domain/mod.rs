//! Domain model and use cases for the clinic directory read path.
//!
//! Purpose: turn raw listing parameters into validated criteria, a filter
//! predicate, a page of results and a navigation decision. Types here are
//! transport agnostic; adapters live under `inbound` and `outbound`.
//!
//! Public surface:
//! - Owner, Vet, SpecialtyName: listed entities.
//! - OwnerCriteria, VetCriteria: validated filters.
//! - Predicate, SpecialtyFilter: filter predicate builder and classifier.
//! - execute, resolve_navigation: paged query and redirect decision.
//! - OwnerDirectoryService, VetDirectoryService: driving port
//!   implementations.
//! - Error, ErrorCode: transport-agnostic failure payload.

pub mod criteria;
pub mod directory_service;
pub mod entity;
pub mod error;
pub mod executor;
pub mod listing;
pub mod navigation;
pub mod owner;
pub mod ports;
pub mod predicate;
pub mod specialty_filter;
pub mod trace_id;
pub mod vet;

pub use self::criteria::{
    CriteriaValidationError, ListingCriteria, OWNERS_PATH, OwnerCriteria, OwnerSearchParams,
    Telephone, VETS_PATH, VetCriteria, VetSearchParams, params,
};
pub use self::directory_service::{OwnerDirectoryService, VetDirectoryService, resolve_listing};
pub use self::entity::ListedEntity;
pub use self::error::{Error, ErrorCode};
pub use self::executor::{PAGE_SIZE, execute, listing_request};
pub use self::listing::{ListingOutcome, SpecialtyOption, VetListing};
pub use self::navigation::{ListingPage, NavigationDecision, resolve_navigation};
pub use self::owner::{Owner, OwnerId};
pub use self::predicate::{Criterion, Predicate, TextCriterion, TextMatch};
pub use self::specialty_filter::{NO_SPECIALTY_SENTINEL, SpecialtyFilter};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::vet::{SpecialtyName, SpecialtyNameError, Vet, VetId};
