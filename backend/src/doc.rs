//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the directory listing and detail endpoints, the
//! health probes and the view schemas they return. The document backs the
//! Swagger UI in debug builds and the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Owner, Vet};
use crate::inbound::http::views::{
    FieldErrorView, ListingStateView, OwnerFiltersView, OwnerListingView, PageLinkView,
    PageLinksView, SpecialtyOptionView, VetFiltersView, VetListingView,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinic directory API",
        description = "Owner and veterinarian search with paging and single-match redirects.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::owners::list_owners,
        crate::inbound::http::owners::get_owner,
        crate::inbound::http::vets::list_vets,
        crate::inbound::http::vets::get_vet,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Owner,
        Vet,
        FieldErrorView,
        ListingStateView,
        OwnerFiltersView,
        OwnerListingView,
        PageLinkView,
        PageLinksView,
        SpecialtyOptionView,
        VetFiltersView,
        VetListingView,
    )),
    tags(
        (name = "owners", description = "Owner search and detail"),
        (name = "vets", description = "Veterinarian search and detail"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
