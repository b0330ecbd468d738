//! Owner directory endpoints.
//!
//! ```text
//! GET /owners?lastName=Davis&page=2
//! GET /owners/6
//! ```

use actix_web::{HttpResponse, get, http::header, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, ListingOutcome, NavigationDecision, OWNERS_PATH, Owner, OwnerId, OwnerSearchParams};
use crate::inbound::http::{ApiResult, FirstValueQuery};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::OwnerListingView;

/// Query string of `GET /owners`.
///
/// Every field is kept as raw text so malformed values reach the validator
/// and come back as form messages instead of extractor errors.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OwnerListQuery {
    /// Case-insensitive substring of the last name.
    pub last_name: Option<String>,
    /// Exact telephone number, digits only.
    pub telephone: Option<String>,
    /// Case-insensitive substring of the city.
    pub city: Option<String>,
    /// One-based page number; invalid values mean page 1.
    pub page: Option<String>,
}

impl From<OwnerListQuery> for OwnerSearchParams {
    fn from(query: OwnerListQuery) -> Self {
        Self {
            last_name: query.last_name,
            telephone: query.telephone,
            city: query.city,
            page: query.page,
        }
    }
}

/// `302 Found` pointing at a detail view.
pub(crate) fn see_detail(listing_path: &str, id: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, format!("{listing_path}/{id}")))
        .finish()
}

/// Search owners.
///
/// Redirects to the owner when exactly one matches; otherwise returns a page
/// of five owners with filter-preserving pager links. A non-numeric
/// telephone is reported inline and nothing is queried.
#[utoipa::path(
    get,
    path = "/owners",
    params(OwnerListQuery),
    responses(
        (status = 200, description = "Owner listing", body = OwnerListingView),
        (status = 302, description = "Single match", headers(("Location" = String, description = "Owner detail path"))),
        (status = 400, description = "Query string is not form encoded", body = Error),
        (status = 503, description = "Directory unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["owners"],
    operation_id = "listOwners"
)]
#[get("/owners")]
pub async fn list_owners(
    state: web::Data<HttpState>,
    query: FirstValueQuery<OwnerListQuery>,
) -> ApiResult<HttpResponse> {
    let params = OwnerSearchParams::from(query.into_inner());
    let response = match state.owners.list_owners(&params).await? {
        ListingOutcome::Rejected(error) => {
            HttpResponse::Ok().json(OwnerListingView::rejected(&params, &error))
        }
        ListingOutcome::Resolved(NavigationDecision::Redirect { entity_id }) => {
            see_detail(OWNERS_PATH, entity_id)
        }
        ListingOutcome::Resolved(NavigationDecision::ShowListing(listing)) => {
            HttpResponse::Ok().json(OwnerListingView::listing(&params, listing))
        }
    };
    Ok(response)
}

/// Fetch one owner.
#[utoipa::path(
    get,
    path = "/owners/{id}",
    params(("id" = u32, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Owner", body = Owner),
        (status = 400, description = "Identifier is not a number", body = Error),
        (status = 404, description = "Unknown owner", body = Error),
        (status = 503, description = "Directory unavailable", body = Error)
    ),
    tags = ["owners"],
    operation_id = "getOwner"
)]
#[get("/owners/{id}")]
pub async fn get_owner(state: web::Data<HttpState>, id: web::Path<u32>) -> ApiResult<web::Json<Owner>> {
    let id = OwnerId::new(id.into_inner());
    state
        .owners
        .owner(id)
        .await?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(format!("owner {id} not found")))
}
