//! JSON view models for the directory listings.
//!
//! A listing view carries the page of results, the filters echoed back for
//! redisplay, field-scoped messages and the pager links. Rejected criteria
//! produce the same shape with no results and no links.

use pagination::{LinkTemplate, PageLink, PageLinks, PageNumber};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::criteria::normalise;
use crate::domain::{
    CriteriaValidationError, ListedEntity, ListingCriteria, ListingPage, Owner, OwnerCriteria,
    OwnerSearchParams, PAGE_SIZE, SpecialtyOption, Vet, VetCriteria, VetSearchParams,
    listing_request,
};

/// Message shown against the primary filter when nothing matched.
pub const NOT_FOUND_MESSAGE: &str = "has not been found";
/// Code of the not-found field message.
pub const NOT_FOUND_CODE: &str = "notFound";

/// A message scoped to one search form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorView {
    /// Query parameter the message belongs to.
    #[schema(example = "telephone")]
    pub field: String,
    /// Machine-readable rule identifier.
    #[schema(example = "numeric")]
    pub code: String,
    /// Human-readable reason, without the field name.
    #[schema(example = "must contain only numeric characters")]
    pub message: String,
}

impl From<&CriteriaValidationError> for FieldErrorView {
    fn from(error: &CriteriaValidationError) -> Self {
        Self {
            field: error.field().to_owned(),
            code: error.code().to_owned(),
            message: error.reason().to_owned(),
        }
    }
}

/// One numbered pager link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageLinkView {
    /// Page the link points at.
    #[schema(example = 2)]
    pub number: u32,
    /// Target URL including the active filters.
    #[schema(example = "/owners?lastName=Davis&page=2")]
    pub href: String,
    /// Whether this is the page on display.
    pub current: bool,
}

/// Pager links; every href keeps the active filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageLinksView {
    /// First page.
    pub first: String,
    /// Previous page, clamped to the last page; `null` on the first page.
    pub previous: Option<String>,
    /// Next page; `null` on or past the last page.
    pub next: Option<String>,
    /// Last page.
    pub last: String,
    /// One link per page.
    pub pages: Vec<PageLinkView>,
}

impl From<PageLinks> for PageLinksView {
    fn from(links: PageLinks) -> Self {
        Self {
            first: links.first,
            previous: links.previous,
            next: links.next,
            last: links.last,
            pages: links.pages.into_iter().map(PageLinkView::from).collect(),
        }
    }
}

impl From<PageLink> for PageLinkView {
    fn from(link: PageLink) -> Self {
        Self {
            number: link.number,
            href: link.href,
            current: link.current,
        }
    }
}

/// Paging state and form feedback shared by both listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingStateView {
    /// Page shown, one-based.
    #[schema(example = 1)]
    pub current_page: u32,
    /// Number of pages for the filters; zero when nothing matched.
    #[schema(example = 2)]
    pub total_pages: u64,
    /// Number of matches across all pages.
    #[schema(example = 8)]
    pub total_items: u64,
    /// Fixed page size.
    #[schema(example = 5)]
    pub page_size: u32,
    /// Whether the filters matched nothing.
    pub not_found: bool,
    /// Field-scoped messages for the search form.
    pub field_errors: Vec<FieldErrorView>,
    /// Pager links; absent when the criteria were rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinksView>,
    /// Listing link with every filter cleared.
    #[schema(example = "/owners?page=1")]
    pub clear_filters_href: String,
}

impl ListingStateView {
    fn rejected(path: &str, raw_page: Option<&str>, error: &CriteriaValidationError) -> Self {
        Self {
            current_page: listing_request(raw_page).number().get(),
            total_pages: 0,
            total_items: 0,
            page_size: PAGE_SIZE.get(),
            not_found: false,
            field_errors: vec![FieldErrorView::from(error)],
            links: None,
            clear_filters_href: clear_filters_href(path),
        }
    }
}

fn clear_filters_href(path: &str) -> String {
    LinkTemplate::new(path).href(PageNumber::FIRST)
}

/// Split a resolved listing into its items and the shared state.
fn resolved_state<E, K>(listing: ListingPage<E>) -> (Vec<E>, ListingStateView)
where
    E: ListedEntity,
    K: ListingCriteria<E>,
{
    let not_found = listing.not_found();
    let (page, links) = listing.into_parts();
    let field_errors = if not_found {
        vec![FieldErrorView {
            field: K::PRIMARY_FIELD.to_owned(),
            code: NOT_FOUND_CODE.to_owned(),
            message: NOT_FOUND_MESSAGE.to_owned(),
        }]
    } else {
        Vec::new()
    };
    let state = ListingStateView {
        current_page: page.number().get(),
        total_pages: page.total_pages(),
        total_items: page.total_items(),
        page_size: page.size().get(),
        not_found,
        field_errors,
        links: Some(PageLinksView::from(links)),
        clear_filters_href: clear_filters_href(K::LISTING_PATH),
    };
    (page.into_items(), state)
}

fn echo(raw: Option<&String>) -> Option<String> {
    normalise(raw.map(String::as_str)).map(str::to_owned)
}

/// Owner filters as entered, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerFiltersView {
    /// Last-name filter.
    #[schema(example = "Davis")]
    pub last_name: Option<String>,
    /// Telephone filter, echoed even when rejected.
    pub telephone: Option<String>,
    /// City filter.
    pub city: Option<String>,
}

impl From<&OwnerSearchParams> for OwnerFiltersView {
    fn from(params: &OwnerSearchParams) -> Self {
        Self {
            last_name: echo(params.last_name.as_ref()),
            telephone: echo(params.telephone.as_ref()),
            city: echo(params.city.as_ref()),
        }
    }
}

/// Owner listing view.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerListingView {
    /// Filters for redisplay.
    pub filters: OwnerFiltersView,
    /// Owners on this page.
    pub owners: Vec<Owner>,
    /// Paging state and form messages.
    #[serde(flatten)]
    pub state: ListingStateView,
}

impl OwnerListingView {
    /// View for criteria that failed validation.
    pub fn rejected(params: &OwnerSearchParams, error: &CriteriaValidationError) -> Self {
        Self {
            filters: OwnerFiltersView::from(params),
            owners: Vec::new(),
            state: ListingStateView::rejected(
                OwnerCriteria::LISTING_PATH,
                params.page.as_deref(),
                error,
            ),
        }
    }

    /// View for a listing page.
    pub fn listing(params: &OwnerSearchParams, listing: ListingPage<Owner>) -> Self {
        let (owners, state) = resolved_state::<Owner, OwnerCriteria>(listing);
        Self {
            filters: OwnerFiltersView::from(params),
            owners,
            state,
        }
    }
}

/// Vet filters as entered, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VetFiltersView {
    /// Last-name filter.
    pub last_name: Option<String>,
    /// Specialty filter as entered.
    #[schema(example = "radiology")]
    pub specialty: Option<String>,
}

impl From<&VetSearchParams> for VetFiltersView {
    fn from(params: &VetSearchParams) -> Self {
        Self {
            last_name: echo(params.last_name.as_ref()),
            specialty: echo(params.specialty.as_ref()),
        }
    }
}

/// Entry of the specialty drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyOptionView {
    /// Text shown in the drop-down.
    #[schema(example = "radiology")]
    pub label: String,
    /// Parameter value; `null` for the unfiltered entry.
    pub value: Option<String>,
    /// Listing link with this option selected.
    #[schema(example = "/vets?specialty=radiology&page=1")]
    pub href: String,
    /// Whether this option is the active filter.
    pub selected: bool,
}

impl From<SpecialtyOption> for SpecialtyOptionView {
    fn from(option: SpecialtyOption) -> Self {
        Self {
            label: option.label,
            value: option.value,
            href: option.href,
            selected: option.selected,
        }
    }
}

/// Vet listing view.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VetListingView {
    /// Filters for redisplay.
    pub filters: VetFiltersView,
    /// Specialty drop-down entries.
    pub specialties: Vec<SpecialtyOptionView>,
    /// Vets on this page.
    pub vets: Vec<Vet>,
    /// Paging state and form messages.
    #[serde(flatten)]
    pub state: ListingStateView,
}

impl VetListingView {
    /// View for a listing page.
    pub fn listing(
        params: &VetSearchParams,
        options: Vec<SpecialtyOption>,
        listing: ListingPage<Vet>,
    ) -> Self {
        let (vets, state) = resolved_state::<Vet, VetCriteria>(listing);
        Self {
            filters: VetFiltersView::from(params),
            specialties: options.into_iter().map(SpecialtyOptionView::from).collect(),
            vets,
            state,
        }
    }
}
