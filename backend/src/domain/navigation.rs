//! Navigation resolver: redirect on a singleton match, otherwise list.

use pagination::{LinkTemplate, Page, PageLinks};

use crate::domain::ListedEntity;

/// A listing page plus everything needed to render its pager.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage<E> {
    page: Page<E>,
    links: PageLinks,
}

impl<E> ListingPage<E> {
    /// Page of results.
    pub fn page(&self) -> &Page<E> {
        &self.page
    }

    /// First/previous/next/last and numbered links.
    pub fn links(&self) -> &PageLinks {
        &self.links
    }

    /// Whether nothing matched the filters at all.
    pub fn not_found(&self) -> bool {
        self.page.total_items() == 0
    }

    /// Split into the page and its links.
    pub fn into_parts(self) -> (Page<E>, PageLinks) {
        (self.page, self.links)
    }
}

/// Response shape for one listing request.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationDecision<E: ListedEntity> {
    /// Exactly one entity matched; go straight to its detail view.
    Redirect {
        /// The single match.
        entity_id: E::Id,
    },
    /// Zero or several matches; show the page.
    ShowListing(ListingPage<E>),
}

impl<E: ListedEntity> NavigationDecision<E> {
    /// Redirect target, when this is a redirect.
    pub fn redirect_target(&self) -> Option<E::Id> {
        match self {
            Self::Redirect { entity_id } => Some(*entity_id),
            Self::ShowListing(_) => None,
        }
    }
}

/// Decide between a redirect and a listing.
///
/// A total of one redirects whichever page was asked for, provided the page
/// carries the match; the listing engine re-reads the first page when the
/// requested one is past the end. Every pager link is built from `filters`,
/// so paging never drops an active filter.
///
/// # Examples
/// ```
/// use clinic_directory::domain::{NavigationDecision, Owner, OwnerId, resolve_navigation};
/// use pagination::{LinkTemplate, Page};
///
/// let owner = Owner {
///     id: OwnerId::new(6),
///     first_name: "Jean".into(),
///     last_name: "Coleman".into(),
///     address: "105 N. Lake St.".into(),
///     city: "Monona".into(),
///     telephone: "6085552654".into(),
/// };
/// let request = clinic_directory::domain::listing_request(None);
/// let page = Page::new(vec![owner], 1, request).expect("consistent page");
/// let decision = resolve_navigation(page, LinkTemplate::new("/owners"));
/// assert_eq!(decision.redirect_target(), Some(OwnerId::new(6)));
/// ```
pub fn resolve_navigation<E: ListedEntity>(page: Page<E>, filters: LinkTemplate) -> NavigationDecision<E> {
    if let [only] = page.items() {
        if page.total_items() == 1 {
            return NavigationDecision::Redirect { entity_id: only.id() };
        }
    }
    let links = PageLinks::new(&filters, page.number(), page.total_pages());
    NavigationDecision::ShowListing(ListingPage { page, links })
}
