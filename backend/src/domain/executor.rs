//! Paginated query executor.
//!
//! Counts every match first, then fetches the requested window, and checks
//! the two agree before handing the page on. A store that changes between
//! the two reads is read once more; if it still disagrees the rows win and
//! the total is adjusted to them. The global count is what the navigation
//! resolver keys on, never the page-local length.

use std::num::NonZeroU32;

use pagination::{Page, PageNumber, PageRequest, PageSize};
use tracing::{debug, warn};

use crate::domain::ListedEntity;
use crate::domain::Predicate;
use crate::domain::ports::{DirectoryError, EntityCollection};

/// Rows per listing page.
pub const PAGE_SIZE: PageSize = PageSize::from_non_zero(match NonZeroU32::new(5) {
    Some(size) => size,
    None => NonZeroU32::MIN,
});

/// Page request for a raw `page` parameter; malformed or zero input selects
/// the first page.
///
/// # Examples
/// ```
/// use clinic_directory::domain::listing_request;
///
/// assert_eq!(listing_request(Some("3")).number().get(), 3);
/// assert_eq!(listing_request(Some("-1")).number().get(), 1);
/// assert_eq!(listing_request(None).size().get(), 5);
/// ```
pub fn listing_request(raw_page: Option<&str>) -> PageRequest {
    PageRequest::new(PageNumber::parse_lenient(raw_page), PAGE_SIZE)
}

/// Run `predicate` against `collection` and cut out the requested page.
///
/// # Errors
/// Propagates port failures. A page that disagrees with its count is never
/// an error.
pub async fn execute<E, C>(
    collection: &C,
    predicate: &Predicate<E>,
    request: PageRequest,
) -> Result<Page<E>, DirectoryError>
where
    E: ListedEntity,
    C: EntityCollection<E> + ?Sized,
{
    let (items, total) = read_window(collection, predicate, request).await?;
    let err = match Page::new(items, total, request) {
        Ok(page) => return Ok(page),
        Err(err) => err,
    };
    debug!(error = %err, "count and page disagree; reading again");
    let (items, total) = read_window(collection, predicate, request).await?;
    Ok(Page::new(items, total, request).unwrap_or_else(|err| {
        warn!(error = %err, "count and page still disagree; adjusting total to the rows read");
        let counted = err.total();
        Page::reconcile(err.into_items(), counted, request)
    }))
}

async fn read_window<E, C>(
    collection: &C,
    predicate: &Predicate<E>,
    request: PageRequest,
) -> Result<(Vec<E>, u64), DirectoryError>
where
    E: ListedEntity,
    C: EntityCollection<E> + ?Sized,
{
    let total = collection.count(predicate).await?;
    let items = if request.expected_len(total) == 0 {
        Vec::new()
    } else {
        collection.page(predicate, request).await?
    };
    debug!(
        criteria = predicate.len(),
        page = request.number().get(),
        total,
        returned = items.len(),
        "executed listing query"
    );
    Ok((items, total))
}
