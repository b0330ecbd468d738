//! A bounded page of results plus total-count metadata.

use serde::Serialize;

use crate::{InconsistentPage, PageNumber, PageRequest, PageSize};

/// One page of an ordered, filtered collection.
///
/// ## Invariants
/// - `items.len() == request.expected_len(total_items)`; [`Page::new`]
///   refuses any other combination and [`Page::reconcile`] adjusts the total
///   until it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    total_items: u64,
    current_page: PageNumber,
    page_size: PageSize,
    total_pages: u64,
}

impl<T> Page<T> {
    /// Assemble a page from its items and the global match count.
    ///
    /// # Errors
    /// Returns [`InconsistentPage`], holding the items, when the item count
    /// disagrees with `total_items` for this request.
    pub fn new(
        items: Vec<T>,
        total_items: u64,
        request: PageRequest,
    ) -> Result<Self, InconsistentPage<T>> {
        let expected = request.expected_len(total_items);
        if u64::try_from(items.len()).unwrap_or(u64::MAX) != expected {
            return Err(InconsistentPage {
                items,
                page: request.number().get(),
                total: total_items,
                expected,
            });
        }
        Ok(Self {
            items,
            total_items,
            current_page: request.number(),
            page_size: request.size(),
            total_pages: request.total_pages(total_items),
        })
    }

    /// Assemble a page from rows that were read separately from the count,
    /// letting the rows win when the two disagree.
    ///
    /// A short page means the collection ends inside this window, so the
    /// total becomes the offset plus the rows read; an empty window only
    /// caps the total at the offset. A full page keeps the count unless that
    /// count cannot reach the end of this window. Surplus rows beyond the
    /// page size are dropped. Consistent input comes back unchanged.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Page, PageNumber, PageRequest, PageSize};
    ///
    /// let size = PageSize::new(5).expect("size");
    /// let request = PageRequest::new(PageNumber::new(2), size);
    /// let page = Page::reconcile(vec![6, 7], 8, request);
    /// assert_eq!(page.total_items(), 7);
    /// assert_eq!(page.total_pages(), 2);
    /// ```
    #[must_use]
    pub fn reconcile(mut items: Vec<T>, total_items: u64, request: PageRequest) -> Self {
        let size = request.size().get();
        items.truncate(usize::try_from(size).unwrap_or(usize::MAX));
        let read = u64::try_from(items.len()).unwrap_or(u64::MAX);
        let window_end = request.offset().saturating_add(read);
        let total_items = if read == 0 {
            total_items.min(request.offset())
        } else if read < u64::from(size) {
            window_end
        } else {
            total_items.max(window_end)
        };
        Self {
            items,
            total_items,
            current_page: request.number(),
            page_size: request.size(),
            total_pages: request.total_pages(total_items),
        }
    }

    /// Items on this page, in collection order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of items matching the filter across every page.
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// The page this result was produced for.
    #[must_use]
    pub const fn number(&self) -> PageNumber {
        self.current_page
    }

    /// Page size used to slice the collection.
    #[must_use]
    pub const fn size(&self) -> PageSize {
        self.page_size
    }

    /// Number of pages needed for [`Page::total_items`].
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Whether the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
