//! Pagination links that carry the active filter parameters.
//!
//! Every link produced here re-embeds the filter parameters of the
//! [`LinkTemplate`] verbatim, so moving between pages never drops an active
//! filter. A filter that has been cleared is simply absent from the template
//! and therefore absent from every link.

use serde::Serialize;
use url::form_urlencoded;

use crate::PageNumber;

const PAGE_PARAM: &str = "page";

/// Path plus the active filter parameters of a listing.
///
/// # Examples
/// ```
/// use pagination::{LinkTemplate, PageNumber};
///
/// let template = LinkTemplate::new("/vets")
///     .with_param("specialty", "radiology")
///     .with_param("lastName", "");
/// assert_eq!(template.href(PageNumber::new(2)), "/vets?specialty=radiology&page=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkTemplate {
    path: String,
    params: Vec<(String, String)>,
}

impl LinkTemplate {
    /// Start a template for `path` with no filter parameters.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Add a filter parameter. Empty values are skipped so an inactive filter
    /// never shows up as `name=`.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.params.push((name.into(), value));
        }
        self
    }

    /// Add a filter parameter when `value` is present.
    #[must_use]
    pub fn with_optional_param(self, name: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with_param(name, value),
            None => self,
        }
    }

    /// Link to `page` carrying every active filter parameter.
    #[must_use]
    pub fn href(&self, page: PageNumber) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.params {
            query.append_pair(name, value);
        }
        query.append_pair(PAGE_PARAM, &page.to_string());
        format!("{}?{}", self.path, query.finish())
    }
}

/// A numbered link in the pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    /// Page the link points at.
    pub number: u32,
    /// Target URL including filter parameters.
    pub href: String,
    /// Whether this is the page being displayed.
    pub current: bool,
}

/// First, previous, next, last and numbered links for one listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLinks {
    /// Link to the first page.
    pub first: String,
    /// Link to the previous page, never past the last one; absent on the
    /// first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    /// Link to the next page; absent on or past the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Link to the last page (the first page when nothing matched).
    pub last: String,
    /// One link per page, in order.
    pub pages: Vec<PageLink>,
}

impl PageLinks {
    /// Build the pager for `current` out of `total_pages`.
    ///
    /// # Examples
    /// ```
    /// use pagination::{LinkTemplate, PageLinks, PageNumber};
    ///
    /// let template = LinkTemplate::new("/owners").with_param("lastName", "Davis");
    /// let links = PageLinks::new(&template, PageNumber::FIRST, 2);
    /// assert_eq!(links.next.as_deref(), Some("/owners?lastName=Davis&page=2"));
    /// assert!(links.previous.is_none());
    /// ```
    #[must_use]
    pub fn new(template: &LinkTemplate, current: PageNumber, total_pages: u64) -> Self {
        let last = PageNumber::new(u32::try_from(total_pages).unwrap_or(u32::MAX));
        let previous = current.previous().map(|page| template.href(page.min(last)));
        let next = (current < last).then(|| template.href(current.next()));
        let pages = (1..=last.get())
            .map(PageNumber::new)
            .map(|page| PageLink {
                number: page.get(),
                href: template.href(page),
                current: page == current,
            })
            .collect();
        Self {
            first: template.href(PageNumber::FIRST),
            previous,
            next,
            last: template.href(last),
            pages,
        }
    }
}
