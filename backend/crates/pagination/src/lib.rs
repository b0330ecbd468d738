//! Page-number pagination primitives for directory listings.
//!
//! The crate is transport agnostic. It models the request side
//! ([`PageNumber`], [`PageSize`], [`PageRequest`]), the result side
//! ([`Page`]) and the navigation side ([`LinkTemplate`], [`PageLinks`]) so
//! every listing endpoint paginates the same way.
//!
//! # Example
//!
//! ```
//! use pagination::{LinkTemplate, Page, PageLinks, PageNumber, PageRequest, PageSize};
//!
//! let size = PageSize::new(5).expect("non-zero size");
//! let request = PageRequest::new(PageNumber::parse_lenient(Some("2")), size);
//! let page = Page::new(vec!["f", "g", "h"], 8, request).expect("consistent page");
//! assert_eq!(page.total_pages(), 2);
//!
//! let template = LinkTemplate::new("/owners").with_param("lastName", "Davis");
//! let links = PageLinks::new(&template, page.number(), page.total_pages());
//! assert_eq!(links.first, "/owners?lastName=Davis&page=1");
//! ```

mod error;
mod links;
mod number;
mod page;
mod request;

pub use error::{InconsistentPage, PaginationError};
pub use links::{LinkTemplate, PageLink, PageLinks};
pub use number::{PageNumber, PageSize};
pub use page::Page;
pub use request::PageRequest;
