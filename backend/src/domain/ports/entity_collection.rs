//! Read-side port over a filterable collection of listed entities.
//!
//! The paginated query executor drives this port with a predicate and a page
//! request. Adapters own storage details; the domain only relies on the
//! counting and ordering contract documented on [`EntityCollection`].

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Error, ListedEntity, Predicate};

use super::define_port_error;

define_port_error! {
    /// Errors raised by directory read ports.
    pub enum DirectoryError {
        /// The backing store could not be reached.
        Unavailable { message: String } =>
            "directory store unavailable: {message}",
        /// A query failed while reading rows.
        Query { message: String } =>
            "directory query failed: {message}",
    }
}

impl From<DirectoryError> for Error {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Unavailable { .. } => Self::service_unavailable(err.to_string()),
            DirectoryError::Query { .. } => Self::internal(err.to_string()),
        }
    }
}

/// Port for counting, paging and looking up entities of one kind.
///
/// Implementations must apply the same predicate to `count` and `page`, and
/// must return page rows in [`ListedEntity::listing_order`]. A page beyond
/// the last one yields an empty vector, not an error. Writes landing between
/// `count` and `page` are tolerated by the executor.
#[async_trait]
pub trait EntityCollection<E: ListedEntity>: Send + Sync {
    /// Number of entities matching `predicate`.
    async fn count(&self, predicate: &Predicate<E>) -> Result<u64, DirectoryError>;

    /// The slice of matching entities selected by `request`.
    async fn page(
        &self,
        predicate: &Predicate<E>,
        request: PageRequest,
    ) -> Result<Vec<E>, DirectoryError>;

    /// Look up a single entity by identifier.
    async fn find(&self, id: E::Id) -> Result<Option<E>, DirectoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(DirectoryError::unavailable("pool closed"), ErrorCode::ServiceUnavailable)]
    #[case(DirectoryError::query("bad row"), ErrorCode::InternalError)]
    fn maps_directory_errors_to_domain_codes(
        #[case] err: DirectoryError,
        #[case] expected: ErrorCode,
    ) {
        let message = err.to_string();
        let mapped = Error::from(err);
        assert_eq!(mapped.code(), expected);
        assert_eq!(mapped.message(), message);
    }
}
