//! In-memory entity collection backed by an immutable snapshot.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::ports::{DirectoryError, EntityCollection};
use crate::domain::{ListedEntity, Predicate};

/// Read-only collection over a pre-sorted snapshot.
///
/// Rows are sorted once at construction, so every query walks them in
/// listing order. Clones share the snapshot; readers never take a lock.
#[derive(Debug)]
pub struct InMemoryCollection<E> {
    rows: Arc<[E]>,
}

impl<E> Clone for InMemoryCollection<E> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<E: ListedEntity> InMemoryCollection<E> {
    /// Snapshot `rows` in listing order. Of rows sharing an identifier only
    /// the first in listing order is kept.
    pub fn new(rows: impl IntoIterator<Item = E>) -> Self {
        let mut rows: Vec<E> = rows.into_iter().collect();
        rows.sort_by(|a, b| a.listing_order(b));
        let mut seen = std::collections::BTreeSet::new();
        rows.retain(|row| seen.insert(row.id()));
        Self { rows: rows.into() }
    }

    /// A collection with no rows.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of rows in the snapshot.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the snapshot has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn matching<'a>(&'a self, predicate: &'a Predicate<E>) -> impl Iterator<Item = &'a E> + 'a {
        self.rows.iter().filter(move |row| predicate.matches(row))
    }
}

#[async_trait]
impl<E: ListedEntity> EntityCollection<E> for InMemoryCollection<E> {
    async fn count(&self, predicate: &Predicate<E>) -> Result<u64, DirectoryError> {
        let count = if predicate.is_empty() {
            self.rows.len()
        } else {
            self.matching(predicate).count()
        };
        u64::try_from(count).map_err(|err| DirectoryError::query(err.to_string()))
    }

    async fn page(
        &self,
        predicate: &Predicate<E>,
        request: PageRequest,
    ) -> Result<Vec<E>, DirectoryError> {
        let Ok(offset) = usize::try_from(request.offset()) else {
            return Ok(Vec::new());
        };
        let size = usize::try_from(request.size().get()).unwrap_or(usize::MAX);
        Ok(self.matching(predicate).skip(offset).take(size).cloned().collect())
    }

    async fn find(&self, id: E::Id) -> Result<Option<E>, DirectoryError> {
        Ok(self.rows.iter().find(|row| row.id() == id).cloned())
    }
}
