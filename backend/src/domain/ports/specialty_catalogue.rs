//! Port listing the specialty names known to the clinic.
//!
//! The vet listing classifies its `specialty` parameter against this list
//! and renders it as the set of selectable filter options.

use async_trait::async_trait;

use crate::domain::SpecialtyName;

use super::DirectoryError;

/// Port for reading the specialty catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpecialtyCatalogue: Send + Sync {
    /// Every known specialty name, sorted and free of duplicates.
    async fn specialty_names(&self) -> Result<Vec<SpecialtyName>, DirectoryError>;
}
