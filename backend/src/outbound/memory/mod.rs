//! In-memory adapters for the directory read ports.
//!
//! The engine never mutates its collections, so each adapter holds an
//! immutable snapshot behind an `Arc` and serves concurrent reads without
//! locking.

mod catalogue;
mod collection;
pub mod seed;

pub use catalogue::InMemorySpecialtyCatalogue;
pub use collection::InMemoryCollection;

use crate::domain::{Owner, SpecialtyNameError, Vet};

/// Owners, vets and specialties backing one running directory.
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    /// Owner collection.
    pub owners: InMemoryCollection<Owner>,
    /// Vet collection.
    pub vets: InMemoryCollection<Vet>,
    /// Known specialty names.
    pub specialties: InMemorySpecialtyCatalogue,
}

impl InMemoryDirectory {
    /// Directory loaded with the example owners and vets.
    ///
    /// # Errors
    /// Fails only if the seed data holds a blank specialty name.
    pub fn seeded() -> Result<Self, SpecialtyNameError> {
        Ok(Self {
            owners: InMemoryCollection::new(seed::example_owners()),
            vets: InMemoryCollection::new(seed::example_vets()?),
            specialties: InMemorySpecialtyCatalogue::new(seed::example_specialties()?),
        })
    }

    /// Directory with no rows at all.
    pub fn empty() -> Self {
        Self {
            owners: InMemoryCollection::empty(),
            vets: InMemoryCollection::empty(),
            specialties: InMemorySpecialtyCatalogue::default(),
        }
    }
}
