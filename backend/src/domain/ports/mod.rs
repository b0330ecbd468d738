//! Domain ports for the directory read path.

mod macros;
pub(crate) use macros::define_port_error;

mod entity_collection;
mod owner_directory_query;
mod specialty_catalogue;
mod vet_directory_query;

pub use entity_collection::{DirectoryError, EntityCollection};
#[cfg(test)]
pub use owner_directory_query::MockOwnerDirectoryQuery;
pub use owner_directory_query::OwnerDirectoryQuery;
#[cfg(test)]
pub use specialty_catalogue::MockSpecialtyCatalogue;
pub use specialty_catalogue::SpecialtyCatalogue;
#[cfg(test)]
pub use vet_directory_query::MockVetDirectoryQuery;
pub use vet_directory_query::VetDirectoryQuery;
