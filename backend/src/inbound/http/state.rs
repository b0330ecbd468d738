//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{OwnerDirectoryQuery, VetDirectoryQuery};
use crate::domain::{OwnerDirectoryService, VetDirectoryService};
use crate::outbound::memory::InMemoryDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub owners: Arc<dyn OwnerDirectoryQuery>,
    pub vets: Arc<dyn VetDirectoryQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(owners: Arc<dyn OwnerDirectoryQuery>, vets: Arc<dyn VetDirectoryQuery>) -> Self {
        Self { owners, vets }
    }

    /// Wire the directory services over in-memory adapters.
    ///
    /// # Examples
    /// ```
    /// use clinic_directory::inbound::http::state::HttpState;
    /// use clinic_directory::outbound::memory::InMemoryDirectory;
    ///
    /// let state = HttpState::from_directory(InMemoryDirectory::empty());
    /// # let _ = state;
    /// ```
    pub fn from_directory(directory: InMemoryDirectory) -> Self {
        let InMemoryDirectory {
            owners,
            vets,
            specialties,
        } = directory;
        Self::new(
            Arc::new(OwnerDirectoryService::new(Arc::new(owners))),
            Arc::new(VetDirectoryService::new(Arc::new(vets), Arc::new(specialties))),
        )
    }
}
