//! Test helpers for inbound HTTP components.

use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryDirectory;

/// Handler state over the seeded in-memory directory.
pub fn seeded_state() -> HttpState {
    HttpState::from_directory(InMemoryDirectory::seeded().expect("seed data is valid"))
}
