//! Outbound adapters implementing domain ports.
//!
//! - **memory**: read-only, snapshot-backed collections and the example seed
//!   data.
//!
//! Adapters translate between storage and domain types. They contain no
//! business logic.

pub mod memory;
