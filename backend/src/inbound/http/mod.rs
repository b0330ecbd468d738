//! HTTP inbound adapter exposing the directory listings.

pub mod error;
pub mod extract;
pub mod health;
pub mod owners;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod vets;
pub mod views;

pub use error::ApiResult;
pub use extract::{FirstValueQuery, path_config};
