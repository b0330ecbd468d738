//! Criteria validation for the directory listings.
//!
//! Raw query parameters arrive as optional strings. Each listing turns them
//! into an immutable criteria value that is either fully valid or not built
//! at all; the only field with a format rule is the owner telephone.
//! Inputs are trimmed and blank values mean "no filter".

mod owner;
mod vet;

use pagination::LinkTemplate;
use thiserror::Error;

use crate::domain::{ListedEntity, Predicate};

pub use owner::{OWNERS_PATH, OwnerCriteria, OwnerSearchParams, Telephone};
pub use vet::{VETS_PATH, VetCriteria, VetSearchParams};

/// Query parameter names shared by the listings and their links.
pub mod params {
    /// Last-name filter.
    pub const LAST_NAME: &str = "lastName";
    /// Owner telephone filter.
    pub const TELEPHONE: &str = "telephone";
    /// Owner city filter.
    pub const CITY: &str = "city";
    /// Vet specialty filter.
    pub const SPECIALTY: &str = "specialty";
    /// Requested page number.
    pub const PAGE: &str = "page";
}

/// A field failed its format rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaValidationError {
    /// The field accepts ASCII digits only.
    #[error("{field} must contain only numeric characters")]
    NonNumeric {
        /// Query parameter name.
        field: &'static str,
    },
}

impl CriteriaValidationError {
    /// Query parameter the error is scoped to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonNumeric { field, .. } => field,
        }
    }

    /// Machine-readable rule identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NonNumeric { .. } => "numeric",
        }
    }

    /// Human-readable reason without the field name.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NonNumeric { .. } => "must contain only numeric characters",
        }
    }
}

/// Validated filters for one listing of `E`.
pub trait ListingCriteria<E: ListedEntity>: Send + Sync {
    /// Path of the listing the criteria belong to.
    const LISTING_PATH: &'static str;

    /// Field that carries the "has not been found" message.
    const PRIMARY_FIELD: &'static str;

    /// Conjunction of every present filter.
    fn predicate(&self) -> Predicate<E>;

    /// Listing link with every active filter embedded and no page.
    fn link_template(&self) -> LinkTemplate;
}

/// Trim `raw`, treating blank input as absent.
pub fn normalise(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("   "), None)]
    #[case(Some(" Davis "), Some("Davis"))]
    fn normalise_trims_and_drops_blanks(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(normalise(raw), expected);
    }

    #[rstest]
    fn non_numeric_error_is_field_scoped() {
        let err = CriteriaValidationError::NonNumeric {
            field: params::TELEPHONE,
        };
        assert_eq!(err.field(), "telephone");
        assert_eq!(err.code(), "numeric");
        assert_eq!(err.reason(), "must contain only numeric characters");
        assert_eq!(err.to_string(), "telephone must contain only numeric characters");
    }
}
