//! Vet directory criteria.

use pagination::LinkTemplate;

use super::{ListingCriteria, normalise, params};
use crate::domain::{ListedEntity, Predicate, SpecialtyFilter, SpecialtyName, TextCriterion, TextMatch, Vet};

/// Path of the vet listing.
pub const VETS_PATH: &str = "/vets";

/// Raw vet listing parameters as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VetSearchParams {
    /// Last-name prefix.
    pub last_name: Option<String>,
    /// Specialty name or the `none` sentinel.
    pub specialty: Option<String>,
    /// Requested page, coerced leniently.
    pub page: Option<String>,
}

/// Validated vet filters.
///
/// Construction never fails: an unrecognised specialty is a filter that
/// matches nothing, not malformed input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VetCriteria {
    last_name: Option<String>,
    specialty: SpecialtyFilter,
}

impl VetCriteria {
    /// Classify raw parameters against the known specialty names.
    pub fn from_params(params: &VetSearchParams, known: &[SpecialtyName]) -> Self {
        Self {
            last_name: normalise(params.last_name.as_deref()).map(str::to_owned),
            specialty: SpecialtyFilter::classify(params.specialty.as_deref(), known),
        }
    }

    /// Last-name prefix, if any.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Resolved specialty filter.
    pub fn specialty(&self) -> &SpecialtyFilter {
        &self.specialty
    }

    /// The same criteria with a different specialty filter.
    pub fn with_specialty(&self, specialty: SpecialtyFilter) -> Self {
        Self {
            last_name: self.last_name.clone(),
            specialty,
        }
    }
}

fn last_name(vet: &Vet) -> &str {
    vet.last_name()
}

impl ListingCriteria<Vet> for VetCriteria {
    const LISTING_PATH: &'static str = VETS_PATH;
    const PRIMARY_FIELD: &'static str = params::SPECIALTY;

    fn predicate(&self) -> Predicate<Vet> {
        let predicate = Predicate::always().with_optional(
            self.last_name()
                .map(|needle| TextCriterion::new("lastName", last_name, TextMatch::Prefix, needle)),
        );
        if self.specialty.is_active() {
            predicate.with(self.specialty.clone())
        } else {
            predicate
        }
    }

    fn link_template(&self) -> LinkTemplate {
        LinkTemplate::new(VETS_PATH)
            .with_optional_param(params::LAST_NAME, self.last_name())
            .with_optional_param(params::SPECIALTY, self.specialty.query_value())
    }
}
