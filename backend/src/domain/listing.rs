//! Results of the directory listing use cases.

use pagination::PageNumber;

use crate::domain::{
    CriteriaValidationError, ListedEntity, ListingCriteria, NavigationDecision, SpecialtyFilter,
    SpecialtyName, Vet, VetCriteria,
};

/// Outcome of a listing request whose criteria can fail validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingOutcome<E: ListedEntity> {
    /// Criteria were rejected; nothing was queried.
    Rejected(CriteriaValidationError),
    /// Criteria were valid and the listing resolved.
    Resolved(NavigationDecision<E>),
}

/// A selectable entry of the specialty filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialtyOption {
    /// Label shown to the user.
    pub label: String,
    /// Value of the `specialty` parameter; `None` clears the filter.
    pub value: Option<String>,
    /// Listing link selecting this option, other filters preserved.
    pub href: String,
    /// Whether the option is the active filter.
    pub selected: bool,
}

/// Resolved vet listing with the data needed to redisplay the filter form.
#[derive(Debug, Clone, PartialEq)]
pub struct VetListing {
    /// Criteria the listing was resolved with.
    pub criteria: VetCriteria,
    /// Known specialty names, sorted.
    pub specialties: Vec<SpecialtyName>,
    /// Redirect or page.
    pub decision: NavigationDecision<Vet>,
}

impl VetListing {
    /// Options for the specialty drop-down: "all", each known specialty, then
    /// "none". Each link resets paging and keeps the last-name filter.
    pub fn specialty_options(&self) -> Vec<SpecialtyOption> {
        let named = self.specialties.iter().map(|name| SpecialtyFilter::Named(name.clone()));
        std::iter::once(SpecialtyFilter::Any)
            .chain(named)
            .chain(std::iter::once(SpecialtyFilter::Unassigned))
            .map(|filter| self.option(filter))
            .collect()
    }

    fn option(&self, filter: SpecialtyFilter) -> SpecialtyOption {
        let label = match &filter {
            SpecialtyFilter::Any => "all".to_owned(),
            other => other.to_string(),
        };
        let selected = self.criteria.specialty() == &filter;
        let value = filter.query_value().map(str::to_owned);
        let href = self
            .criteria
            .with_specialty(filter)
            .link_template()
            .href(PageNumber::FIRST);
        SpecialtyOption {
            label,
            value,
            href,
            selected,
        }
    }
}
