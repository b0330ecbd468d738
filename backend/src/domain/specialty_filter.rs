//! Specialty classification for the vet directory.
//!
//! The raw `specialty` parameter resolves to one of four filters. The
//! `none` sentinel has its own variant and never goes through name matching.

use std::fmt;

use crate::domain::{Criterion, SpecialtyName, Vet};

/// Wire value selecting vets without any specialty.
pub const NO_SPECIALTY_SENTINEL: &str = "none";

/// Resolved specialty filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpecialtyFilter {
    /// No filter: every vet matches.
    #[default]
    Any,
    /// Vets whose specialty set contains this name.
    Named(SpecialtyName),
    /// Vets with an empty specialty set.
    Unassigned,
    /// A name outside the known catalogue; matches no vet.
    Unknown(String),
}

impl SpecialtyFilter {
    /// Classify a raw parameter against the known specialty names.
    ///
    /// Blank input means no filter. `none` is matched case-insensitively.
    /// Names are matched case-insensitively against `known`; anything else
    /// becomes [`SpecialtyFilter::Unknown`] rather than an error.
    ///
    /// # Examples
    /// ```
    /// use clinic_directory::domain::{SpecialtyFilter, SpecialtyName};
    ///
    /// let known = vec![SpecialtyName::new("radiology").expect("valid")];
    /// assert_eq!(SpecialtyFilter::classify(Some(""), &known), SpecialtyFilter::Any);
    /// assert_eq!(SpecialtyFilter::classify(Some("NONE"), &known), SpecialtyFilter::Unassigned);
    /// assert!(matches!(
    ///     SpecialtyFilter::classify(Some("Radiology"), &known),
    ///     SpecialtyFilter::Named(_)
    /// ));
    /// assert!(matches!(
    ///     SpecialtyFilter::classify(Some("cardiology"), &known),
    ///     SpecialtyFilter::Unknown(_)
    /// ));
    /// ```
    pub fn classify(raw: Option<&str>, known: &[SpecialtyName]) -> Self {
        let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Self::Any;
        };
        if value.eq_ignore_ascii_case(NO_SPECIALTY_SENTINEL) {
            return Self::Unassigned;
        }
        known
            .iter()
            .find(|name| name.matches(value))
            .map_or_else(|| Self::Unknown(value.to_owned()), |name| Self::Named(name.clone()))
    }

    /// Whether `vet` passes this filter.
    pub fn admits(&self, vet: &Vet) -> bool {
        match self {
            Self::Any => true,
            Self::Named(name) => vet.has_specialty(name),
            Self::Unassigned => vet.has_no_specialties(),
            Self::Unknown(_) => false,
        }
    }

    /// Value to re-embed as the `specialty` query parameter, if any.
    pub fn query_value(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Named(name) => Some(name.as_str()),
            Self::Unassigned => Some(NO_SPECIALTY_SENTINEL),
            Self::Unknown(raw) => Some(raw.as_str()),
        }
    }

    /// Whether this filter constrains the listing at all.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Any)
    }
}

impl fmt::Display for SpecialtyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_value().unwrap_or("any"))
    }
}

impl Criterion<Vet> for SpecialtyFilter {
    fn matches(&self, entity: &Vet) -> bool {
        self.admits(entity)
    }
}
