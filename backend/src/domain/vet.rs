//! Veterinarian read model and specialty names.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::ListedEntity;

/// Stable veterinarian identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
#[serde(transparent)]
pub struct VetId(u32);

impl VetId {
    /// Wrap a raw identifier.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for [`SpecialtyName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecialtyNameError {
    /// The name was empty once trimmed.
    #[error("specialty name must not be empty")]
    Empty,
}

/// A specialty tag such as `radiology`.
///
/// Equality, ordering and hashing ignore case, so a vet can never hold the
/// same specialty twice under different spellings. The original spelling is
/// kept for display.
///
/// # Examples
/// ```
/// use clinic_directory::domain::SpecialtyName;
///
/// let lower = SpecialtyName::new("radiology").expect("valid");
/// let upper = SpecialtyName::new(" Radiology ").expect("valid");
/// assert_eq!(lower, upper);
/// assert_eq!(upper.as_str(), "Radiology");
/// ```
#[derive(Debug, Clone)]
pub struct SpecialtyName {
    display: String,
    key: String,
}

impl SpecialtyName {
    /// Validate and wrap a specialty name.
    ///
    /// # Errors
    /// Returns [`SpecialtyNameError::Empty`] for blank input.
    pub fn new(raw: &str) -> Result<Self, SpecialtyNameError> {
        let display = raw.trim();
        if display.is_empty() {
            return Err(SpecialtyNameError::Empty);
        }
        Ok(Self {
            display: display.to_owned(),
            key: display.to_lowercase(),
        })
    }

    /// Name as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Case-folded comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether `raw` names this specialty, ignoring case and surrounding
    /// whitespace.
    pub fn matches(&self, raw: &str) -> bool {
        raw.trim().to_lowercase() == self.key
    }
}

impl PartialEq for SpecialtyName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for SpecialtyName {}

impl PartialOrd for SpecialtyName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SpecialtyName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Hash for SpecialtyName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for SpecialtyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl Serialize for SpecialtyName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

/// A veterinarian and the set of specialties they practise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    #[schema(value_type = u32, example = 3)]
    id: VetId,
    #[schema(example = "Linda")]
    first_name: String,
    #[schema(example = "Douglas")]
    last_name: String,
    #[schema(value_type = Vec<String>, example = json!(["dentistry", "surgery"]))]
    specialties: BTreeSet<SpecialtyName>,
}

impl Vet {
    /// Build a vet; duplicate specialties collapse to one.
    pub fn new(
        id: VetId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        specialties: impl IntoIterator<Item = SpecialtyName>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            specialties: specialties.into_iter().collect(),
        }
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Specialties, ordered by case-folded name.
    pub fn specialties(&self) -> &BTreeSet<SpecialtyName> {
        &self.specialties
    }

    /// Whether the vet practises `name`.
    pub fn has_specialty(&self, name: &SpecialtyName) -> bool {
        self.specialties.contains(name)
    }

    /// Whether the vet has no specialties at all.
    pub fn has_no_specialties(&self) -> bool {
        self.specialties.is_empty()
    }
}

impl ListedEntity for Vet {
    type Id = VetId;

    fn id(&self) -> VetId {
        self.id
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }
}
