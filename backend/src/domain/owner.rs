//! Pet owner read model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ListedEntity;

/// Stable owner identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct OwnerId(u32);

impl OwnerId {
    /// Wrap a raw identifier.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pet owner as shown in the owner directory.
///
/// Telephone numbers are stored normalised to digits only; exact telephone
/// filters compare against this form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Stable identifier.
    #[schema(value_type = u32, example = 1)]
    pub id: OwnerId,
    /// Given name.
    #[schema(example = "George")]
    pub first_name: String,
    /// Family name; primary sort key.
    #[schema(example = "Franklin")]
    pub last_name: String,
    /// Street address.
    #[schema(example = "110 W. Liberty St.")]
    pub address: String,
    /// City of residence.
    #[schema(example = "Madison")]
    pub city: String,
    /// Digits-only telephone number.
    #[schema(example = "6085551023")]
    pub telephone: String,
}

impl ListedEntity for Owner {
    type Id = OwnerId;

    fn id(&self) -> OwnerId {
        self.id
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }
}
