//! Owner directory criteria.

use pagination::LinkTemplate;

use super::{CriteriaValidationError, ListingCriteria, normalise, params};
use crate::domain::{Owner, Predicate, TextCriterion, TextMatch};

/// Path of the owner listing.
pub const OWNERS_PATH: &str = "/owners";

/// Raw owner listing parameters as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerSearchParams {
    /// Last-name substring.
    pub last_name: Option<String>,
    /// Telephone, digits only once trimmed.
    pub telephone: Option<String>,
    /// City substring.
    pub city: Option<String>,
    /// Requested page, coerced leniently.
    pub page: Option<String>,
}

/// A digits-only telephone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telephone(String);

impl Telephone {
    /// Validate a trimmed, non-empty telephone value.
    ///
    /// # Errors
    /// Returns [`CriteriaValidationError::NonNumeric`] when any character is
    /// not an ASCII digit.
    ///
    /// # Examples
    /// ```
    /// use clinic_directory::domain::Telephone;
    ///
    /// assert!(Telephone::parse("6085551023").is_ok());
    /// assert!(Telephone::parse("608-555-1023").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, CriteriaValidationError> {
        if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(CriteriaValidationError::NonNumeric {
                field: params::TELEPHONE,
            });
        }
        Ok(Self(raw.to_owned()))
    }

    /// The digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated owner filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerCriteria {
    last_name: Option<String>,
    telephone: Option<Telephone>,
    city: Option<String>,
}

impl OwnerCriteria {
    /// Validate raw parameters. The page parameter is not part of the
    /// criteria.
    ///
    /// # Errors
    /// Fails when the telephone contains anything but digits.
    pub fn from_params(params: &OwnerSearchParams) -> Result<Self, CriteriaValidationError> {
        let telephone = normalise(params.telephone.as_deref())
            .map(Telephone::parse)
            .transpose()?;
        Ok(Self {
            last_name: normalise(params.last_name.as_deref()).map(str::to_owned),
            telephone,
            city: normalise(params.city.as_deref()).map(str::to_owned),
        })
    }

    /// Last-name substring, if any.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Exact telephone, if any.
    pub fn telephone(&self) -> Option<&Telephone> {
        self.telephone.as_ref()
    }

    /// City substring, if any.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
}

fn last_name(owner: &Owner) -> &str {
    &owner.last_name
}

fn telephone(owner: &Owner) -> &str {
    &owner.telephone
}

fn city(owner: &Owner) -> &str {
    &owner.city
}

impl ListingCriteria<Owner> for OwnerCriteria {
    const LISTING_PATH: &'static str = OWNERS_PATH;
    const PRIMARY_FIELD: &'static str = params::LAST_NAME;

    fn predicate(&self) -> Predicate<Owner> {
        Predicate::always()
            .with_optional(
                self.last_name()
                    .map(|needle| TextCriterion::new("lastName", last_name, TextMatch::Substring, needle)),
            )
            .with_optional(self.telephone().map(|needle| {
                TextCriterion::new("telephone", telephone, TextMatch::Exact, needle.as_str())
            }))
            .with_optional(
                self.city()
                    .map(|needle| TextCriterion::new("city", city, TextMatch::Substring, needle)),
            )
    }

    fn link_template(&self) -> LinkTemplate {
        LinkTemplate::new(OWNERS_PATH)
            .with_optional_param(params::LAST_NAME, self.last_name())
            .with_optional_param(params::TELEPHONE, self.telephone().map(Telephone::as_str))
            .with_optional_param(params::CITY, self.city())
    }
}
