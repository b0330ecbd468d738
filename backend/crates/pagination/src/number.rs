//! Page number and page size newtypes.

use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;

use crate::PaginationError;

/// One-based page number.
///
/// Construction never fails: read paths coerce anything unusable to the
/// first page instead of rejecting the request.
///
/// # Examples
/// ```
/// use pagination::PageNumber;
///
/// assert_eq!(PageNumber::parse_lenient(Some("3")).get(), 3);
/// assert_eq!(PageNumber::parse_lenient(Some("0")), PageNumber::FIRST);
/// assert_eq!(PageNumber::parse_lenient(Some("two")), PageNumber::FIRST);
/// assert_eq!(PageNumber::parse_lenient(None), PageNumber::FIRST);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Build a page number, mapping zero to [`PageNumber::FIRST`].
    #[must_use]
    pub fn new(value: u32) -> Self {
        NonZeroU32::new(value).map_or(Self::FIRST, Self)
    }

    /// Parse a raw query parameter, falling back to the first page when the
    /// value is absent, blank, non-numeric, negative, zero or too large.
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .and_then(|value| value.parse::<u32>().ok())
            .map_or(Self::FIRST, Self::new)
    }

    /// Numeric value of the page.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The page before this one, if any.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.get()
            .checked_sub(1)
            .and_then(NonZeroU32::new)
            .map(Self)
    }

    /// The page after this one, saturating at `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum number of items shown on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    /// Build a page size.
    ///
    /// # Errors
    /// Returns [`PaginationError::ZeroPageSize`] when `value` is zero.
    pub fn new(value: u32) -> Result<Self, PaginationError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(PaginationError::ZeroPageSize)
    }

    /// Build a page size from a compile-time constant.
    #[must_use]
    pub const fn from_non_zero(value: NonZeroU32) -> Self {
        Self(value)
    }

    /// Numeric value of the size.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("1"), 1)]
    #[case(Some("7"), 7)]
    #[case(Some(" 2 "), 2)]
    #[case(Some("0"), 1)]
    #[case(Some("-4"), 1)]
    #[case(Some("abc"), 1)]
    #[case(Some(""), 1)]
    #[case(Some("99999999999"), 1)]
    #[case(None, 1)]
    fn parse_lenient_coerces_bad_input_to_first_page(
        #[case] raw: Option<&str>,
        #[case] expected: u32,
    ) {
        assert_eq!(PageNumber::parse_lenient(raw).get(), expected);
    }

    #[rstest]
    fn previous_of_first_page_is_none() {
        assert!(PageNumber::FIRST.previous().is_none());
        assert_eq!(PageNumber::new(3).previous(), Some(PageNumber::new(2)));
    }

    #[rstest]
    fn next_saturates() {
        assert_eq!(PageNumber::new(u32::MAX).next().get(), u32::MAX);
        assert_eq!(PageNumber::FIRST.next().get(), 2);
    }

    #[rstest]
    fn zero_page_size_is_rejected() {
        assert_eq!(PageSize::new(0), Err(PaginationError::ZeroPageSize));
        assert_eq!(PageSize::new(5).map(PageSize::get), Ok(5));
    }
}
