//! Composable filter predicates over listed entities.
//!
//! A [`Predicate`] is a conjunction of [`Criterion`] values. The empty
//! conjunction matches everything, which is how an unfiltered listing is
//! expressed. Criteria are shared behind `Arc` so predicates are cheap to
//! clone and safe to hand to concurrent readers.

use std::fmt;
use std::sync::Arc;

/// A single boolean test over an entity.
pub trait Criterion<E>: fmt::Debug + Send + Sync {
    /// Whether `entity` satisfies this criterion.
    fn matches(&self, entity: &E) -> bool;
}

/// Conjunction of criteria.
///
/// # Examples
/// ```
/// use clinic_directory::domain::{Predicate, TextCriterion, TextMatch};
///
/// fn name(value: &String) -> &str {
///     value
/// }
///
/// let predicate = Predicate::<String>::always()
///     .with(TextCriterion::new("name", name, TextMatch::Prefix, "fr"));
/// assert!(predicate.matches(&"Franklin".to_owned()));
/// assert!(!predicate.matches(&"Davis".to_owned()));
/// assert!(Predicate::<String>::always().matches(&String::new()));
/// ```
pub struct Predicate<E> {
    criteria: Vec<Arc<dyn Criterion<E>>>,
}

impl<E> Predicate<E> {
    /// The identity predicate: matches every entity.
    pub fn always() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    /// Add a criterion to the conjunction.
    pub fn with(mut self, criterion: impl Criterion<E> + 'static) -> Self {
        self.criteria.push(Arc::new(criterion));
        self
    }

    /// Add a criterion when present.
    pub fn with_optional<C: Criterion<E> + 'static>(self, criterion: Option<C>) -> Self {
        match criterion {
            Some(criterion) => self.with(criterion),
            None => self,
        }
    }

    /// Whether `entity` satisfies every criterion.
    pub fn matches(&self, entity: &E) -> bool {
        self.criteria.iter().all(|criterion| criterion.matches(entity))
    }

    /// Number of criteria in the conjunction.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Whether no criteria are present, so every entity matches.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl<E> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
        }
    }
}

impl<E> Default for Predicate<E> {
    fn default() -> Self {
        Self::always()
    }
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.criteria.iter()).finish()
    }
}

/// How a text criterion compares the needle with the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMatch {
    /// Field starts with the needle, ignoring case.
    Prefix,
    /// Field contains the needle anywhere, ignoring case.
    Substring,
    /// Field equals the needle exactly.
    Exact,
}

/// Compares one text field of an entity against a fixed needle.
pub struct TextCriterion<E> {
    label: &'static str,
    field: fn(&E) -> &str,
    mode: TextMatch,
    needle: String,
}

impl<E> TextCriterion<E> {
    /// Build a criterion over the field returned by `field`.
    ///
    /// Case-insensitive modes store the needle lowercased.
    pub fn new(
        label: &'static str,
        field: fn(&E) -> &str,
        mode: TextMatch,
        needle: impl Into<String>,
    ) -> Self {
        let needle = needle.into();
        let needle = match mode {
            TextMatch::Prefix | TextMatch::Substring => needle.to_lowercase(),
            TextMatch::Exact => needle,
        };
        Self {
            label,
            field,
            mode,
            needle,
        }
    }
}

impl<E> Criterion<E> for TextCriterion<E> {
    fn matches(&self, entity: &E) -> bool {
        let value = (self.field)(entity);
        match self.mode {
            TextMatch::Prefix => value.to_lowercase().starts_with(&self.needle),
            TextMatch::Substring => value.to_lowercase().contains(&self.needle),
            TextMatch::Exact => value == self.needle,
        }
    }
}

impl<E> fmt::Debug for TextCriterion<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCriterion")
            .field("field", &self.label)
            .field("mode", &self.mode)
            .field("needle", &self.needle)
            .finish()
    }
}
