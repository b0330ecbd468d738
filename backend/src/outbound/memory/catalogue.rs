//! In-memory specialty catalogue.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{DirectoryError, SpecialtyCatalogue};
use crate::domain::SpecialtyName;

/// Fixed, sorted list of specialty names.
#[derive(Debug, Clone, Default)]
pub struct InMemorySpecialtyCatalogue {
    names: Arc<[SpecialtyName]>,
}

impl InMemorySpecialtyCatalogue {
    /// Catalogue of `names`, sorted and de-duplicated ignoring case.
    pub fn new(names: impl IntoIterator<Item = SpecialtyName>) -> Self {
        let names: BTreeSet<SpecialtyName> = names.into_iter().collect();
        Self {
            names: names.into_iter().collect(),
        }
    }
}

#[async_trait]
impl SpecialtyCatalogue for InMemorySpecialtyCatalogue {
    async fn specialty_names(&self) -> Result<Vec<SpecialtyName>, DirectoryError> {
        Ok(self.names.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn specialty(name: &str) -> SpecialtyName {
        SpecialtyName::new(name).expect("valid specialty")
    }

    #[rstest]
    #[tokio::test]
    async fn names_are_sorted_and_unique() {
        let catalogue =
            InMemorySpecialtyCatalogue::new([specialty("surgery"), specialty("Radiology"), specialty("SURGERY")]);
        let names = catalogue.specialty_names().await.expect("names");
        let names: Vec<&str> = names.iter().map(SpecialtyName::key).collect();
        assert_eq!(names, ["radiology", "surgery"]);
    }
}
