//! Example directory contents loaded at startup.
//!
//! The classic clinic owners are extended with extra Davis households so
//! the last-name listing spans two pages.

use crate::domain::{Owner, OwnerId, SpecialtyName, SpecialtyNameError, Vet, VetId};

/// Known specialties, including ones no seeded vet practises yet.
pub const EXAMPLE_SPECIALTIES: [&str; 3] = ["dentistry", "radiology", "surgery"];

const OWNERS: [(u32, &str, &str, &str, &str, &str); 16] = [
    (1, "George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
    (2, "Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    (3, "Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
    (4, "Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
    (5, "Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
    (6, "Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
    (7, "Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
    (8, "Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
    (9, "David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
    (10, "Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
    (11, "Alice", "Davis", "12 Elm St.", "Madison", "6085550111"),
    (12, "Brian", "Davis", "48 Birch Rd.", "Middleton", "6085550112"),
    (13, "Clara", "Davis", "7 Willow Ct.", "Verona", "6085550113"),
    (14, "Daniel", "Davis", "301 Pine Ave.", "Fitchburg", "6085550114"),
    (15, "Emma", "Davis", "95 Cedar Ln.", "Sun Prairie", "6085550115"),
    (16, "Frank", "Davis", "220 Aspen Dr.", "Madison", "6085550116"),
];

const VETS: [(u32, &str, &str, &[&str]); 6] = [
    (1, "James", "Carter", &[]),
    (2, "Helen", "Leary", &["radiology"]),
    (3, "Linda", "Douglas", &["surgery", "dentistry"]),
    (4, "Rafael", "Ortega", &["surgery"]),
    (5, "Henry", "Stevens", &["radiology"]),
    (6, "Sharon", "Jenkins", &[]),
];

/// Seeded owners.
pub fn example_owners() -> Vec<Owner> {
    OWNERS
        .iter()
        .map(|&(id, first_name, last_name, address, city, telephone)| Owner {
            id: OwnerId::new(id),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            address: address.to_owned(),
            city: city.to_owned(),
            telephone: telephone.to_owned(),
        })
        .collect()
}

/// Seeded vets.
///
/// # Errors
/// Fails only if a seeded specialty name is blank.
pub fn example_vets() -> Result<Vec<Vet>, SpecialtyNameError> {
    VETS.iter()
        .map(|&(id, first_name, last_name, specialties)| {
            let specialties = specialties
                .iter()
                .map(|name| SpecialtyName::new(name))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Vet::new(VetId::new(id), first_name, last_name, specialties))
        })
        .collect()
}

/// Seeded specialty names.
///
/// # Errors
/// Fails only if a seeded specialty name is blank.
pub fn example_specialties() -> Result<Vec<SpecialtyName>, SpecialtyNameError> {
    EXAMPLE_SPECIALTIES.iter().map(|name| SpecialtyName::new(name)).collect()
}
