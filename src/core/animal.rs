use crate::domain::model::Animal;
use crate::domain::ports::Aging;

/// Ages after each of `birthdays` calls through the shared `Aging` method,
/// starting with the age at construction.
pub fn prototype_trajectory(name: &str, kind: &str, birthdays: u32) -> Vec<u32> {
    let mut animal = Animal::new(name, kind);
    let mut ages = vec![animal.age()];
    for _ in 0..birthdays {
        Aging::birthday(&mut animal);
        ages.push(animal.age());
    }
    ages
}

/// Same as [`prototype_trajectory`] but through the inherent method.
pub fn class_trajectory(name: &str, kind: &str, birthdays: u32) -> Vec<u32> {
    let mut animal = Animal::new(name, kind);
    let mut ages = vec![animal.age()];
    for _ in 0..birthdays {
        animal.birthday();
        ages.push(animal.age());
    }
    ages
}
