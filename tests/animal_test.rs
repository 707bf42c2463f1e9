use pitfall_lessons::core::animal::{class_trajectory, prototype_trajectory};
use pitfall_lessons::{Aging, Animal};

#[test]
fn test_new_animal_is_zero() {
    let leo = Animal::new("Leo", "Lion");
    assert_eq!(leo.age(), 0);
}

#[test]
fn test_one_birthday_each_style() {
    let mut leo = Animal::new("Leo", "Lion");
    Aging::birthday(&mut leo);
    assert_eq!(leo.age(), 1);

    let mut leo_ = Animal::new("Leo_", "Lion");
    leo_.birthday();
    assert_eq!(leo_.age(), 1);
}

#[test]
fn test_n_birthdays() {
    for n in [0u32, 1, 2, 10, 250] {
        let mut animal = Animal::new("Leo", "Lion");
        for _ in 0..n {
            animal.birthday();
        }
        assert_eq!(animal.age(), n);
    }
}

#[test]
fn test_styles_have_identical_trajectories() {
    for n in [0u32, 1, 7, 100] {
        let prototype = prototype_trajectory("Leo", "Lion", n);
        let class = class_trajectory("Leo", "Lion", n);
        assert_eq!(prototype, class);
        assert_eq!(prototype.len(), n as usize + 1);
        assert!(prototype.windows(2).all(|w| w[1] == w[0] + 1));
    }
}

#[test]
fn test_mixed_call_styles_on_one_instance() {
    let mut leo = Animal::new("Leo", "Lion");
    leo.birthday();
    Aging::birthday(&mut leo);
    leo.birthday();
    assert_eq!(leo.age(), 3);
}

/// Generic code only sees the shared method.
fn age_by<A: Aging>(animal: &mut A, years: u32) {
    for _ in 0..years {
        animal.birthday();
    }
}

#[test]
fn test_shared_method_through_generic_bound() {
    let mut leo = Animal::new("Leo", "Lion");
    age_by(&mut leo, 4);
    assert_eq!(leo.age(), 4);
}
