use pitfall_lessons::{Aging, Animal};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut leo = Animal::new("Leo", "Lion");
    Aging::birthday(&mut leo);
    println!("{}", leo.age());
}
