use pitfall_lessons::Animal;

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut leo_ = Animal::new("Leo_", "Lion");
    leo_.birthday();
    tracing::debug!(name = %leo_.name, age = leo_.age(), "birthday");
    println!("{}", leo_.age());
}
