// Only structs with named fields can be bound

#[derive(envbind::Bind)]
#[allow(dead_code)]
enum Mode {
    Fast,
    Slow,
}

fn main() {}
