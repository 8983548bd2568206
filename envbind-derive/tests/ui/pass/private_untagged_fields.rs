// Private fields are fine as long as they are not tagged

use envbind::Bind;
use std::collections::HashMap;

#[derive(Default, Bind)]
struct Internal {
    counter: u8,
    #[env(key = "-")]
    secret: String,
    labels: HashMap<String, String>,
}

fn main() {
    let mut internal = Internal {
        counter: 9,
        secret: "keep".to_string(),
        labels: HashMap::new(),
    };
    internal.bind().unwrap();
    assert_eq!(internal.counter, 9);
    assert_eq!(internal.secret, "keep");
    assert!(internal.labels.is_empty());
}
