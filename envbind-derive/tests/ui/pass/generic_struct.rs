// Generic structs keep their parameters and bounds in the generated impl

use envbind::Bind;
use std::collections::HashMap;

#[derive(Default, Bind)]
struct Wrapper<T: Default> {
    #[env(key = "WRAPPER_LIMIT", default = "3")]
    pub limit: u32,

    pub extra: T,
}

fn main() {
    let vars: HashMap<String, String> = HashMap::new();
    let mut wrapper: Wrapper<Vec<String>> = Wrapper::default();
    wrapper.bind_from(&vars).unwrap();
    assert_eq!(wrapper.limit, 3);
    assert!(wrapper.extra.is_empty());
}
