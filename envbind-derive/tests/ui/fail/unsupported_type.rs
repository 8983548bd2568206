// Tagged fields must have a type implementing `envbind::Value`

use std::collections::HashMap;

#[derive(Default, envbind::Bind)]
#[allow(dead_code)]
pub struct Config {
    #[env(key = "LABELS")]
    pub labels: HashMap<String, String>,
}

fn main() {
    let _ = Config::default();
}
