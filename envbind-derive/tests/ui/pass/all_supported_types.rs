// Every supported field type, plain and wrapped

use envbind::Bind;
use std::collections::HashMap;

#[derive(Default, Bind)]
struct Everything {
    #[env(key = "A")]
    pub a: String,
    #[env(key = "B")]
    pub b: bool,
    #[env(key = "C")]
    pub c: i32,
    #[env(key = "D")]
    pub d: i64,
    #[env(key = "E")]
    pub e: u32,
    #[env(key = "F")]
    pub f: u64,
    #[env(key = "G")]
    pub g: Vec<u8>,
    #[env(key = "OA")]
    pub oa: Option<String>,
    #[env(key = "OB")]
    pub ob: Option<bool>,
    #[env(key = "OG")]
    pub og: Option<Vec<u8>>,
    #[env(key = "BC")]
    pub bc: Box<i32>,
    #[env(key = "BF")]
    pub bf: Box<u64>,
}

fn main() {
    let vars: HashMap<String, String> = HashMap::new();
    let mut everything = Everything::default();
    everything.bind_from(&vars).unwrap();
    assert_eq!(everything.oa.as_deref(), Some(""));
    assert_eq!(everything.ob, Some(false));
    assert_eq!(everything.og, Some(Vec::new()));
    assert_eq!(*everything.bc, 0);
    assert_eq!(*everything.bf, 0);
}
