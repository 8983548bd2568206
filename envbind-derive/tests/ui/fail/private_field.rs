// Tagged fields must be public

#[derive(Default, envbind::Bind)]
pub struct Config {
    #[env(key = "SECRET")]
    secret: String,
}

fn main() {
    let _ = Config::default().secret;
}
