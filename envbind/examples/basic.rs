//! Basic usage example

use envbind::Bind;

#[derive(Debug, Default, Bind)]
struct Config {
    // Unset means false
    #[env(key = "DEBUG")]
    pub debug: bool,

    // With default value
    #[env(key = "PORT", default = "8000")]
    pub port: String,

    // Numeric type with default
    #[env(key = "WORKERS", default = "16")]
    pub workers: i32,

    // Must be set, default would be ignored
    #[env(key = "NAME,required")]
    pub name: String,

    // Always Some after binding
    #[env(key = "TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    // Not bound
    pub started_by: String,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DEBUG", "true");
    std::env::set_var("WORKERS", "4");
    std::env::set_var("NAME", "Jane");

    let mut config = Config {
        started_by: "example".to_string(),
        ..Config::default()
    };
    envbind::bind(&mut config)?;

    println!("Configuration bound:");
    println!("  Debug: {}", config.debug);
    println!("  Port: {}", config.port);
    println!("  Workers: {}", config.workers);
    println!("  Name: {}", config.name);
    println!("  Timeout: {:?}", config.timeout_secs);
    println!("  Started by: {}", config.started_by);

    // Same struct, built in one step
    let config = Config::from_env()?;
    println!("  Workers (from_env): {}", config.workers);

    Ok(())
}
