//! Example demonstrating renamed and skipped fields

use fileconf::Overlay;
use serde::Deserialize;

#[derive(Debug, Deserialize, Overlay)]
#[serde(default)]
struct Database {
    // Read from DB_ADDR instead of DB_HOST
    #[overlay(name = "addr")]
    pub host: String,

    // Never read from the environment
    #[overlay(skip)]
    pub port: u16,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
        }
    }
}

#[derive(Debug, Deserialize, Overlay)]
struct Config {
    // Segment becomes DB for everything below
    #[overlay(name = "db")]
    pub database: Database,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DB_ADDR", "db.internal");
    std::env::set_var("DB_PORT", "6543");

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/config/app.yml");
    let config: Config = fileconf::load(path)?;

    println!("Configuration loaded:");
    println!("  Database host: {}", config.database.host);
    println!("  Database port: {}", config.database.port);

    Ok(())
}
