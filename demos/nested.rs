//! Nested structs and sequences

use fileconf::Overlay;
use serde::Deserialize;

#[derive(Debug, Deserialize, Overlay)]
struct Database {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Overlay)]
struct Server {
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Deserialize, Overlay)]
struct Config {
    pub port: u16,
    pub debug: bool,
    pub database: Database,
    pub servers: Vec<Server>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DATABASE_PORT", "5433");
    std::env::set_var("SERVERS_1_NAME", "beta");
    std::env::set_var("SERVERS_1_WEIGHT", "2.5");

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/config/app.json");
    let config: Config = fileconf::load(path)?;

    println!("Configuration loaded:");
    println!("  Port: {}", config.port);
    println!("  Database: {}:{}", config.database.host, config.database.port);
    for (i, server) in config.servers.iter().enumerate() {
        println!("  Server {}: {} (weight {})", i, server.name, server.weight);
    }

    Ok(())
}
