//! Basic usage example

use fileconf::Overlay;
use serde::Deserialize;

#[derive(Debug, Deserialize, Overlay)]
#[serde(default)]
struct Config {
    // Overridden by PORT
    pub port: u16,

    // Overridden by DEBUG (1, t, true, 0, f, false, ...)
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            debug: false,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("PORT", "9090");
    std::env::set_var("DEBUG", "not-a-bool");

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/config/app.yml");

    // Load the file, then apply environment overrides
    let mut config = Config::default();
    fileconf::get_config(&mut config, path)?;

    println!("Configuration loaded:");
    println!("  Port: {}", config.port);
    // DEBUG did not parse, so the file value stays
    println!("  Debug: {}", config.debug);

    Ok(())
}
