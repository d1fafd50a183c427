//! Example using an injected environment instead of the process one

use fileconf::{FnEnv, Overlay};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Overlay)]
#[serde(default)]
struct Config {
    pub port: u16,
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
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/config/app.yml");

    // A fixed map, handy in tests
    let vars: HashMap<String, String> = [("PORT".to_string(), "9090".to_string())].into();
    let from_map: Config = fileconf::load_with(path, &vars)?;
    println!("From map: port={} debug={}", from_map.port, from_map.debug);

    // Any closure, here reading APP_-prefixed variables from the process
    let prefixed = FnEnv(|name: &str| std::env::var(format!("APP_{name}")).ok());
    let from_fn: Config = fileconf::load_with(path, &prefixed)?;
    println!("From closure: port={} debug={}", from_fn.port, from_fn.debug);

    Ok(())
}
