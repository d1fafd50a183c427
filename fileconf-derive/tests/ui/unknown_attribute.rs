// Variable names have a fixed shape; there is no per-field prefix

use fileconf::Overlay;

#[derive(Overlay)]
struct Config {
    #[overlay(prefix = "X")]
    pub port: u16,
}

fn main() {}
