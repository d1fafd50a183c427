// An empty name would produce variables like `DATABASE_` or `_PORT`

use fileconf::Overlay;

#[derive(Overlay)]
struct Config {
    #[overlay(name = "")]
    pub port: u16,
}

fn main() {}
