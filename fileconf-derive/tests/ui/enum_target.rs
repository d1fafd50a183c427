// Only structs can describe their fields to the environment walker

use fileconf::Overlay;

#[derive(Overlay)]
enum Mode { Fast, Slow }

fn main() {}
