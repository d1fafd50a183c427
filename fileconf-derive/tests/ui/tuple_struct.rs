// Tuple fields have no names to derive variable names from

use fileconf::Overlay;

#[derive(Overlay)]
struct Port(u16);

fn main() {}
