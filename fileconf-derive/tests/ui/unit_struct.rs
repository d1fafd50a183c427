// A unit struct has no fields at all, named or otherwise

use fileconf::Overlay;

#[derive(Overlay)]
struct Marker;

fn main() {}
