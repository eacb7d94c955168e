#[allow(clippy::module_inception)]
pub mod generate_colour_grid;
pub mod ports;
