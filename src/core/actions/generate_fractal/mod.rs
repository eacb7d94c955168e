#[allow(clippy::module_inception)]
pub mod generate_fractal;
pub mod ports;
