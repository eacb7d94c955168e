pub mod colour;
pub mod colour_grid;
pub mod complex;
pub mod image_size;
