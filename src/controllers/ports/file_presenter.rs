use std::path::Path;

use crate::core::data::colour_grid::ColourGrid;

pub trait FilePresenterPort {
    fn present(&self, grid: &ColourGrid, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
