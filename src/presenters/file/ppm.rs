use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour_grid::ColourGrid;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `grid` as a binary PPM image.
pub fn encode_ppm<W: Write>(grid: &ColourGrid, writer: &mut W) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", grid.width(), grid.height())?;
    writeln!(writer, "255")?;
    writer.write_all(grid.buffer())?;

    Ok(())
}

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, grid: &ColourGrid, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(fs::File::create(filepath)?);
        encode_ppm(grid, &mut writer)?;
        writer.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
