use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::colour_grid::{ColourGrid, ColourGridError};
use crate::core::data::image_size::ImageSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateColourGridError {
    Cancelled(Cancelled),
    ColourGrid(ColourGridError),
}

impl fmt::Display for GenerateColourGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourGrid(err) => write!(f, "colour grid error: {}", err),
        }
    }
}

impl Error for GenerateColourGridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourGrid(err) => Some(err),
        }
    }
}

impl From<ColourGridError> for GenerateColourGridError {
    fn from(err: ColourGridError) -> Self {
        Self::ColourGrid(err)
    }
}

/// Colours one fractal value per pixel into a grid of `size`.
///
/// `values` must be row-major and hold exactly `size.pixel_count()` entries.
pub fn generate_colour_grid<T, CMap: ColourMap<T>>(
    values: Vec<T>,
    mapper: &CMap,
    size: ImageSize,
) -> Result<ColourGrid, ColourGridError> {
    generate_colour_grid_cancelable(values, mapper, size, &NeverCancel).map_err(|e| match e {
        GenerateColourGridError::ColourGrid(err) => err,
        GenerateColourGridError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`generate_colour_grid`], checking `cancel` every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_colour_grid_cancelable<T, CMap, C>(
    values: Vec<T>,
    mapper: &CMap,
    size: ImageSize,
    cancel: &C,
) -> Result<ColourGrid, GenerateColourGridError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    if values.len() != size.pixel_count() {
        return Err(ColourGridError::BoundsMismatch {
            grid_size: size.pixel_count(),
            buffer_size: values.len(),
        }
        .into());
    }

    let mut grid = ColourGrid::new(size);

    for (i, (value, pixel)) in values.into_iter().zip(grid.pixels_mut()).enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GenerateColourGridError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper.map(value);
        pixel[0] = r;
        pixel[1] = g;
        pixel[2] = b;
    }

    Ok(grid)
}
