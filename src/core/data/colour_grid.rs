use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn image_size_to_buffer_size(size: ImageSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColourGridError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        size: ImageSize,
    },
    BoundsMismatch {
        grid_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for ColourGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "colour grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { x, y, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} colour grid",
                    x, y, size.width, size.height
                )
            }
        }
    }
}

impl Error for ColourGridError {}

pub type ColourGridData = Vec<u8>;

/// A `width × height` grid of 24-bit RGB pixels, row-major with the origin at the top left.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourGrid {
    size: ImageSize,
    buffer: ColourGridData,
}

impl ColourGrid {
    #[must_use]
    pub fn new(size: ImageSize) -> Self {
        Self {
            size,
            buffer: vec![0; image_size_to_buffer_size(size)],
        }
    }

    pub fn from_data(size: ImageSize, buffer: ColourGridData) -> Result<Self, ColourGridError> {
        let grid_size = image_size_to_buffer_size(size);

        if grid_size != buffer.len() {
            return Err(ColourGridError::BoundsMismatch {
                grid_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_buffer(self) -> ColourGridData {
        self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        let index = self.index_of(x, y)?;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), ColourGridError> {
        let index = self
            .index_of(x, y)
            .ok_or(ColourGridError::PixelOutsideBounds {
                x,
                y,
                size: self.size,
            })?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Mutable RGB triples in row-major order.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.buffer.chunks_exact_mut(BYTES_PER_PIXEL)
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }

        Some((y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}
