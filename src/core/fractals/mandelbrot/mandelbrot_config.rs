use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::mandelbrot::algorithm::{
    DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS, MandelbrotAlgorithm,
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::viewport::viewport_state::{
    DEFAULT_CENTRE_OFFSET, DEFAULT_ZOOM, ViewportError, ViewportState,
};
use std::error::Error;
use std::fmt;

pub const DEFAULT_IMAGE_SIZE: ImageSize = ImageSize {
    width: 800,
    height: 600,
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    Viewport(ViewportError),
    Mandelbrot(MandelbrotError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::Mandelbrot(err) => write!(f, "invalid mandelbrot settings: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<MandelbrotError> for ConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

/// Start-up settings for a viewer session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub image_size: ImageSize,
    pub zoom: f64,
    pub centre_offset: Complex,
    pub max_iterations: u32,
    pub escape_radius: f64,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            image_size: DEFAULT_IMAGE_SIZE,
            zoom: DEFAULT_ZOOM,
            centre_offset: DEFAULT_CENTRE_OFFSET,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }
}

impl MandelbrotConfig {
    pub fn viewport(&self) -> Result<ViewportState, ConfigError> {
        Ok(ViewportState::new(self.zoom, self.centre_offset)?)
    }

    pub fn algorithm(&self) -> Result<MandelbrotAlgorithm, ConfigError> {
        Ok(MandelbrotAlgorithm::new(
            self.max_iterations,
            self.escape_radius,
        )?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport()?;
        self.algorithm()?;
        Ok(())
    }
}
