use clap::{Args, Parser};
use std::path::PathBuf;

use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};

pub const DEFAULT_OUTPUT_PATH: &str = "output/mandelbrot.ppm";

/// View and iteration overrides shared by both binaries. Unset flags keep the defaults.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ViewArgs {
    /// Image width in pixels (default: 800)
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Image height in pixels (default: 600)
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Pixels per unit of the complex plane (default: 150)
    #[arg(long, value_name = "SCALE")]
    pub zoom: Option<f64>,

    /// Real part of the plane point at the image centre (default: -3.0)
    #[arg(long = "centre-re", value_name = "RE", allow_hyphen_values = true)]
    pub centre_re: Option<f64>,

    /// Imaginary part of the plane point at the image centre (default: -1.5)
    #[arg(long = "centre-im", value_name = "IM", allow_hyphen_values = true)]
    pub centre_im: Option<f64>,

    /// Iteration budget per pixel (default: 1000)
    #[arg(long = "max-iterations", value_name = "N")]
    pub max_iterations: Option<u32>,

    /// Escape radius (default: 2.0)
    #[arg(long = "escape-radius", value_name = "R")]
    pub escape_radius: Option<f64>,
}

impl ViewArgs {
    /// Applies the overrides to the default config and validates the result.
    pub fn into_config(self) -> Result<MandelbrotConfig, ConfigError> {
        let defaults = MandelbrotConfig::default();

        let config = MandelbrotConfig {
            image_size: ImageSize::new(
                self.width.unwrap_or(defaults.image_size.width),
                self.height.unwrap_or(defaults.image_size.height),
            ),
            zoom: self.zoom.unwrap_or(defaults.zoom),
            centre_offset: Complex::new(
                self.centre_re.unwrap_or(defaults.centre_offset.real),
                self.centre_im.unwrap_or(defaults.centre_offset.imag),
            ),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            escape_radius: self.escape_radius.unwrap_or(defaults.escape_radius),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Render one Mandelbrot view to a PPM file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct RenderArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Output file
    #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// Interactive Mandelbrot set viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct GuiArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
