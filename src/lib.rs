mod presenters;
mod controllers;
mod core;
mod input;

pub use crate::controllers::cli::render_file::RenderFileController;
pub use crate::controllers::interactive::{ExplorerController, FrameData, InputEvent};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelFlag, CancelToken, Cancelled, NeverCancel,
};
pub use crate::core::actions::generate_colour_grid::generate_colour_grid::{
    GenerateColourGridError, generate_colour_grid, generate_colour_grid_cancelable,
};
pub use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_fractal::generate_fractal::{
    generate_fractal, generate_fractal_cancelable,
};
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render::FractalRenderer;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::colour_grid::{ColourGrid, ColourGridError};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::image_size::ImageSize;
pub use crate::core::fractals::mandelbrot::algorithm::{
    DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS, EscapeOutcome, MandelbrotAlgorithm,
};
pub use crate::core::fractals::mandelbrot::colour_maps::hue_cycle::HueCycleColourMap;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{
    ConfigError, DEFAULT_IMAGE_SIZE, MandelbrotConfig,
};
pub use crate::core::util::hsb_to_rgb::hsb_to_rgb;
pub use crate::core::viewport::drag::DragSession;
pub use crate::core::viewport::transform::ViewportTransform;
pub use crate::core::viewport::viewport_state::{
    DEFAULT_CENTRE_OFFSET, DEFAULT_ZOOM, ViewportError, ViewportState, ZOOM_STEP_BASE,
};
pub use crate::input::cli::args::{GuiArgs, RenderArgs, ViewArgs};
pub use crate::input::cli::logging::init_logging;
pub use crate::presenters::file::ppm::{PpmFilePresenter, encode_ppm};

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
