use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_colour_grid::generate_colour_grid::{
    GenerateColourGridError, generate_colour_grid_cancelable,
};
use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal_cancelable;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::colour_grid::ColourGrid;
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::hue_cycle::HueCycleColourMap;
use crate::core::viewport::viewport_state::ViewportState;
use log::debug;

/// Produces a coloured Mandelbrot grid for a viewport.
///
/// Rendering is a pure function of the viewport, the image size and the iteration
/// settings: the same inputs always give byte-identical grids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalRenderer {
    algorithm: MandelbrotAlgorithm,
    colour_map: HueCycleColourMap,
}

impl Default for FractalRenderer {
    fn default() -> Self {
        Self::new(MandelbrotAlgorithm::default())
    }
}

impl FractalRenderer {
    #[must_use]
    pub fn new(algorithm: MandelbrotAlgorithm) -> Self {
        Self {
            algorithm,
            colour_map: HueCycleColourMap::new(algorithm.max_iterations()),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.algorithm.max_iterations()
    }

    #[must_use]
    pub fn algorithm(&self) -> &MandelbrotAlgorithm {
        &self.algorithm
    }

    /// Colour of a single pixel, without rendering the whole grid.
    #[must_use]
    pub fn pixel_colour(&self, viewport: &ViewportState, x: u32, y: u32, size: ImageSize) -> Colour {
        let c = viewport.pixel_to_plane(f64::from(x), f64::from(y), size);
        self.colour_map.map(self.algorithm.compute(c))
    }

    #[must_use]
    pub fn render(&self, viewport: &ViewportState, size: ImageSize) -> ColourGrid {
        debug!(
            "rendering {}x{} at zoom {} with {} iterations",
            size.width,
            size.height,
            viewport.zoom(),
            self.max_iterations()
        );

        match self.render_cancelable(viewport, size, &NeverCancel) {
            Ok(grid) => grid,
            Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
        }
    }

    /// Like [`FractalRenderer::render`], but abandons the work once `cancel` fires.
    pub fn render_cancelable<C: CancelToken>(
        &self,
        viewport: &ViewportState,
        size: ImageSize,
        cancel: &C,
    ) -> Result<ColourGrid, Cancelled> {
        let outcomes = generate_fractal_cancelable(viewport, size, &self.algorithm, cancel)?;

        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        generate_colour_grid_cancelable(outcomes, &self.colour_map, size, cancel).map_err(|e| match e {
            GenerateColourGridError::Cancelled(c) => c,
            GenerateColourGridError::ColourGrid(err) => {
                unreachable!("one outcome is generated per pixel: {}", err)
            }
        })
    }
}
