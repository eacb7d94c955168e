use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::FractalRenderer;
use crate::core::data::colour_grid::ColourGrid;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};

/// Renders a single view headlessly and hands the grid to a file presenter.
pub struct RenderFileController<P: FilePresenterPort> {
    presenter: P,
    config: MandelbrotConfig,
    grid: Option<ColourGrid>,
}

impl<P: FilePresenterPort> RenderFileController<P> {
    pub fn new(presenter: P, config: MandelbrotConfig) -> Self {
        Self {
            presenter,
            config,
            grid: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), ConfigError> {
        let viewport = self.config.viewport()?;
        let renderer = FractalRenderer::new(self.config.algorithm()?);
        let size = self.config.image_size;

        info!("Rendering Mandelbrot set...");
        info!("Image size: {}x{}", size.width, size.height);
        info!("Max iterations: {}", renderer.max_iterations());

        let start = Instant::now();
        self.grid = Some(renderer.render(&viewport, size));

        info!("Duration: {:?}", start.elapsed());

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        match &self.grid {
            Some(grid) => {
                self.presenter.present(grid, &filepath)?;
                info!("Saved to {}", filepath.as_ref().display());
            }
            None => warn!("nothing rendered yet, skipping write"),
        }

        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> Option<&ColourGrid> {
        self.grid.as_ref()
    }
}
