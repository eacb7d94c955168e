use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::input_event::InputEvent;
use crate::core::actions::render::FractalRenderer;
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
use crate::core::viewport::transform::ViewportTransform;
use crate::core::viewport::viewport_state::ViewportState;
use log::debug;
use std::time::Instant;

/// Applies input to the viewport and re-renders lazily when the view is stale.
///
/// Input only ever marks the view dirty; the grid is recomputed in [`ExplorerController::frame`],
/// which the shell calls when it is about to draw.
pub struct ExplorerController {
    initial_viewport: ViewportState,
    transform: ViewportTransform,
    image_size: ImageSize,
    renderer: FractalRenderer,
    frame: Option<FrameData>,
    generation: u64,
}

impl ExplorerController {
    pub fn new(config: &MandelbrotConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(
            config.viewport()?,
            FractalRenderer::new(config.algorithm()?),
            config.image_size,
        ))
    }

    #[must_use]
    pub fn from_parts(viewport: ViewportState, renderer: FractalRenderer, image_size: ImageSize) -> Self {
        let mut transform = ViewportTransform::new(viewport);
        transform.state_mut().mark_dirty();

        Self {
            initial_viewport: viewport,
            transform,
            image_size,
            renderer,
            frame: None,
            generation: 0,
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.transform.begin_drag(x, y),
            InputEvent::PointerDrag { x, y } => self.transform.apply_drag(x, y),
            InputEvent::WheelScroll { delta, x, y } => {
                self.transform.apply_zoom(delta, x, y, self.image_size);
            }
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Returns the latest frame, rendering a new one first if the view is dirty.
    ///
    /// Returns `None` while the image size is empty.
    pub fn frame(&mut self) -> Option<&FrameData> {
        if self.image_size.is_empty() {
            return None;
        }

        if self.transform.state().is_dirty() {
            self.render_frame();
        }

        self.frame.as_ref()
    }

    /// The most recently rendered frame, without rendering.
    #[must_use]
    pub fn latest_frame(&self) -> Option<&FrameData> {
        self.frame.as_ref()
    }

    pub fn reset_view(&mut self) {
        debug!("resetting view");
        self.transform.replace_state(self.initial_viewport);
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        self.transform.state()
    }

    #[must_use]
    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.transform.state().is_dirty()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.renderer.max_iterations()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn resize(&mut self, width: u32, height: u32) {
        debug!("resize to {}x{}", width, height);
        self.image_size = ImageSize::new(width, height);
        self.transform.state_mut().mark_dirty();
    }

    fn render_frame(&mut self) {
        let viewport = *self.transform.state();
        let start = Instant::now();
        let grid = self.renderer.render(&viewport, self.image_size);
        let render_duration = start.elapsed();

        self.transform.state_mut().clear_dirty();
        self.generation += 1;

        debug!(
            "frame {} rendered in {:?}",
            self.generation, render_duration
        );

        self.frame = Some(FrameData {
            generation: self.generation,
            grid,
            render_duration,
        });
    }
}
