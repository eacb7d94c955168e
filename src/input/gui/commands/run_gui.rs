use std::error::Error;
use std::marker::PhantomData;

use log::info;
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::{Window, WindowBuilder}};

use crate::controllers::interactive::ExplorerController;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

pub const WINDOW_TITLE: &str = "Mandelbrot Set Viewer";

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self { presenter_factory, _phantom: PhantomData }
    }

    /// Opens the viewer window and blocks until it is closed.
    pub fn execute(&self, config: &MandelbrotConfig) -> Result<(), Box<dyn Error>> {
        let controller = ExplorerController::new(config)?;
        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window for its surface
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(
                    f64::from(config.image_size.width),
                    f64::from(config.image_size.height),
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        info!("opening {} at {:?}", WINDOW_TITLE, window.inner_size());

        let presenter: P = self.presenter_factory.build(window)?;
        let app = GuiApp::new(window, &event_loop, presenter, controller);

        app.run(event_loop)?;
        Ok(())
    }
}
