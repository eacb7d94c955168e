use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error};
use winit::{
    error::EventLoopError,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::interactive::{ExplorerController, InputEvent};
use crate::core::data::image_size::ImageSize;
use crate::input::gui::app::panel::{PanelStats, show_panel};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::{PointerTracker, releases_pointer};

/// A minimized window has nothing to draw into, so it never asks for a redraw.
#[must_use]
pub fn wants_redraw(dirty: bool, repaint_requested: bool, size: ImageSize) -> bool {
    !size.is_empty() && (dirty || repaint_requested)
}

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: ExplorerController,
    pointer: PointerTracker,
    repaint_requested: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        mut controller: ExplorerController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        // the surface size wins over the configured size
        controller.handle_event(InputEvent::Resize {
            width: size.width,
            height: size.height,
        });

        Self {
            window,
            presenter,
            controller,
            pointer: PointerTracker::default(),
            repaint_requested: true,
            egui_ctx,
            egui_state,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), EventLoopError> {
        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == self.window.id() => {
                let response = self.egui_state.on_window_event(self.window, event);
                if response.repaint {
                    self.repaint_requested = true;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = self.redraw() {
                            error!("render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = self.resize(size.width, size.height) {
                            error!("resize error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = self.window.inner_size();
                        if let Err(e) = self.resize(size.width, size.height) {
                            error!("resize error: {e}");
                            elwt.exit();
                        }
                    }
                    _ if response.consumed && !releases_pointer(event) => {}
                    _ => {
                        if let Some(input) = self.pointer.translate(event) {
                            self.controller.handle_event(input);
                        }
                    }
                }
            }
            Event::AboutToWait => {
                if wants_redraw(
                    self.controller.is_dirty(),
                    self.repaint_requested,
                    self.controller.image_size(),
                ) {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.controller.handle_event(InputEvent::Resize { width, height });

        if width == 0 || height == 0 {
            debug!("window minimized, deferring render");
            return Ok(());
        }

        self.presenter.resize(width, height)
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        self.repaint_requested = false;

        if let Some(frame) = self.controller.frame() {
            self.presenter.present_frame(frame);
        }

        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.repaint_requested = true;
        }

        if self.controller.image_size().is_empty() {
            return Ok(());
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let stats = PanelStats::from_controller(&self.controller);
        let mut reset_requested = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            reset_requested = show_panel(ctx, &stats);
        });

        if reset_requested {
            self.controller.reset_view();
        }

        output
    }
}
