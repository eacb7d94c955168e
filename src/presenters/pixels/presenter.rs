use crate::controllers::interactive::FrameData;
use crate::core::data::image_size::ImageSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::rgba::{clear_rgba, copy_grid_to_rgba};
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::trace;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

/// Whether a frame should replace what the surface currently shows.
#[must_use]
pub fn accepts_frame(last_presented_generation: u64, surface: ImageSize, frame: &FrameData) -> bool {
    frame.generation > last_presented_generation && frame.grid.size() == surface
}

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    size: ImageSize,
    has_frame: bool,
    last_presented_generation: u64,
}

impl GuiPresenterPort for PixelsPresenter {
    fn present_frame(&mut self, frame: &FrameData) {
        if !accepts_frame(self.last_presented_generation, self.size, frame) {
            trace!("skipping frame {}", frame.generation);
            return;
        }

        if copy_grid_to_rgba(&frame.grid, self.pixels.frame_mut()) {
            self.has_frame = true;
            self.last_presented_generation = frame.generation;
        }
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.size.is_empty() {
            return Ok(());
        }

        if !self.has_frame {
            clear_rgba(self.pixels.frame_mut());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.size.width, self.size.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // egui goes on top of the fractal, so keep what the scaling pass drew
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        self.size = ImageSize::new(width, height);
        self.has_frame = false;

        Ok(())
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            size: ImageSize::new(size.width, size.height),
            has_frame: false,
            last_presented_generation: 0,
        })
    }
}
