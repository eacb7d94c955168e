use egui::Context as EguiContext;

use crate::controllers::interactive::FrameData;

pub trait GuiPresenterPort {
    /// Copies `frame` into the framebuffer if it is newer than what is shown and fits the surface.
    fn present_frame(&mut self, frame: &FrameData);
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
