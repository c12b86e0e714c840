use egui::Context as EguiContext;
use winit::window::Window;

use crate::core::data::pixel_rect::PixelRect;

/// Window-backed surface the GUI draws frames and the egui overlay onto.
pub trait GuiPresenterPort: Sized {
    fn new(window: &'static Window) -> Result<Self, pixels::Error>;

    /// Uploads a rendered RGB frame and draws slider handles over it.
    fn draw_frame(&mut self, rgb: &[u8], slider_boxes: &[PixelRect]);

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
