//! Interactive explorer: winit window, pixels framebuffer and an egui
//! status overlay.

pub mod gui_app;
pub mod keyboard;
pub mod ports;
pub mod status_panel;

pub use gui_app::run_gui;
