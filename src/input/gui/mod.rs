//! GUI input adapter for interactive exploration.
//!
//! A winit window with a pixels framebuffer and an egui overlay panel.

pub mod app;
pub mod commands;
pub mod events;

pub use commands::run_gui::RunGuiCommand;
