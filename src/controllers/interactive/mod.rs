//! Interactive controller for exploring the Mandelbrot set.
//!
//! The controller owns the viewport and the most recent frame. Shells translate their
//! native input into [`InputEvent`]s and ask for a frame whenever they are about to draw.

mod controller;
pub mod data;
pub mod events;

pub use controller::ExplorerController;
pub use data::frame_data::FrameData;
pub use events::input_event::InputEvent;
