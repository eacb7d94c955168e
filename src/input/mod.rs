//! Input adapters for the viewer.
//!
//! Each adapter receives input from one source and turns it into controller calls.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
