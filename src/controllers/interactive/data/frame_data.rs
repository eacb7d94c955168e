use std::time::Duration;
use crate::core::data::colour_grid::ColourGrid;

/// A rendered grid stamped with the frame generation that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub generation: u64,
    pub grid: ColourGrid,
    pub render_duration: Duration,
}
