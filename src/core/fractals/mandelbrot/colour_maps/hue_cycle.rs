use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::EscapeOutcome;
use crate::core::util::hsb_to_rgb::hsb_to_rgb;

pub const DEFAULT_HUE_OFFSET: f32 = 0.7;

/// Colours escaped points by cycling the hue with the escape iteration; bounded points are black.
///
/// `hue = 0.7 + n / max_iterations`, wrapped into `0.0..1.0`, at full saturation and brightness.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HueCycleColourMap {
    max_iterations: u32,
    hue_offset: f32,
}

impl ColourMap<EscapeOutcome> for HueCycleColourMap {
    fn map(&self, outcome: EscapeOutcome) -> Colour {
        match outcome {
            EscapeOutcome::Escaped(iterations) => {
                let hue = self.hue_offset + iterations as f32 / self.max_iterations as f32;
                hsb_to_rgb(hue, 1.0, 1.0)
            }
            EscapeOutcome::Bounded(_) => Colour::BLACK,
        }
    }

    fn display_name(&self) -> &str {
        "Hue cycle"
    }
}

impl HueCycleColourMap {
    /// `max_iterations` must be non-zero; it comes from a validated `MandelbrotAlgorithm`.
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            hue_offset: DEFAULT_HUE_OFFSET,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
