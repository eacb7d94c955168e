use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use log::{debug, trace};
use std::error::Error;
use std::fmt;

pub const DEFAULT_ZOOM: f64 = 150.0;
pub const DEFAULT_CENTRE_OFFSET: Complex = Complex {
    real: -3.0,
    imag: -1.5,
};
/// Each wheel notch scales the zoom by this factor.
pub const ZOOM_STEP_BASE: f64 = 1.05;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoom { zoom: f64 },
    InvalidCentreOffset { centre_offset: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be positive and finite: {}", zoom)
            }
            Self::InvalidCentreOffset { centre_offset } => {
                write!(
                    f,
                    "centre offset must be finite: ({}, {})",
                    centre_offset.real, centre_offset.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The pixel-to-plane mapping plus the flag that marks the last rendered grid as stale.
///
/// `zoom` is in pixels per plane unit and `centre_offset` is the plane point under the
/// image centre. Both are in plane units, so panning never has to be rescaled after a zoom.
///
/// At very large zoom values `1 / zoom` drops below the resolution of an `f64` around the
/// centre offset and neighbouring pixels collapse onto the same plane point; zooming further
/// then looks stuck or banded. That is a precision limit of the representation, not an error.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    zoom: f64,
    centre_offset: Complex,
    dirty: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            centre_offset: DEFAULT_CENTRE_OFFSET,
            dirty: true,
        }
    }
}

impl ViewportState {
    pub fn new(zoom: f64, centre_offset: Complex) -> Result<Self, ViewportError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        if !centre_offset.is_finite() {
            return Err(ViewportError::InvalidCentreOffset { centre_offset });
        }

        Ok(Self {
            zoom,
            centre_offset,
            dirty: true,
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn centre_offset(&self) -> Complex {
        self.centre_offset
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    #[must_use]
    pub fn pixel_to_plane(&self, pixel_x: f64, pixel_y: f64, size: ImageSize) -> Complex {
        pixel_to_complex_coords(pixel_x, pixel_y, size, self.zoom, self.centre_offset)
    }

    /// Zooms by `ZOOM_STEP_BASE ^ -wheel_delta`, keeping the plane point under the pointer fixed.
    ///
    /// Positive deltas (wheel rotated towards the user) zoom out. A step that would leave the
    /// zoom or the centre offset non-finite, or the zoom non-positive, is ignored.
    pub fn apply_zoom(&mut self, wheel_delta: f64, pointer_x: f64, pointer_y: f64, size: ImageSize) {
        let scale_factor = ZOOM_STEP_BASE.powf(-wheel_delta);
        let new_zoom = self.zoom * scale_factor;

        let (centre_x, centre_y) = size.centre();
        let relative_x = pointer_x - centre_x;
        let relative_y = pointer_y - centre_y;

        let new_offset = Complex::new(
            self.centre_offset.real + (relative_x / self.zoom - relative_x / new_zoom),
            self.centre_offset.imag + (relative_y / self.zoom - relative_y / new_zoom),
        );

        if !new_zoom.is_finite() || new_zoom <= 0.0 || !new_offset.is_finite() {
            debug!("ignoring zoom step {} at zoom {}", wheel_delta, self.zoom);
            return;
        }

        self.centre_offset = new_offset;
        self.zoom = new_zoom;
        self.dirty = true;

        trace!(
            "zoom {:.6} centre ({}, {})",
            self.zoom, self.centre_offset.real, self.centre_offset.imag
        );
    }

    /// Moves the view so that content follows a pointer that moved by `(dx, dy)` pixels.
    pub fn apply_pan(&mut self, dx: f64, dy: f64) {
        let new_offset = Complex::new(
            self.centre_offset.real - dx / self.zoom,
            self.centre_offset.imag - dy / self.zoom,
        );

        if !new_offset.is_finite() {
            debug!("ignoring pan by ({}, {}) at zoom {}", dx, dy, self.zoom);
            return;
        }

        self.centre_offset = new_offset;
        self.dirty = true;

        trace!(
            "pan by ({}, {}) centre ({}, {})",
            dx, dy, self.centre_offset.real, self.centre_offset.imag
        );
    }
}
