/// Pixel position captured at pointer-down and re-anchored on every drag step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragSession {
    anchor_x: f64,
    anchor_y: f64,
}

impl DragSession {
    #[must_use]
    pub fn begin(x: f64, y: f64) -> Self {
        Self {
            anchor_x: x,
            anchor_y: y,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> (f64, f64) {
        (self.anchor_x, self.anchor_y)
    }

    /// Returns the pointer delta since the last anchor and re-anchors at `(x, y)`.
    pub fn drag_to(&mut self, x: f64, y: f64) -> (f64, f64) {
        let delta = (x - self.anchor_x, y - self.anchor_y);
        self.anchor_x = x;
        self.anchor_y = y;
        delta
    }
}
