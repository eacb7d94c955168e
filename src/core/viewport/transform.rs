use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::viewport::drag::DragSession;
use crate::core::viewport::viewport_state::ViewportState;
use log::debug;

/// Turns pointer and wheel interactions into viewport updates.
#[derive(Debug, Clone, Default)]
pub struct ViewportTransform {
    state: ViewportState,
    drag: Option<DragSession>,
}

impl ViewportTransform {
    #[must_use]
    pub fn new(state: ViewportState) -> Self {
        Self { state, drag: None }
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewportState {
        &mut self.state
    }

    /// Replaces the mapping, keeping the view dirty so the next frame reflects it.
    pub fn replace_state(&mut self, state: ViewportState) {
        self.state = state;
        self.state.mark_dirty();
        self.drag = None;
    }

    #[must_use]
    pub fn pixel_to_plane(&self, pixel_x: f64, pixel_y: f64, size: ImageSize) -> Complex {
        self.state.pixel_to_plane(pixel_x, pixel_y, size)
    }

    pub fn apply_zoom(&mut self, wheel_delta: f64, pointer_x: f64, pointer_y: f64, size: ImageSize) {
        self.state.apply_zoom(wheel_delta, pointer_x, pointer_y, size);
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag = Some(DragSession::begin(x, y));
    }

    /// Pans by the pointer movement since the last drag step.
    ///
    /// A drag step with no preceding pointer-down only anchors the session.
    pub fn apply_drag(&mut self, x: f64, y: f64) {
        match self.drag.as_mut() {
            Some(session) => {
                let (dx, dy) = session.drag_to(x, y);
                self.state.apply_pan(dx, dy);
            }
            None => {
                debug!("drag at ({}, {}) without pointer-down, anchoring", x, y);
                self.drag = Some(DragSession::begin(x, y));
            }
        }
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_drag_keeps_plane_point_under_cursor() {
        let size = ImageSize::new(800, 600);
        let mut transform = ViewportTransform::default();
        let (x0, y0) = (100.0, 200.0);
        let (x1, y1) = (340.0, 95.0);
        let grabbed = transform.pixel_to_plane(x0, y0, size);

        transform.begin_drag(x0, y0);
        transform.apply_drag(x1, y1);

        let under_cursor = transform.pixel_to_plane(x1, y1, size);
        assert!((under_cursor.real - grabbed.real).abs() < TOLERANCE);
        assert!((under_cursor.imag - grabbed.imag).abs() < TOLERANCE);
    }

    #[test]
    fn test_multi_step_drag_follows_cursor() {
        let size = ImageSize::new(640, 480);
        let mut transform = ViewportTransform::default();
        transform.apply_zoom(-12.0, 50.0, 60.0, size);
        let grabbed = transform.pixel_to_plane(10.0, 10.0, size);

        transform.begin_drag(10.0, 10.0);
        for step in 1..=20 {
            let position = 10.0 + step as f64 * 7.5;
            transform.apply_drag(position, position / 2.0);
        }

        let under_cursor = transform.pixel_to_plane(160.0, 80.0, size);
        assert!((under_cursor.real - grabbed.real).abs() < TOLERANCE);
        assert!((under_cursor.imag - grabbed.imag).abs() < TOLERANCE);
    }

    #[test]
    fn test_drag_sets_dirty() {
        let mut transform = ViewportTransform::default();
        transform.state_mut().clear_dirty();

        transform.begin_drag(0.0, 0.0);
        assert!(!transform.state().is_dirty());

        transform.apply_drag(1.0, 0.0);
        assert!(transform.state().is_dirty());
    }

    #[test]
    fn test_drag_without_pointer_down_only_anchors() {
        let mut transform = ViewportTransform::default();
        let before = *transform.state();

        transform.apply_drag(50.0, 50.0);

        assert_eq!(*transform.state(), before);
        assert_eq!(transform.drag_session().map(|s| s.anchor()), Some((50.0, 50.0)));
    }

    #[test]
    fn test_new_pointer_down_reanchors() {
        let mut transform = ViewportTransform::default();

        transform.begin_drag(0.0, 0.0);
        transform.apply_drag(30.0, 0.0);
        let offset_after_first = transform.state().centre_offset();

        transform.begin_drag(500.0, 500.0);
        transform.apply_drag(500.0, 500.0);

        assert_eq!(transform.state().centre_offset(), offset_after_first);
    }

    #[test]
    fn test_replace_state_marks_dirty_and_ends_drag() {
        let mut transform = ViewportTransform::default();
        transform.begin_drag(1.0, 1.0);
        let mut state = ViewportState::default();
        state.clear_dirty();

        transform.replace_state(state);

        assert!(transform.state().is_dirty());
        assert!(transform.drag_session().is_none());
    }
}
