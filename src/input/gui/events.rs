use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::controllers::interactive::InputEvent;

/// Pixels of trackpad scroll that count as one wheel line.
pub const PIXELS_PER_LINE: f64 = 50.0;

/// Converts a winit wheel delta into wheel rotation, positive towards the user.
///
/// Winit reports scrolling up as a positive `y`, so the sign flips and scrolling up zooms in.
#[must_use]
pub fn wheel_rotation(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -f64::from(y),
        MouseScrollDelta::PixelDelta(position) => -position.y / PIXELS_PER_LINE,
    }
}

/// Events that end a drag; they reach the tracker even when egui consumes them.
#[must_use]
pub fn releases_pointer(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::MouseInput {
            state: ElementState::Released,
            button: MouseButton::Left,
            ..
        } | WindowEvent::CursorLeft { .. }
    )
}

/// Tracks the cursor and left button so window events can become [`InputEvent`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerTracker {
    position: (f64, f64),
    left_held: bool,
}

impl PointerTracker {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(position.x, position.y),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::MouseWheel { delta, .. } => Some(self.wheel(*delta)),
            WindowEvent::CursorLeft { .. } => {
                self.left_held = false;
                None
            }
            _ => None,
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<InputEvent> {
        self.position = (x, y);
        self.left_held.then_some(InputEvent::PointerDrag { x, y })
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => {
                self.left_held = true;
                let (x, y) = self.position;
                Some(InputEvent::PointerDown { x, y })
            }
            ElementState::Released => {
                self.left_held = false;
                None
            }
        }
    }

    #[must_use]
    pub fn wheel(&self, delta: MouseScrollDelta) -> InputEvent {
        let (x, y) = self.position;
        InputEvent::WheelScroll {
            delta: wheel_rotation(delta),
            x,
            y,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.left_held
    }
}
