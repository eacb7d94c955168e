/// Pointer and window events in pixel space, origin top-left, y pointing down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerDrag { x: f64, y: f64 },
    /// Positive `delta` is wheel rotation towards the user and zooms out.
    WheelScroll { delta: f64, x: f64, y: f64 },
    Resize { width: u32, height: u32 },
}
