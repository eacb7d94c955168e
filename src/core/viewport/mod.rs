pub mod drag;
pub mod transform;
pub mod viewport_state;
