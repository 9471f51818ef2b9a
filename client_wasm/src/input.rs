//! Pointer input handling

use web_sys::MouseEvent;

/// Map a mouse event to surface coordinates. The canvas is viewport-sized
/// and fixed at the origin, so client coordinates are surface coordinates.
pub fn pointer_position(event: &MouseEvent) -> (f32, f32) {
    (event.client_x() as f32, event.client_y() as f32)
}
