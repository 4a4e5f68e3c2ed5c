use egui::PointerButton;

use super::InputEvent;
use crate::state::Editor;
use crate::surface::Surface;

/// Routes a canvas input event to the editor.
///
/// Only the primary button draws. Presses outside the canvas, or while the
/// canvas is blocked by a modal popup, never start a drag; releases are always
/// delivered so a drag that left the canvas still finishes.
pub fn route_event<S: Surface>(event: &InputEvent, editor: &mut Editor<S>, blocked: bool) {
    match event {
        InputEvent::PointerDown {
            location,
            button: PointerButton::Primary,
        } => {
            if event.is_in_canvas() && !blocked {
                editor.on_pointer_down(location.position);
            }
        }
        InputEvent::PointerUp {
            location,
            button: PointerButton::Primary,
        } => editor.on_pointer_up(location.position),
        InputEvent::PointerMove { location, .. } => {
            if editor.state().is_dragging() {
                editor.on_pointer_move(location.position);
            } else if blocked {
                editor.on_pointer_leave();
            } else {
                editor.on_hover(location.position);
            }
        }
        InputEvent::PointerLeave => editor.on_pointer_leave(),
        InputEvent::PointerDown { .. } | InputEvent::PointerUp { .. } => {}
    }
}
