use std::collections::HashSet;

use super::types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerClick,
    PointerMoveEvent,
};

/// Current input state for a single window.
///
/// Holds "is down" information and the current pointer position, and turns
/// press/release pairs into [`PointerClick`]s.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event.
    ///
    /// Returns a click when `ev` releases a button that was pressed inside the
    /// window and the pointer is still inside.
    pub fn apply_event(&mut self, ev: &InputEvent) -> Option<PointerClick> {
        match ev {
            InputEvent::Focused(focused) => {
                if !*focused {
                    // Avoids stuck buttons when focus changes mid-press.
                    self.buttons_down.clear();
                }
                None
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
                None
            }

            InputEvent::PointerLeft => {
                // A press that leaves the surface never completes a click.
                self.pointer_pos = None;
                self.buttons_down.clear();
                None
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                        None
                    }
                    MouseButtonState::Released => {
                        let was_down = self.buttons_down.remove(button);
                        was_down.then_some(PointerClick {
                            button: *button,
                            x: *x,
                            y: *y,
                        })
                    }
                }
            }
        }
    }
}
