use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::controllers::engine::frame_deltas::FrameDeltas;

/// Held-key state, sampled once per frame into [`FrameDeltas`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardState {
    w_held: bool,
    a_held: bool,
    s_held: bool,
    d_held: bool,
    equals_held: bool,
    minus_held: bool,
    q_held: bool,
    e_held: bool,
    z_held: bool,
    x_held: bool,
    c_held: bool,
    v_held: bool,
    shift_held: bool,
    escape_pressed: bool,
}

fn axis(positive: bool, negative: bool) -> i32 {
    i32::from(positive) - i32::from(negative)
}

impl KeyboardState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::KeyW => self.w_held = pressed,
            KeyCode::KeyA => self.a_held = pressed,
            KeyCode::KeyS => self.s_held = pressed,
            KeyCode::KeyD => self.d_held = pressed,
            KeyCode::Equal => self.equals_held = pressed,
            KeyCode::Minus => self.minus_held = pressed,
            KeyCode::KeyQ => self.q_held = pressed,
            KeyCode::KeyE => self.e_held = pressed,
            KeyCode::KeyZ => self.z_held = pressed,
            KeyCode::KeyX => self.x_held = pressed,
            KeyCode::KeyC => self.c_held = pressed,
            KeyCode::KeyV => self.v_held = pressed,
            KeyCode::ShiftLeft => self.shift_held = pressed,
            KeyCode::Escape if pressed => self.escape_pressed = true,
            _ => {}
        }
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.escape_pressed
    }

    /// Opposite keys held together cancel out. Suppressed while egui owns
    /// the keyboard.
    #[must_use]
    pub fn deltas(&self, text_editing: bool) -> FrameDeltas {
        if text_editing {
            return FrameDeltas::default();
        }

        FrameDeltas {
            pan_x: axis(self.d_held, self.a_held),
            pan_y: axis(self.s_held, self.w_held),
            zoom_steps: axis(self.equals_held, self.minus_held),
            iteration_steps: axis(self.e_held, self.q_held),
            infinity_steps: axis(self.z_held, self.x_held),
            zero_steps: axis(self.c_held, self.v_held),
            turbo: self.shift_held,
        }
    }

    /// Drops held keys, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        *self = Self {
            escape_pressed: self.escape_pressed,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_keys_map_to_axes() {
        let mut keyboard = KeyboardState::default();

        for key in [
            KeyCode::KeyD,
            KeyCode::KeyW,
            KeyCode::Equal,
            KeyCode::KeyQ,
            KeyCode::KeyZ,
            KeyCode::KeyV,
            KeyCode::ShiftLeft,
        ] {
            keyboard.handle_key_event(key, ElementState::Pressed);
        }

        assert_eq!(
            keyboard.deltas(false),
            FrameDeltas {
                pan_x: 1,
                pan_y: -1,
                zoom_steps: 1,
                iteration_steps: -1,
                infinity_steps: 1,
                zero_steps: -1,
                turbo: true,
            }
        );
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut keyboard = KeyboardState::default();
        keyboard.handle_key_event(KeyCode::KeyA, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::KeyD, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::KeyC, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::KeyV, ElementState::Pressed);

        assert!(keyboard.deltas(false).is_idle());
    }

    #[test]
    fn release_clears_axis() {
        let mut keyboard = KeyboardState::default();
        keyboard.handle_key_event(KeyCode::KeyE, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::KeyE, ElementState::Released);

        assert_eq!(keyboard.deltas(false), FrameDeltas::default());
    }

    #[test]
    fn text_editing_suppresses_deltas() {
        let mut keyboard = KeyboardState::default();
        keyboard.handle_key_event(KeyCode::KeyS, ElementState::Pressed);

        assert_eq!(keyboard.deltas(true), FrameDeltas::default());
        assert_eq!(keyboard.deltas(false).pan_y, 1);
    }

    #[test]
    fn escape_latches_quit() {
        let mut keyboard = KeyboardState::default();
        assert!(!keyboard.quit_requested());

        keyboard.handle_key_event(KeyCode::Escape, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::Escape, ElementState::Released);
        keyboard.reset();

        assert!(keyboard.quit_requested());
    }

    #[test]
    fn reset_releases_held_keys() {
        let mut keyboard = KeyboardState::default();
        keyboard.handle_key_event(KeyCode::KeyW, ElementState::Pressed);
        keyboard.handle_key_event(KeyCode::ShiftLeft, ElementState::Pressed);

        keyboard.reset();

        assert_eq!(keyboard.deltas(false), FrameDeltas::default());
    }
}
