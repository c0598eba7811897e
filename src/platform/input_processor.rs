//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit window events into story InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent → InputBuffer
//
// State kept between events:
// - modifiers, from ModifiersChanged
// - cursor position in logical pixels, from CursorMoved
// - the window's scale factor, from ScaleFactorChanged
//
// Held keys are reported once; only typed text repeats.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::ElementState,
    event::{KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputProcessor ======================================================

/// Stateful Winit → InputEvent converter.
pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
    cursor: (f32, f32),
    scale_factor: f64,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
            cursor: (0.0, 0.0),
            scale_factor: 1.0,
        }
    }

    //--- Window State -----------------------------------------------------

    pub(crate) fn update_modifiers(&mut self, modifiers_state: ModifiersState) {
        self.current_modifiers = Modifiers::from(modifiers_state);
    }

    pub(crate) fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    //--- Keyboard ---------------------------------------------------------

    /// Converts a key press or release; unmapped keys and repeats yield `None`.
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        if key_event.repeat {
            return None;
        }

        let key_code = match key_event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            PhysicalKey::Unidentified(_) => return None,
        };

        if key_code == KeyCode::Unidentified {
            return None;
        }

        Some(self.key_input_event(key_code, key_event.state))
    }

    /// Extracts the text a key press produced, if any.
    pub(crate) fn process_text(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        Self::text_input_event(key_event.state, key_event.text.as_deref())
    }

    //--- Mouse ------------------------------------------------------------

    pub(crate) fn process_mouse_button(&self, button: WinitMouseButton, state: ElementState) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.current_modifiers;

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        }
    }

    /// Records a cursor move given in physical pixels.
    pub(crate) fn process_mouse_move(&mut self, physical_x: f64, physical_y: f64) -> InputEvent {
        self.cursor = (
            (physical_x / self.scale_factor) as f32,
            (physical_y / self.scale_factor) as f32,
        );
        self.cursor_event()
    }

    /// The last cursor position as an event, in logical pixels.
    pub(crate) fn cursor_event(&self) -> InputEvent {
        InputEvent::MouseMoved {
            x: self.cursor.0,
            y: self.cursor.1,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_input_event(&self, key: KeyCode, state: ElementState) -> InputEvent {
        let modifiers = self.current_modifiers;
        match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        }
    }

    fn text_input_event(state: ElementState, text: Option<&str>) -> Option<InputEvent> {
        if state != ElementState::Pressed {
            return None;
        }
        match text {
            Some(text) if !text.is_empty() => Some(InputEvent::Text(text.to_string())),
            _ => None,
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Winit already folds macOS Cmd into `control_key()`.
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Maps the keys the story binds. Numpad digits count as digits.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode as W;
        match code {
            //--- Digits -------------------------------------------------------
            W::Digit0 | W::Numpad0 => KeyCode::Digit0,
            W::Digit1 | W::Numpad1 => KeyCode::Digit1,
            W::Digit2 | W::Numpad2 => KeyCode::Digit2,
            W::Digit3 | W::Numpad3 => KeyCode::Digit3,
            W::Digit4 | W::Numpad4 => KeyCode::Digit4,
            W::Digit5 | W::Numpad5 => KeyCode::Digit5,
            W::Digit6 | W::Numpad6 => KeyCode::Digit6,
            W::Digit7 | W::Numpad7 => KeyCode::Digit7,
            W::Digit8 | W::Numpad8 => KeyCode::Digit8,
            W::Digit9 | W::Numpad9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------
            W::KeyA => KeyCode::KeyA,
            W::KeyB => KeyCode::KeyB,
            W::KeyC => KeyCode::KeyC,
            W::KeyD => KeyCode::KeyD,
            W::KeyE => KeyCode::KeyE,
            W::KeyF => KeyCode::KeyF,
            W::KeyG => KeyCode::KeyG,
            W::KeyH => KeyCode::KeyH,
            W::KeyI => KeyCode::KeyI,
            W::KeyJ => KeyCode::KeyJ,
            W::KeyK => KeyCode::KeyK,
            W::KeyL => KeyCode::KeyL,
            W::KeyM => KeyCode::KeyM,
            W::KeyN => KeyCode::KeyN,
            W::KeyO => KeyCode::KeyO,
            W::KeyP => KeyCode::KeyP,
            W::KeyQ => KeyCode::KeyQ,
            W::KeyR => KeyCode::KeyR,
            W::KeyS => KeyCode::KeyS,
            W::KeyT => KeyCode::KeyT,
            W::KeyU => KeyCode::KeyU,
            W::KeyV => KeyCode::KeyV,
            W::KeyW => KeyCode::KeyW,
            W::KeyX => KeyCode::KeyX,
            W::KeyY => KeyCode::KeyY,
            W::KeyZ => KeyCode::KeyZ,

            //--- Navigation ---------------------------------------------------
            W::ArrowUp => KeyCode::ArrowUp,
            W::ArrowDown => KeyCode::ArrowDown,
            W::ArrowLeft => KeyCode::ArrowLeft,
            W::ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------
            W::Space => KeyCode::Space,
            W::Enter | W::NumpadEnter => KeyCode::Enter,
            W::Escape => KeyCode::Escape,
            W::Tab => KeyCode::Tab,
            W::Backspace => KeyCode::Backspace,
            W::Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
