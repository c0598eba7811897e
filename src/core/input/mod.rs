//=========================================================================
// Input System
//
// Turns the raw input batches of a frame into scene inputs.
//
// Responsibilities:
// - Resolve key / mouse-button presses through the configured bindings
// - Track the pointer position so clicks become positioned taps
// - Forward printable text for the story's form scenes
//
// Notes:
// Owned by `StorySystems` and run on the core thread once per tick.
//
//=========================================================================

//=== Submodules ==========================================================

mod action;
mod action_mapper;
pub mod event;

//=== Public API ==========================================================

pub use action::{Action, SceneInput};
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== External Crates =====================================================

use log::trace;

//=== Internal Imports ====================================================

use action_mapper::ActionMapper;

//=== InputSystem =========================================================

/// Binds keys to actions and converts frame input into [`SceneInput`]s.
///
/// A left-button press always produces a [`SceneInput::Pointer`] at the
/// last known cursor position, followed by the bound action, if any.
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
    pointer: (f32, f32),
}

impl<A: Action> InputSystem<A> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
            pointer: (0.0, 0.0),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key (no modifiers) to an action.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        self.bind_key_with_mods(key, Modifiers::NONE, action);
    }

    /// Binds a key with an exact modifier combination to an action.
    pub fn bind_key_with_mods(&mut self, key: KeyCode, modifiers: Modifiers, action: A) {
        if let Some(previous) = self.mapper.bind_key(key, modifiers, action) {
            trace!(target: "core::input", "Rebound {:?}: {:?} -> {:?}", key, previous, action);
        }
    }

    /// Binds a mouse button (no modifiers) to an action.
    pub fn bind_mouse(&mut self, button: MouseButton, action: A) {
        self.mapper.bind_mouse(button, Modifiers::NONE, action);
    }

    /// Removes every binding of `key`.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.mapper.unbind_key(key);
    }

    /// Number of key and mouse bindings.
    pub fn binding_count(&self) -> usize {
        self.mapper.binding_count()
    }

    //--- Frame Processing -------------------------------------------------

    /// Converts the frame's input batches into scene inputs, in order.
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) -> Vec<SceneInput<A>> {
        let mut inputs = Vec::new();

        for event in batches.iter().flatten() {
            match event {
                InputEvent::KeyDown { key, modifiers } => {
                    if let Some(action) = self.mapper.resolve_key(*key, *modifiers) {
                        inputs.push(SceneInput::Action(action));
                    }
                }
                InputEvent::MouseButtonDown { button, modifiers } => {
                    if *button == MouseButton::Left {
                        let (x, y) = self.pointer;
                        inputs.push(SceneInput::Pointer { x, y });
                    }
                    if let Some(action) = self.mapper.resolve_mouse(*button, *modifiers) {
                        inputs.push(SceneInput::Action(action));
                    }
                }
                InputEvent::MouseMoved { x, y } => {
                    self.pointer = (*x, *y);
                }
                InputEvent::Text(text) => {
                    let printable: String = text.chars().filter(|c| !c.is_control()).collect();
                    if !printable.is_empty() {
                        inputs.push(SceneInput::Text(printable));
                    }
                }
                InputEvent::KeyUp { .. }
                | InputEvent::MouseButtonUp { .. }
                | InputEvent::Unidentified => {}
            }
        }

        inputs
    }

    //--- Query Methods ----------------------------------------------------

    /// Last known pointer position in logical pixels.
    pub fn pointer_position(&self) -> (f32, f32) {
        self.pointer
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
