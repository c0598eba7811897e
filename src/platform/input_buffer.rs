//=========================================================================
// Input Buffer
//
// Holds one frame of platform input until the redraw boundary.
//
// Responsibilities:
// - Keep discrete input (keys, buttons, text) in arrival order
// - Drop repeated identical key and button events
// - Coalesce continuous input (cursor motion) to its latest value
//
// Notes:
// Text is never deduplicated: typing "ee" is two events.
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::event::InputEvent;

//=== InputBuffer Struct ==================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Inserts or replaces a continuous input; the latest one wins.
    pub fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Appends a discrete input, skipping an immediate duplicate.
    pub fn push_discrete(&mut self, event: InputEvent) {
        let duplicate = !matches!(event, InputEvent::Text(_)) && self.discrete.last() == Some(&event);
        if !duplicate {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Takes this frame's events as `(discrete, continuous)`, or `None` if
    /// nothing arrived.
    pub fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }
        let discrete = std::mem::take(&mut self.discrete);
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    pub fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{KeyCode, Modifiers};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn consecutive_duplicate_keys_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::Enter));
        buffer.push_discrete(key_down(KeyCode::Enter));
        buffer.push_discrete(key_down(KeyCode::KeyY));

        let (discrete, _) = buffer.drain().unwrap();
        assert_eq!(discrete.len(), 2, "Duplicates should be ignored");
    }

    #[test]
    fn repeated_text_is_kept() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(InputEvent::Text("e".into()));
        buffer.push_discrete(InputEvent::Text("e".into()));

        let (discrete, _) = buffer.drain().unwrap();
        assert_eq!(discrete.len(), 2);
    }

    #[test]
    fn cursor_motion_coalesces_to_latest() {
        let mut buffer = InputBuffer::new();
        buffer.push_continuous(InputEvent::MouseMoved { x: 10.0, y: 10.0 });
        buffer.push_continuous(InputEvent::MouseMoved { x: 20.0, y: 30.0 });

        let (_, continuous) = buffer.drain().unwrap();
        assert_eq!(continuous.len(), 1);
        match continuous[0] {
            InputEvent::MouseMoved { x, y } => assert_eq!((x, y), (20.0, 30.0)),
            ref other => panic!("Expected MouseMoved, found {:?}", other),
        }
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::KeyP));
        buffer.push_continuous(InputEvent::MouseMoved { x: 5.0, y: 5.0 });

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none(), "Empty buffer drains to None");
    }
}
