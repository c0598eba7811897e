//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps raw key and mouse-button presses to story actions.
//
// Architecture:
//   (key/button, modifiers) → HashMap → Action
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::Action,
    event::{KeyCode, Modifiers, MouseButton},
};

//=== ActionMapper ========================================================

/// Resolves (key/button, modifiers) pairs to actions. Modifiers must
/// match exactly.
pub(crate) struct ActionMapper<A: Action> {
    key_bindings: HashMap<(KeyCode, Modifiers), A>,
    mouse_bindings: HashMap<(MouseButton, Modifiers), A>,
}

impl<A: Action> ActionMapper<A> {
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
            mouse_bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key with modifiers. Returns the action it replaced, if any.
    pub(crate) fn bind_key(&mut self, key: KeyCode, modifiers: Modifiers, action: A) -> Option<A> {
        self.key_bindings.insert((key, modifiers), action)
    }

    /// Binds a mouse button with modifiers. Returns the replaced action.
    pub(crate) fn bind_mouse(
        &mut self,
        button: MouseButton,
        modifiers: Modifiers,
        action: A,
    ) -> Option<A> {
        self.mouse_bindings.insert((button, modifiers), action)
    }

    /// Removes every binding of `key`, whatever its modifiers.
    pub(crate) fn unbind_key(&mut self, key: KeyCode) {
        self.key_bindings.retain(|&(k, _), _| k != key);
    }

    //--- Resolution -------------------------------------------------------

    pub(crate) fn resolve_key(&self, key: KeyCode, modifiers: Modifiers) -> Option<A> {
        self.key_bindings.get(&(key, modifiers)).copied()
    }

    pub(crate) fn resolve_mouse(&self, button: MouseButton, modifiers: Modifiers) -> Option<A> {
        self.mouse_bindings.get(&(button, modifiers)).copied()
    }

    pub(crate) fn binding_count(&self) -> usize {
        self.key_bindings.len() + self.mouse_bindings.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Confirm,
        Cancel,
    }

    impl Action for TestAction {}

    #[test]
    fn resolves_exact_modifier_match_only() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Enter, Modifiers::NONE, TestAction::Confirm);

        assert_eq!(mapper.resolve_key(KeyCode::Enter, Modifiers::NONE), Some(TestAction::Confirm));
        assert_eq!(mapper.resolve_key(KeyCode::Enter, Modifiers::SHIFT), None);
    }

    #[test]
    fn rebinding_returns_previous_action() {
        let mut mapper = ActionMapper::new();
        assert_eq!(mapper.bind_key(KeyCode::Escape, Modifiers::NONE, TestAction::Confirm), None);
        assert_eq!(
            mapper.bind_key(KeyCode::Escape, Modifiers::NONE, TestAction::Cancel),
            Some(TestAction::Confirm)
        );
        assert_eq!(mapper.binding_count(), 1);
    }

    #[test]
    fn unbind_key_removes_all_modifier_variants() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyN, Modifiers::NONE, TestAction::Cancel);
        mapper.bind_key(KeyCode::KeyN, Modifiers::CTRL, TestAction::Cancel);
        mapper.bind_key(KeyCode::KeyY, Modifiers::NONE, TestAction::Confirm);

        mapper.unbind_key(KeyCode::KeyN);

        assert_eq!(mapper.resolve_key(KeyCode::KeyN, Modifiers::NONE), None);
        assert_eq!(mapper.resolve_key(KeyCode::KeyN, Modifiers::CTRL), None);
        assert_eq!(mapper.binding_count(), 1);
    }

    #[test]
    fn mouse_bindings_are_separate_from_keys() {
        let mut mapper = ActionMapper::new();
        mapper.bind_mouse(MouseButton::Right, Modifiers::NONE, TestAction::Cancel);

        assert_eq!(
            mapper.resolve_mouse(MouseButton::Right, Modifiers::NONE),
            Some(TestAction::Cancel)
        );
        assert_eq!(mapper.resolve_mouse(MouseButton::Left, Modifiers::NONE), None);
    }
}
