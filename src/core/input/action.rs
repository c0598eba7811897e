//=========================================================================
// Action Trait & Scene Input
//=========================================================================
//
// Actions: opaque identifiers bound to keys/buttons and interpreted by
// scenes. SceneInput: everything a scene can receive in one frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for story-defined action enums.
///
/// # Example
///
/// ```
/// use aetheric_story::core::input::Action;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MenuAction { Confirm, Back }
///
/// impl Action for MenuAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== SceneInput ==========================================================

/// One unit of input delivered to the active scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneInput<A: Action> {
    /// A bound key or button was pressed.
    Action(A),

    /// Primary pointer pressed at a logical position (tap / click).
    Pointer { x: f32, y: f32 },

    /// Printable text typed by the user.
    Text(String),
}

impl<A: Action> SceneInput<A> {
    /// Returns the action, if this input is one.
    pub fn action(&self) -> Option<A> {
        match self {
            Self::Action(action) => Some(*action),
            _ => None,
        }
    }
}
