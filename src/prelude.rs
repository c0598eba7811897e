//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_story::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Systems, context and runtime
pub use crate::core::globals::{SceneContext, StorySystems};
pub use crate::core::runtime::StoryRuntime;

// Input system
pub use crate::core::input::{Action, KeyCode, Modifiers, MouseButton, SceneInput};

// Scene system
pub use crate::core::scene::{Navigator, Scene, SceneKey, SceneTransition};

// State, timers, errors
pub use crate::core::error::StoryError;
pub use crate::core::store::StoryStore;
pub use crate::core::timer::Timers;

// Story content
pub use crate::story::{SceneId, StoryAction};
