//=========================================================================
// Global Story State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   StorySystems: InputSystem + Navigator (owned by the runtime)
//   SceneContext: StoryStore + TransitionQueue + StdRng (passed to scenes)
//
//=========================================================================

//=== Module Declarations =================================================

mod scene_context;
mod story_systems;

//=== Public API ==========================================================

pub use scene_context::SceneContext;
pub use story_systems::StorySystems;
