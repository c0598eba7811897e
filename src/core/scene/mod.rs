//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle and single-slot scene switching.
//
// Architecture:
//   Navigator
//     ├─ factories: HashMap<S, SceneFactory>
//     └─ active: Option<(S, Box<dyn Scene>)>
//
// Flow:
//   handle_input() / update() → Scene queues transition on SceneContext
//   process_transitions() → on_exit + drop old → mount + on_enter new
//
// Scenes are built fresh on every mount and dropped on unmount, so all
// scene-local state (puzzle progress, timers) dies with the scene.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::globals::SceneContext;
use crate::core::input::{Action, SceneInput};

//=== Module Declarations =================================================

mod navigator;
mod transition_queue;

//=== Public API ==========================================================

pub use navigator::{Navigator, SceneKey};
pub use transition_queue::{SceneTransition, TransitionQueue};

//=== Scene Trait =========================================================

/// Behaviour of one full-screen story scene.
///
/// Only `update()` and `status()` are required:
///
/// ```rust
/// # use std::time::Duration;
/// # use aetheric_story::prelude::*;
/// struct Credits;
///
/// impl Scene<SceneId, StoryAction> for Credits {
///     fn update(&mut self, _dt: Duration, _ctx: &mut SceneContext<SceneId>) {}
///
///     fn status(&self) -> String {
///         "Credits".to_string()
///     }
/// }
/// ```
pub trait Scene<S: SceneKey, A: Action>: Send {
    /// Called right after the scene is mounted. Start timers here.
    fn on_enter(&mut self, _ctx: &mut SceneContext<S>) {}

    /// Called right before the scene is dropped.
    fn on_exit(&mut self, _ctx: &mut SceneContext<S>) {}

    /// Called for each input the player produced this frame.
    fn handle_input(&mut self, _input: &SceneInput<A>, _ctx: &mut SceneContext<S>) {}

    /// Called every tick with the elapsed wall-clock time.
    fn update(&mut self, dt: Duration, ctx: &mut SceneContext<S>);

    /// One-line description of what is on screen, for the presentation layer.
    fn status(&self) -> String;
}
