//=========================================================================
// Birthday Story
//=========================================================================
//
// The story content: scene ids, player actions, mini-game models and
// the twelve scenes, plus `install()` which wires them into a set of
// `StorySystems`.
//
// Layout:
//   scene_id  ── SceneId, the closed scene graph
//   action    ── StoryAction, what keys mean
//   games     ── sequence puzzle, memory quest, countdown (pure models)
//   scenes    ── one Scene impl per SceneId
//
//=========================================================================

//=== Module Declarations =================================================

mod action;
pub mod games;
mod scene_id;
pub mod scenes;

#[cfg(test)]
mod tests;

//=== Public API ==========================================================

pub use action::StoryAction;
pub use scene_id::SceneId;

//=== Internal Dependencies ===============================================

use log::debug;

use crate::core::globals::StorySystems;
use crate::core::input::{KeyCode, MouseButton};
use scenes::{
    AdventureChoice, FixedTimelineRoom, Intro, JungleMemoryQuest, LateRoom, MainMessage, MakingOf,
    PyramidOfEmotions, RatingMessage, TimeTheory, TimeTravelGame, WishInteraction,
};

//=== Constants ===========================================================

/// Logical size of the story surface, shared by every pointer hit-test.
pub const SCENE_WIDTH: f32 = 800.0;
pub const SCENE_HEIGHT: f32 = 600.0;

//--- install() -----------------------------------------------------------
//
// Binds the story keys and registers every scene.
//
// Pointer input needs no binding: a left click always reaches the scene
// as `SceneInput::Pointer`. Digits 1..9 select numbered items.
//
pub fn install(systems: &mut StorySystems<SceneId, StoryAction>) {
    let input = &mut systems.input;
    input.bind_key(KeyCode::Enter, StoryAction::Continue);
    input.bind_key(KeyCode::KeyY, StoryAction::Accept);
    input.bind_key(KeyCode::KeyN, StoryAction::Decline);
    input.bind_key(KeyCode::KeyP, StoryAction::Plant);
    input.bind_key(KeyCode::Escape, StoryAction::Dismiss);
    input.bind_key(KeyCode::Backspace, StoryAction::Erase);
    input.bind_key(KeyCode::ArrowLeft, StoryAction::Previous);
    input.bind_key(KeyCode::ArrowRight, StoryAction::Next);
    for n in 1..=9u8 {
        if let Some(key) = KeyCode::digit(n) {
            input.bind_key(key, StoryAction::Select(n));
        }
    }
    // Right click dismisses overlays as well.
    input.bind_mouse(MouseButton::Right, StoryAction::Dismiss);

    let navigator = &mut systems.navigator;
    navigator.register_scene(SceneId::Intro, Intro::new);
    navigator.register_scene(SceneId::LateRoom, LateRoom::new);
    navigator.register_scene(SceneId::TimeTheory, TimeTheory::new);
    navigator.register_scene(SceneId::TimeTravelGame, TimeTravelGame::new);
    navigator.register_scene(SceneId::FixedTimelineRoom, FixedTimelineRoom::new);
    navigator.register_scene(SceneId::AdventureChoice, AdventureChoice::new);
    navigator.register_scene(SceneId::JungleMemoryQuest, JungleMemoryQuest::new);
    navigator.register_scene(SceneId::PyramidOfEmotions, PyramidOfEmotions::new);
    navigator.register_scene(SceneId::MainMessage, MainMessage::new);
    navigator.register_scene(SceneId::WishInteraction, WishInteraction::new);
    navigator.register_scene(SceneId::RatingMessage, RatingMessage::new);
    navigator.register_scene(SceneId::MakingOf, MakingOf::new);

    debug!(
        target: "story::navigator",
        "Story installed: {} bindings, {} scenes",
        systems.input.binding_count(),
        systems.navigator.registered_count()
    );
}
