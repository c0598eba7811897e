//=========================================================================
// Aetheric Story: Library Root
//
// A scene-driven birthday story on a small fixed-tick engine.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the story core (navigator, store, timers, input) so the
//   story can be driven headlessly through `StoryRuntime`
// - Expose the story content itself (`story`)
// - Keep the winit platform layer private
//
// Typical usage:
// ```no_run
// use aetheric_story::prelude::*;
//
// EngineBuilder::<SceneId, StoryAction>::new()
//     .build()
//     .init(aetheric_story::story::install)
//     .run();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the story-agnostic machinery: scene navigation, the
// story store, scene timers, input mapping and the runtime that ties
// them together on the logic thread.
//
// `story` is the content: scene ids, actions, mini-games and scenes.
//
pub mod core;
pub mod prelude;
pub mod story;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and the winit event loop.
// `engine` wires platform and core threads together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
