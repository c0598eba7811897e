//=========================================================================
// Story Scenes
//=========================================================================
//
// One type per SceneId. Every scene keeps its own `Timers` and reaches
// the rest of the story only through the `SceneContext` it is handed.
//
//=========================================================================

//=== Module Declarations =================================================

mod adventure_choice;
mod fixed_timeline_room;
mod intro;
mod jungle_memory_quest;
mod late_room;
mod main_message;
mod making_of;
mod pyramid_of_emotions;
mod rating_message;
mod time_theory;
mod time_travel_game;
mod wish_interaction;

//=== Public API ==========================================================

pub use adventure_choice::AdventureChoice;
pub use fixed_timeline_room::FixedTimelineRoom;
pub use intro::Intro;
pub use jungle_memory_quest::JungleMemoryQuest;
pub use late_room::LateRoom;
pub use main_message::MainMessage;
pub use making_of::MakingOf;
pub use pyramid_of_emotions::PyramidOfEmotions;
pub use rating_message::RatingMessage;
pub use time_theory::TimeTheory;
pub use time_travel_game::TimeTravelGame;
pub use wish_interaction::WishInteraction;

//=== Shared Types ========================================================

use super::{SceneId, StoryAction};
use crate::core::globals::SceneContext;
use crate::core::input::SceneInput;

pub type StoryContext = SceneContext<SceneId>;
pub type StoryInput = SceneInput<StoryAction>;

/// Enter, or a click anywhere: the narrative scenes only have one button.
pub(crate) fn is_continue(input: &StoryInput) -> bool {
    matches!(input, StoryInput::Action(StoryAction::Continue) | StoryInput::Pointer { .. })
}

//=========================================================================
// Test Helpers
//=========================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{StoryContext, StoryInput};
    use crate::core::scene::Scene;
    use crate::story::{SceneId, StoryAction};

    const STEP: Duration = Duration::from_millis(10);

    pub(crate) fn context() -> StoryContext {
        StoryContext::new(StdRng::seed_from_u64(17))
    }

    /// Mounts `scene` on a fresh context.
    pub(crate) fn enter<S: Scene<SceneId, StoryAction>>(scene: &mut S) -> StoryContext {
        let mut ctx = context();
        scene.on_enter(&mut ctx);
        ctx
    }

    /// Advances `scene` by `total` in 10 ms frames.
    pub(crate) fn run_for<S: Scene<SceneId, StoryAction>>(scene: &mut S, ctx: &mut StoryContext, total: Duration) {
        let mut remaining = total;
        while !remaining.is_zero() {
            let dt = remaining.min(STEP);
            scene.update(dt, ctx);
            remaining -= dt;
        }
    }

    pub(crate) fn press<S: Scene<SceneId, StoryAction>>(scene: &mut S, ctx: &mut StoryContext, action: StoryAction) {
        scene.handle_input(&StoryInput::Action(action), ctx);
    }

    pub(crate) fn click<S: Scene<SceneId, StoryAction>>(scene: &mut S, ctx: &mut StoryContext, x: f32, y: f32) {
        scene.handle_input(&StoryInput::Pointer { x, y }, ctx);
    }

    pub(crate) fn type_text<S: Scene<SceneId, StoryAction>>(scene: &mut S, ctx: &mut StoryContext, text: &str) {
        scene.handle_input(&StoryInput::Text(text.to_string()), ctx);
    }

    /// Targets of the transitions the scene has queued so far (drains them).
    pub(crate) fn queued(ctx: &mut StoryContext) -> Vec<SceneId> {
        ctx.take_transitions().into_iter().map(|t| t.to).collect()
    }
}
