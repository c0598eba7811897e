//=========================================================================
// Story Runtime
//=========================================================================
//
// Systems plus context, driven one frame at a time.
//
// Architecture:
//   StoryRuntime
//     ├─ StorySystems (input bindings + navigator)
//     └─ SceneContext (store + transition queue + rng)
//
// The core thread owns one runtime and feeds it real input and wall-clock
// deltas. Tests drive the same runtime headlessly with synthetic ones.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use rand::rngs::StdRng;

//=== Internal Dependencies ===============================================

use crate::core::error::Result;
use crate::core::globals::{SceneContext, StorySystems};
use crate::core::input::{Action, InputEvent, SceneInput};
use crate::core::scene::SceneKey;
use crate::core::store::StoryStore;

//=== StoryRuntime ========================================================

/// A running story: configured systems and their shared context.
pub struct StoryRuntime<S: SceneKey, A: Action> {
    systems: StorySystems<S, A>,
    context: SceneContext<S>,
}

impl<S: SceneKey, A: Action> StoryRuntime<S, A> {
    pub fn new(systems: StorySystems<S, A>, rng: StdRng) -> Self {
        Self {
            systems,
            context: SceneContext::new(rng),
        }
    }

    /// Mounts the initial scene.
    pub fn start(&mut self) {
        self.systems.navigator.start(&mut self.context);
    }

    //--- Driving ----------------------------------------------------------

    /// Runs one frame with raw platform input.
    pub fn frame(&mut self, batches: &[Vec<InputEvent>], dt: Duration) {
        self.systems.update(&mut self.context, batches, dt);
    }

    /// Delivers already-resolved scene inputs, then applies their transitions.
    pub fn dispatch(&mut self, inputs: &[SceneInput<A>]) {
        self.systems.navigator.handle_input(inputs, &mut self.context);
        self.systems.navigator.process_transitions(&mut self.context);
    }

    /// Advances time by `total` in steps of at most `step`.
    pub fn advance(&mut self, total: Duration, step: Duration) {
        assert!(!step.is_zero(), "Advance step must be positive");

        let mut remaining = total;
        while !remaining.is_zero() {
            let dt = remaining.min(step);
            self.frame(&[], dt);
            remaining -= dt;
        }
    }

    //--- Navigation -------------------------------------------------------

    /// Jumps straight to `target`, bypassing the transition queue.
    ///
    /// # Errors
    ///
    /// See [`crate::core::scene::Navigator::transition_to`].
    pub fn transition_to(&mut self, target: S) -> Result<()> {
        self.systems.navigator.transition_to(target, &mut self.context)
    }

    /// Jumps to the scene named `name`.
    ///
    /// # Errors
    ///
    /// See [`crate::core::scene::Navigator::transition_to_named`].
    pub fn transition_to_named(&mut self, name: &str) -> Result<()> {
        self.systems.navigator.transition_to_named(name, &mut self.context)
    }

    //--- Queries ----------------------------------------------------------

    pub fn current_scene(&self) -> S {
        self.systems.navigator.current_scene(&self.context)
    }

    /// Status line of the mounted scene, or the scene name if none is mounted.
    pub fn status(&self) -> String {
        self.systems
            .navigator
            .status()
            .unwrap_or_else(|| self.current_scene().name().to_string())
    }

    pub fn store(&self) -> &StoryStore<S> {
        self.context.store()
    }
}
