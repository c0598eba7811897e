//=========================================================================
// Story Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains the systems that turn input into scene inputs and drive the
// mounted scene. Systems operate on SceneContext data.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::SceneContext;
use crate::core::input::{Action, InputEvent, InputSystem};
use crate::core::scene::{Navigator, SceneKey};

//=== StorySystems ========================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `input`: Key bindings and raw input to scene input conversion
/// - `navigator`: Scene registration and single-slot scene switching
pub struct StorySystems<S: SceneKey, A: Action> {
    /// Resolves raw input through the configured bindings.
    pub input: InputSystem<A>,

    /// Mounts, updates and replaces scenes.
    pub navigator: Navigator<S, A>,
}

impl<S: SceneKey, A: Action> StorySystems<S, A> {
    /// Creates a systems container with no bindings and no scenes.
    pub fn new() -> Self {
        Self {
            input: InputSystem::new(),
            navigator: Navigator::new(),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input Processing**: Raw batches become scene inputs
    /// 2. **Input Dispatch**: The mounted scene handles each input
    /// 3. **Transitions**: Requests made while handling input are applied
    /// 4. **Scene Update**: The (possibly new) scene advances by `dt`
    /// 5. **Transitions**: Requests made by timers are applied
    pub fn update(&mut self, context: &mut SceneContext<S>, batches: &[Vec<InputEvent>], dt: Duration) {
        let inputs = self.input.process_frame(batches);
        self.navigator.handle_input(&inputs, context);
        self.navigator.process_transitions(context);

        self.navigator.update(dt, context);
        self.navigator.process_transitions(context);
    }
}

impl<S: SceneKey, A: Action> Default for StorySystems<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
