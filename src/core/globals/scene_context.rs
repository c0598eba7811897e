//=========================================================================
// Scene Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - store: Current scene plus user-entered story data
// - transitions: Command queue for scene changes
// - rng: Random source for scatter and spawn positions
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::rngs::StdRng;

//=== Internal Dependencies ===============================================

use crate::core::scene::{SceneKey, SceneTransition, TransitionQueue};
use crate::core::store::StoryStore;

//=== SceneContext ========================================================

/// Shared context data handed to scenes during their lifecycle methods.
///
/// This separates scene-accessible data from the systems that drive
/// scenes. The context outlives every scene; scenes hold nothing of it.
pub struct SceneContext<S: SceneKey> {
    store: StoryStore<S>,
    transitions: TransitionQueue<S>,
    rng: StdRng,
}

impl<S: SceneKey> SceneContext<S> {
    /// Creates a context on the initial scene with the given random source.
    pub fn new(rng: StdRng) -> Self {
        Self {
            store: StoryStore::new(),
            transitions: TransitionQueue::new(),
            rng,
        }
    }

    //--- Store Access -----------------------------------------------------

    pub fn store(&self) -> &StoryStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StoryStore<S> {
        &mut self.store
    }

    //--- Transitions ------------------------------------------------------

    /// Requests a move to `target` at the next tick boundary.
    ///
    /// The request is tagged with the scene that is current now. If that
    /// scene is gone by the time the queue is drained, it is dropped.
    pub fn transition_to(&mut self, target: S) {
        let from = self.store.current_scene();
        self.transitions.push(SceneTransition { from, to: target });
    }

    /// Number of transitions waiting for the next boundary.
    pub fn pending_transitions(&self) -> usize {
        self.transitions.len()
    }

    pub(crate) fn take_transitions(&mut self) -> Vec<SceneTransition<S>> {
        self.transitions.take()
    }

    //--- Randomness -------------------------------------------------------

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    enum TestScene {
        #[default]
        Hall,
        Garden,
    }

    impl SceneKey for TestScene {
        fn name(&self) -> &'static str {
            match self {
                Self::Hall => "hall",
                Self::Garden => "garden",
            }
        }

        fn from_name(name: &str) -> Option<Self> {
            match name {
                "hall" => Some(Self::Hall),
                "garden" => Some(Self::Garden),
                _ => None,
            }
        }
    }

    #[test]
    fn transition_request_is_tagged_with_current_scene() {
        let mut ctx: SceneContext<TestScene> = SceneContext::new(StdRng::seed_from_u64(1));

        ctx.transition_to(TestScene::Garden);

        assert_eq!(ctx.pending_transitions(), 1);
        assert_eq!(
            ctx.take_transitions(),
            vec![SceneTransition {
                from: TestScene::Hall,
                to: TestScene::Garden
            }]
        );
        assert_eq!(ctx.pending_transitions(), 0, "Take must drain the queue");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a: SceneContext<TestScene> = SceneContext::new(StdRng::seed_from_u64(42));
        let mut b: SceneContext<TestScene> = SceneContext::new(StdRng::seed_from_u64(42));

        let xs: Vec<u32> = (0..4).map(|_| a.rng().random_range(0..1000)).collect();
        let ys: Vec<u32> = (0..4).map(|_| b.rng().random_range(0..1000)).collect();

        assert_eq!(xs, ys);
    }
}
