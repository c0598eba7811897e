//=========================================================================
// Transition Queue
//=========================================================================
//
// Queue for scene transitions.
//
// Scenes queue transitions here while handling input or timers. The
// navigator drains the queue at the tick boundary.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SceneKey;

//=== SceneTransition =====================================================

/// A request to move from one scene to another.
///
/// `from` records the scene that was current when the request was made,
/// so the navigator can drop requests from scenes that are gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneTransition<S: SceneKey> {
    pub from: S,
    pub to: S,
}

//=== TransitionQueue =====================================================

/// FIFO of pending scene transitions.
pub struct TransitionQueue<S: SceneKey> {
    queue: Vec<SceneTransition<S>>,
}

impl<S: SceneKey> TransitionQueue<S> {
    /// Creates a new empty transition queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition to be processed at the next tick boundary.
    pub fn push(&mut self, transition: SceneTransition<S>) {
        self.queue.push(transition);
    }

    /// Returns an iterator over the queued transitions.
    pub fn iter(&self) -> impl Iterator<Item = &SceneTransition<S>> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all transitions from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<SceneTransition<S>> {
        std::mem::take(&mut self.queue)
    }
}

impl<S: SceneKey> Default for TransitionQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}
