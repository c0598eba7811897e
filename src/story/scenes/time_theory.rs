//=========================================================================
// Time Theory
//=========================================================================

use std::time::Duration;

use super::{is_continue, StoryContext, StoryInput};
use crate::core::scene::Scene;
use crate::story::{SceneId, StoryAction};

pub const PHRASES: [&str; 5] = [
    "Time isn't always a straight line...",
    "Moments can be revisited.",
    "Love isn't limited by clocks.",
    "I know what we can do...",
    "Let's go back in time.",
];

/// Five phrases stepped through with Continue.
pub struct TimeTheory {
    index: usize,
}

impl TimeTheory {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn phrase(&self) -> &'static str {
        PHRASES[self.index]
    }

    pub fn is_last(&self) -> bool {
        self.index == PHRASES.len() - 1
    }
}

impl Default for TimeTheory {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for TimeTheory {
    fn handle_input(&mut self, input: &StoryInput, ctx: &mut StoryContext) {
        if !is_continue(input) {
            return;
        }
        if self.is_last() {
            ctx.transition_to(SceneId::TimeTravelGame);
        } else {
            self.index += 1;
        }
    }

    fn update(&mut self, _dt: Duration, _ctx: &mut StoryContext) {}

    fn status(&self) -> String {
        format!("{} ({}/{})", self.phrase(), self.index + 1, PHRASES.len())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
