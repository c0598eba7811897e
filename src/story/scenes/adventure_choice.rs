//=========================================================================
// Adventure Choice
//=========================================================================
//
// "Want to go for some adventure?" Yes goes straight to the jungle.
// No is laughed off and goes there anyway, two seconds later, unless
// the player changes their mind and says yes first.
//
//=========================================================================

use std::time::Duration;

use log::debug;

use super::{StoryContext, StoryInput};
use crate::core::scene::Scene;
use crate::core::timer::Timers;
use crate::story::{SceneId, StoryAction, SCENE_WIDTH};

const REJECTION_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    GoAnyway,
}

pub struct AdventureChoice {
    declined: bool,
    accepted: bool,
    timers: Timers<Cue>,
}

impl AdventureChoice {
    pub fn new() -> Self {
        Self {
            declined: false,
            accepted: false,
            timers: Timers::new(),
        }
    }

    pub fn is_declined(&self) -> bool {
        self.declined
    }
}

/// Yes sits left of centre, No right of it.
fn answer(input: &StoryInput) -> Option<StoryAction> {
    match input {
        StoryInput::Pointer { x, .. } if *x < SCENE_WIDTH / 2.0 => Some(StoryAction::Accept),
        StoryInput::Pointer { .. } => Some(StoryAction::Decline),
        other => other.action(),
    }
}

impl Default for AdventureChoice {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for AdventureChoice {
    fn handle_input(&mut self, input: &StoryInput, ctx: &mut StoryContext) {
        if self.accepted {
            return;
        }
        match answer(input) {
            Some(StoryAction::Accept) => {
                self.accepted = true;
                self.timers.cancel_all();
                ctx.transition_to(SceneId::JungleMemoryQuest);
            }
            Some(StoryAction::Decline) if !self.declined => {
                debug!(target: "story::scene", "Adventure declined, going anyway");
                self.declined = true;
                self.timers.after(REJECTION_DELAY, Cue::GoAnyway);
            }
            _ => {}
        }
    }

    fn update(&mut self, dt: Duration, ctx: &mut StoryContext) {
        self.timers.advance(dt);
        while let Some(Cue::GoAnyway) = self.timers.pop_due() {
            ctx.transition_to(SceneId::JungleMemoryQuest);
        }
    }

    fn status(&self) -> String {
        if self.declined {
            "\"Haha, nice try. We're going anyway!\"".to_string()
        } else {
            "Want to go for some adventure? (Y / N)".to_string()
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
