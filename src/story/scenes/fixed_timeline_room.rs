//=========================================================================
// Fixed Timeline Room
//=========================================================================
//
// The same room, rewound: sunlight, a fresh cake, no skeleton.
//
//=========================================================================

use std::time::Duration;

use super::{is_continue, StoryContext, StoryInput};
use crate::core::scene::Scene;
use crate::core::timer::Timers;
use crate::story::{SceneId, StoryAction};

const ENTRY_DELAY: Duration = Duration::from_millis(1000);
const DIALOGUE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    Enter,
    Speak,
}

pub struct FixedTimelineRoom {
    character_visible: bool,
    speaking: bool,
    timers: Timers<Cue>,
}

impl FixedTimelineRoom {
    pub fn new() -> Self {
        Self {
            character_visible: false,
            speaking: false,
            timers: Timers::new(),
        }
    }

    pub fn is_character_visible(&self) -> bool {
        self.character_visible
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }
}

impl Default for FixedTimelineRoom {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for FixedTimelineRoom {
    fn on_enter(&mut self, _ctx: &mut StoryContext) {
        self.timers.after(ENTRY_DELAY, Cue::Enter);
    }

    fn handle_input(&mut self, input: &StoryInput, ctx: &mut StoryContext) {
        if is_continue(input) && self.speaking {
            ctx.transition_to(SceneId::AdventureChoice);
        }
    }

    fn update(&mut self, dt: Duration, _ctx: &mut StoryContext) {
        self.timers.advance(dt);
        while let Some(cue) = self.timers.pop_due() {
            match cue {
                Cue::Enter => {
                    self.character_visible = true;
                    self.timers.after(DIALOGUE_DELAY, Cue::Speak);
                }
                Cue::Speak => self.speaking = true,
            }
        }
    }

    fn status(&self) -> String {
        if self.speaking {
            "See? I wasn't late... Press Enter to continue".to_string()
        } else {
            "Sunlight, and a fresh cake on the table.".to_string()
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
