//=========================================================================
// Late Room
//=========================================================================
//
// A dark room, a skeleton in a party hat and a rotten cake. The
// character arrives after a pause, is startled, then realises how late
// they are. Only then can the player ask for the theory.
//
//=========================================================================

use std::time::Duration;

use super::{is_continue, StoryContext, StoryInput};
use crate::core::scene::Scene;
use crate::core::timer::Timers;
use crate::story::{SceneId, StoryAction};

//=== Timing ==============================================================

const ENTRY_DELAY: Duration = Duration::from_millis(1500);
/// Both dialogue beats are measured from the character's entry.
const STARTLE_DELAY: Duration = Duration::from_millis(400);
const REALISATION_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    Enter,
    Dialogue(u8),
}

//=== LateRoom ============================================================

pub struct LateRoom {
    character_visible: bool,
    dialogue_step: u8,
    timers: Timers<Cue>,
}

impl LateRoom {
    pub fn new() -> Self {
        Self {
            character_visible: false,
            dialogue_step: 0,
            timers: Timers::new(),
        }
    }

    pub fn is_character_visible(&self) -> bool {
        self.character_visible
    }

    /// 0 before anything is said, 1 when startled, 2 once the theory can be asked for.
    pub fn dialogue_step(&self) -> u8 {
        self.dialogue_step
    }
}

impl Default for LateRoom {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for LateRoom {
    fn on_enter(&mut self, _ctx: &mut StoryContext) {
        self.timers.after(ENTRY_DELAY, Cue::Enter);
    }

    fn handle_input(&mut self, input: &StoryInput, ctx: &mut StoryContext) {
        if is_continue(input) && self.dialogue_step == 2 {
            ctx.transition_to(SceneId::TimeTheory);
        }
    }

    fn update(&mut self, dt: Duration, _ctx: &mut StoryContext) {
        self.timers.advance(dt);
        while let Some(cue) = self.timers.pop_due() {
            match cue {
                Cue::Enter => {
                    self.character_visible = true;
                    self.timers.after(STARTLE_DELAY, Cue::Dialogue(1));
                    self.timers.after(REALISATION_DELAY, Cue::Dialogue(2));
                }
                Cue::Dialogue(step) => self.dialogue_step = self.dialogue_step.max(step),
            }
        }
    }

    fn status(&self) -> String {
        match (self.character_visible, self.dialogue_step) {
            (false, _) => "A dark room. Something smells off...".to_string(),
            (true, 0) => "Someone walks in.".to_string(),
            (true, 1) => "Boo! ...a skeleton in a party hat?".to_string(),
            _ => "Oh no. I'm late. Press Enter: Explain Theory".to_string(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
