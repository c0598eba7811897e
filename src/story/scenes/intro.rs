//=========================================================================
// Intro
//=========================================================================
//
// Loading bar that fills one percent every 30 ms. Once full, Continue
// opens the door and the story moves on to the late room.
//
//=========================================================================

use std::time::Duration;

use log::debug;

use super::{is_continue, StoryContext, StoryInput};
use crate::core::scene::Scene;
use crate::core::timer::{TimerId, Timers};
use crate::story::{SceneId, StoryAction};

//=== Timing ==============================================================

const LOAD_STEP: Duration = Duration::from_millis(30);
const DOOR_DELAY: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    Load,
    Leave,
}

//=== Intro ===============================================================

pub struct Intro {
    progress: u8,
    door_open: bool,
    load_timer: Option<TimerId>,
    timers: Timers<Cue>,
}

impl Intro {
    pub fn new() -> Self {
        Self {
            progress: 0,
            door_open: false,
            load_timer: None,
            timers: Timers::new(),
        }
    }

    /// Loading progress in percent.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_loaded(&self) -> bool {
        self.progress >= 100
    }

    pub fn is_door_open(&self) -> bool {
        self.door_open
    }
}

impl Default for Intro {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for Intro {
    fn on_enter(&mut self, _ctx: &mut StoryContext) {
        self.load_timer = Some(self.timers.every(LOAD_STEP, Cue::Load));
    }

    fn handle_input(&mut self, input: &StoryInput, _ctx: &mut StoryContext) {
        if !is_continue(input) || !self.is_loaded() || self.door_open {
            return;
        }

        debug!(target: "story::scene", "Door opening");
        self.door_open = true;
        self.timers.after(DOOR_DELAY, Cue::Leave);
    }

    fn update(&mut self, dt: Duration, ctx: &mut StoryContext) {
        self.timers.advance(dt);
        while let Some(cue) = self.timers.pop_due() {
            match cue {
                Cue::Load => {
                    self.progress += 1;
                    if self.is_loaded() {
                        if let Some(id) = self.load_timer.take() {
                            self.timers.cancel(id);
                        }
                    }
                }
                Cue::Leave => ctx.transition_to(SceneId::LateRoom),
            }
        }
    }

    fn status(&self) -> String {
        if self.door_open {
            "The door creaks open...".to_string()
        } else if self.is_loaded() {
            "Estate ready. Press Enter to open the door".to_string()
        } else {
            format!("Building environment... {}%", self.progress)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::scenes::testing::{click, enter, press, queued, run_for};

    #[test]
    fn loads_one_percent_per_step_and_stops_at_full() {
        let mut intro = Intro::new();
        let mut ctx = enter(&mut intro);

        run_for(&mut intro, &mut ctx, LOAD_STEP * 50);
        assert_eq!(intro.progress(), 50);

        run_for(&mut intro, &mut ctx, LOAD_STEP * 60);
        assert_eq!(intro.progress(), 100, "Progress must cap at 100");
        assert!(intro.timers.is_empty());
    }

    #[test]
    fn continue_is_ignored_until_loaded() {
        let mut intro = Intro::new();
        let mut ctx = enter(&mut intro);
        run_for(&mut intro, &mut ctx, LOAD_STEP * 10);

        press(&mut intro, &mut ctx, StoryAction::Continue);

        assert!(!intro.is_door_open());
        run_for(&mut intro, &mut ctx, Duration::from_secs(10));
        assert!(queued(&mut ctx).is_empty(), "Intro never leaves on its own");
    }

    #[test]
    fn door_leads_to_late_room_after_delay() {
        let mut intro = Intro::new();
        let mut ctx = enter(&mut intro);
        run_for(&mut intro, &mut ctx, LOAD_STEP * 100);

        press(&mut intro, &mut ctx, StoryAction::Continue);
        press(&mut intro, &mut ctx, StoryAction::Continue);
        assert!(intro.is_door_open());

        run_for(&mut intro, &mut ctx, DOOR_DELAY - Duration::from_millis(10));
        assert!(queued(&mut ctx).is_empty());

        run_for(&mut intro, &mut ctx, Duration::from_millis(10));
        assert_eq!(queued(&mut ctx), vec![SceneId::LateRoom], "Exactly one transition");
    }

    #[test]
    fn clicking_the_door_opens_it_once_loaded() {
        let mut intro = Intro::new();
        let mut ctx = enter(&mut intro);

        click(&mut intro, &mut ctx, 400.0, 300.0);
        assert!(!intro.is_door_open(), "Clicks are gated like Enter");

        run_for(&mut intro, &mut ctx, LOAD_STEP * 100);
        click(&mut intro, &mut ctx, 400.0, 300.0);
        assert!(intro.is_door_open());

        run_for(&mut intro, &mut ctx, DOOR_DELAY);
        assert_eq!(queued(&mut ctx), vec![SceneId::LateRoom]);
    }
}
