//=========================================================================
// Time Travel Game
//=========================================================================
//
// Briefing panel, then a ship rewinding the timeline from month 12 to
// month 6 while debris rains down. Debris can be tapped away or dodged
// but never decides anything: the countdown alone ends the game.
//
// Timers:
//   Tick       every 5 s      (running only)
//   Spawn      every 800 ms   (running only)
//   Step       every 50 ms    (whole scene)
//   LevelLine  1.8 s after each tick
//   Leave      4 s after the win
//
//=========================================================================

use std::time::Duration;

use log::{debug, info};

use super::{StoryContext, StoryInput};
use crate::core::scene::Scene;
use crate::core::timer::{TimerId, Timers};
use crate::story::games::{Countdown, HazardField, Steer, TickOutcome};
use crate::story::{SceneId, StoryAction};

//=== Timing ==============================================================

const TICK_INTERVAL: Duration = Duration::from_secs(5);
const LEVEL_LINE_DURATION: Duration = Duration::from_millis(1800);
const SPAWN_INTERVAL: Duration = Duration::from_millis(800);
const STEP_INTERVAL: Duration = Duration::from_millis(50);
const WIN_DELAY: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    Tick,
    HideLevelLine,
    Spawn,
    Step,
    Leave,
}

//=== TimeTravelGame ======================================================

pub struct TimeTravelGame {
    countdown: Countdown,
    field: HazardField,
    level_line: bool,
    tick_timer: Option<TimerId>,
    spawn_timer: Option<TimerId>,
    level_line_timer: Option<TimerId>,
    timers: Timers<Cue>,
}

impl TimeTravelGame {
    pub fn new() -> Self {
        Self {
            countdown: Countdown::new(),
            field: HazardField::new(),
            level_line: false,
            tick_timer: None,
            spawn_timer: None,
            level_line_timer: None,
            timers: Timers::new(),
        }
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn field(&self) -> &HazardField {
        &self.field
    }

    /// True for a moment after each month passes.
    pub fn is_level_line_visible(&self) -> bool {
        self.level_line
    }

    //--- Internal Helpers -------------------------------------------------

    fn launch(&mut self) {
        if !self.countdown.start() {
            return;
        }
        info!(target: "story::scene", "Time travel started at month {}", self.countdown.months());
        self.tick_timer = Some(self.timers.every(TICK_INTERVAL, Cue::Tick));
        self.spawn_timer = Some(self.timers.every(SPAWN_INTERVAL, Cue::Spawn));
    }

    fn flash_level_line(&mut self) {
        if let Some(id) = self.level_line_timer.take() {
            self.timers.cancel(id);
        }
        self.level_line = true;
        self.level_line_timer = Some(self.timers.after(LEVEL_LINE_DURATION, Cue::HideLevelLine));
    }

    fn on_tick(&mut self) {
        match self.countdown.tick() {
            TickOutcome::Rewound(month) => {
                debug!(target: "story::scene", "Rewound to month {}", month);
                self.flash_level_line();
            }
            TickOutcome::Won => {
                info!(
                    target: "story::scene",
                    "Timeline stabilized ({} cleared, {} grazes)",
                    self.field.cleared(),
                    self.field.grazes()
                );
                for id in [self.tick_timer.take(), self.spawn_timer.take()].into_iter().flatten() {
                    self.timers.cancel(id);
                }
                self.flash_level_line();
                self.timers.after(WIN_DELAY, Cue::Leave);
            }
            TickOutcome::Ignored => {}
        }
    }
}

impl Default for TimeTravelGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for TimeTravelGame {
    fn on_enter(&mut self, _ctx: &mut StoryContext) {
        self.timers.every(STEP_INTERVAL, Cue::Step);
    }

    fn handle_input(&mut self, input: &StoryInput, _ctx: &mut StoryContext) {
        match input {
            StoryInput::Action(StoryAction::Continue) => self.launch(),
            StoryInput::Action(StoryAction::Previous) => self.field.steer(Steer::Left),
            StoryInput::Action(StoryAction::Next) => self.field.steer(Steer::Right),
            StoryInput::Pointer { x, y } => {
                let removed = self.field.tap(*x, *y);
                if removed > 0 {
                    debug!(target: "story::scene", "Tap cleared {} hazards", removed);
                }
            }
            _ => {}
        }
    }

    fn update(&mut self, dt: Duration, ctx: &mut StoryContext) {
        self.timers.advance(dt);
        while let Some(cue) = self.timers.pop_due() {
            match cue {
                Cue::Tick => self.on_tick(),
                Cue::HideLevelLine => {
                    self.level_line = false;
                    self.level_line_timer = None;
                }
                Cue::Spawn => {
                    if self.countdown.is_running() {
                        self.field.spawn(ctx.rng());
                    }
                }
                Cue::Step => self.field.step(),
                Cue::Leave => ctx.transition_to(SceneId::FixedTimelineRoom),
            }
        }
    }

    fn status(&self) -> String {
        if !self.countdown.is_started() {
            return "Mission: rewind the timeline to month 6. Press Enter to launch".to_string();
        }
        if self.countdown.is_won() {
            return format!("Month {}. {}", self.countdown.months(), self.countdown.ship_log());
        }
        format!(
            "Month {} | {} | debris: {}",
            self.countdown.months(),
            self.countdown.ship_log(),
            self.field.hazards().len()
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
