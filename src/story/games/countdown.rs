//=========================================================================
// Countdown & Hazard Field
//=========================================================================
//
// The time-travel game: the timeline rewinds from month 12 to month 6
// while debris falls across the screen. The countdown alone decides
// the outcome; the hazards are there to be tapped away or dodged.
//
// Both types are plain state. The owning scene decides when `tick()`,
// `spawn()` and `step()` happen.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::Rng;

use crate::story::{SCENE_HEIGHT, SCENE_WIDTH};

//=== Constants ===========================================================

pub const START_MONTH: u8 = 12;
pub const TARGET_MONTH: u8 = 6;

pub const FIELD_WIDTH: f32 = SCENE_WIDTH;
pub const FIELD_HEIGHT: f32 = SCENE_HEIGHT;

/// Pixels a hazard falls per step.
pub const HAZARD_SPEED: f32 = 6.0;
/// Taps remove every hazard closer than this.
pub const TAP_RADIUS: f32 = 40.0;

/// Ship nudge per Previous/Next and its travel limit around the centre.
pub const SHIP_STEP: f32 = 60.0;
pub const SHIP_RANGE: f32 = 240.0;
/// Row the ship flies on, and how close a hazard must pass to graze it.
pub const SHIP_Y: f32 = 360.0;
const GRAZE_DISTANCE: f32 = 40.0;

//=== Countdown ===========================================================

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One month closer; the new month is attached.
    Rewound(u8),
    /// Reached the target month. Reported once.
    Won,
    /// Not started yet, or already won.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    months: u8,
    started: bool,
    won: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            months: START_MONTH,
            started: false,
            won: false,
        }
    }

    /// Leaves the briefing. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.started || self.won {
            return TickOutcome::Ignored;
        }

        self.months -= 1;
        if self.months <= TARGET_MONTH {
            self.won = true;
            TickOutcome::Won
        } else {
            TickOutcome::Rewound(self.months)
        }
    }

    pub fn months(&self) -> u8 {
        self.months
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// True while the timeline is actively rewinding.
    pub fn is_running(&self) -> bool {
        self.started && !self.won
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// What the ship's radio says at the current month.
    pub fn ship_log(&self) -> &'static str {
        match self.months {
            12 => "Just rewatched Interstellar... got inspired! I wanted to make something special for you!",
            11 => "Reversing time from month 12... physics, please be gentle.",
            10 => "Theoretically, going back in time is possible near a black hole... I'd do it to relive our moments.",
            9 => "Imagine if we had tech to change the past... I'd spend it making you laugh even more!",
            8 => "I wish I could go back and enjoy every moment we shared, over and over.",
            7 => "Love you so much, sister. You make every timeline brighter.",
            6 => "Month 6 reached! Timeline stabilized.",
            _ => "Recalculating spacetime...",
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

//=== HazardField =========================================================

/// Sideways ship movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hazard {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct HazardField {
    hazards: Vec<Hazard>,
    next_id: u64,
    ship_offset: f32,
    grazes: u32,
    cleared: u32,
}

impl HazardField {
    pub fn new() -> Self {
        Self {
            hazards: Vec::new(),
            next_id: 0,
            ship_offset: 0.0,
            grazes: 0,
            cleared: 0,
        }
    }

    //--- Hazards ----------------------------------------------------------

    /// Drops a new hazard in at the top edge, at a random column.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Hazard {
        let hazard = Hazard {
            id: self.next_id,
            x: rng.random_range(0.0..FIELD_WIDTH),
            y: 0.0,
        };
        self.next_id += 1;
        self.hazards.push(hazard);
        hazard
    }

    /// Moves every hazard down one step and drops those past the bottom.
    pub fn step(&mut self) {
        let ship_x = self.ship_x();
        let mut grazes = 0;

        for hazard in &mut self.hazards {
            let before = hazard.y;
            hazard.y += HAZARD_SPEED;
            if before < SHIP_Y && hazard.y >= SHIP_Y && (hazard.x - ship_x).abs() < GRAZE_DISTANCE {
                grazes += 1;
            }
        }

        self.grazes += grazes;
        self.hazards.retain(|h| h.y <= FIELD_HEIGHT);
    }

    /// Clears every hazard within [`TAP_RADIUS`] of the tap. Returns how many.
    pub fn tap(&mut self, x: f32, y: f32) -> usize {
        let before = self.hazards.len();
        self.hazards
            .retain(|h| (h.x - x).hypot(h.y - y) > TAP_RADIUS);
        let removed = before - self.hazards.len();
        self.cleared += removed as u32;
        removed
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    //--- Ship -------------------------------------------------------------

    /// Nudges the ship one step to the side.
    pub fn steer(&mut self, direction: Steer) {
        let step = match direction {
            Steer::Left => -SHIP_STEP,
            Steer::Right => SHIP_STEP,
        };
        self.ship_offset = (self.ship_offset + step).clamp(-SHIP_RANGE, SHIP_RANGE);
    }

    /// Ship offset from the centre of the field.
    pub fn ship_offset(&self) -> f32 {
        self.ship_offset
    }

    pub fn ship_x(&self) -> f32 {
        FIELD_WIDTH / 2.0 + self.ship_offset
    }

    /// Hazards that passed close to the ship. Purely cosmetic.
    pub fn grazes(&self) -> u32 {
        self.grazes
    }

    /// Hazards removed by taps.
    pub fn cleared(&self) -> u32 {
        self.cleared
    }
}

impl Default for HazardField {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
