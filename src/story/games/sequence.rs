//=========================================================================
// Sequence Puzzle
//=========================================================================
//
// Four chambers climbed in order. The first three hide a shuffled 3x3
// grid of the numbers 1..=9 that must be pressed in ascending order;
// the last chamber has no grid and simply reveals its message.
//
//   round 0..=2: click 1, 2, ..., 9 → solved → advance_round() (reshuffle)
//   round 3:     message shown at once, finishing is up to the scene
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::seq::SliceRandom;
use rand::Rng;

//=== Constants ===========================================================

/// Tiles per grid.
pub const GRID_SIZE: u8 = 9;

//=== Chamber =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chamber {
    Regret,
    Gratitude,
    Promise,
    Heart,
}

impl Chamber {
    pub const ALL: [Chamber; 4] = [Chamber::Regret, Chamber::Gratitude, Chamber::Promise, Chamber::Heart];

    pub fn title(self) -> &'static str {
        match self {
            Chamber::Regret => "Chamber of Regret",
            Chamber::Gratitude => "Chamber of Gratitude",
            Chamber::Promise => "Chamber of Promise",
            Chamber::Heart => "Chamber of Heart",
        }
    }

    /// Text revealed once the chamber is solved.
    pub fn message(self) -> &'static str {
        match self {
            Chamber::Regret => "I was late... and that regret stayed with me.",
            Chamber::Gratitude => "Thank you for your patience.",
            Chamber::Promise => "Not perfect \u{2014} but present, learning, and trying.",
            Chamber::Heart => {
                "I was late.\nBut my heart never missed the moment.\n\nHappy Birthday.\nThank you for waiting for me, little sister."
            }
        }
    }

    fn has_grid(self) -> bool {
        self != Chamber::Heart
    }
}

//=== TileOutcome =========================================================

/// What a tile press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileOutcome {
    /// Correct next number, round still open.
    Accepted,
    /// Correct ninth number; the round is now solved.
    Solved,
    /// Wrong number; progress was cleared.
    Mistake,
    /// Round already solved or no grid here.
    Ignored,
}

//=== SequencePuzzle ======================================================

#[derive(Debug, Clone)]
pub struct SequencePuzzle {
    round: usize,
    clicked: Vec<u8>,
    layout: Vec<u8>,
    solved: bool,
    mistakes: u32,
}

impl SequencePuzzle {
    /// Starts in the first chamber with a freshly shuffled grid.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            round: 0,
            clicked: Vec::with_capacity(GRID_SIZE as usize),
            layout: Self::shuffled_layout(rng),
            solved: false,
            mistakes: 0,
        }
    }

    //--- Operations -------------------------------------------------------

    /// Presses the tile showing `value`.
    ///
    /// The only accepted value is `clicked.len() + 1`. Anything else
    /// clears the progress but keeps the layout.
    pub fn on_tile_click(&mut self, value: u8) -> TileOutcome {
        if self.solved || !self.chamber().has_grid() {
            return TileOutcome::Ignored;
        }

        let expected = self.clicked.len() as u8 + 1;
        if value != expected {
            self.clicked.clear();
            self.mistakes += 1;
            return TileOutcome::Mistake;
        }

        self.clicked.push(value);
        if self.clicked.len() == GRID_SIZE as usize {
            self.solved = true;
            TileOutcome::Solved
        } else {
            TileOutcome::Accepted
        }
    }

    /// Climbs to the next chamber. Returns `false` unless the current
    /// chamber is solved and another one follows.
    pub fn advance_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.solved || self.is_final_chamber() {
            return false;
        }

        self.round += 1;
        self.clicked.clear();

        if self.chamber().has_grid() {
            self.layout = Self::shuffled_layout(rng);
            self.solved = false;
        } else {
            self.layout.clear();
            self.solved = true;
        }
        true
    }

    //--- Queries ----------------------------------------------------------

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn chamber(&self) -> Chamber {
        Chamber::ALL[self.round]
    }

    pub fn is_final_chamber(&self) -> bool {
        self.round == Chamber::ALL.len() - 1
    }

    /// Grid order of the numbers, row by row. Empty in the final chamber.
    pub fn layout(&self) -> &[u8] {
        &self.layout
    }

    pub fn clicked(&self) -> &[u8] {
        &self.clicked
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Total wrong presses across all chambers.
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// The chamber's message once it is revealed.
    pub fn reward(&self) -> Option<&'static str> {
        self.solved.then(|| self.chamber().message())
    }

    //--- Internal Helpers -------------------------------------------------

    fn shuffled_layout<R: Rng + ?Sized>(rng: &mut R) -> Vec<u8> {
        let mut layout: Vec<u8> = (1..=GRID_SIZE).collect();
        layout.shuffle(rng);
        layout
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
