//=========================================================================
// Pyramid of Emotions
//=========================================================================
//
// Climb the pyramid chamber by chamber. Each of the first three
// chambers hides a shuffled 3x3 grid; pressing its numbers in order
// reveals a message and opens the way up. The heart chamber at the top
// only needs to be read.
//
// Keys 1-9 press the tile at that grid position (row by row). Enter
// ascends once a chamber is solved and finishes at the top.
//
//=========================================================================

use std::time::Duration;

use log::{debug, info};

use super::{StoryContext, StoryInput};
use crate::core::scene::Scene;
use crate::story::games::{SequencePuzzle, TileOutcome};
use crate::story::{SceneId, StoryAction, SCENE_HEIGHT, SCENE_WIDTH};

//=== Grid Layout =========================================================

const GRID_COLUMNS: usize = 3;
const TILE_SIZE: f32 = 96.0;
const TILE_GAP: f32 = 16.0;
const GRID_EXTENT: f32 = TILE_SIZE * GRID_COLUMNS as f32 + TILE_GAP * (GRID_COLUMNS as f32 - 1.0);
const GRID_ORIGIN: (f32, f32) = ((SCENE_WIDTH - GRID_EXTENT) / 2.0, (SCENE_HEIGHT - GRID_EXTENT) / 2.0);

//=== PyramidOfEmotions ===================================================

pub struct PyramidOfEmotions {
    puzzle: Option<SequencePuzzle>,
    finished: bool,
}

impl PyramidOfEmotions {
    pub fn new() -> Self {
        Self {
            puzzle: None,
            finished: false,
        }
    }

    /// The puzzle; shuffled when the scene is entered.
    pub fn puzzle(&self) -> Option<&SequencePuzzle> {
        self.puzzle.as_ref()
    }

    /// Grid position (0-based, row by row) under a pointer, if any.
    pub fn tile_at(x: f32, y: f32) -> Option<usize> {
        let column = Self::cell(x - GRID_ORIGIN.0)?;
        let row = Self::cell(y - GRID_ORIGIN.1)?;
        Some(row * GRID_COLUMNS + column)
    }

    /// Centre of the tile at grid position `slot`.
    pub fn tile_centre(slot: usize) -> (f32, f32) {
        let pitch = TILE_SIZE + TILE_GAP;
        let (row, column) = (slot / GRID_COLUMNS, slot % GRID_COLUMNS);
        (
            GRID_ORIGIN.0 + column as f32 * pitch + TILE_SIZE / 2.0,
            GRID_ORIGIN.1 + row as f32 * pitch + TILE_SIZE / 2.0,
        )
    }

    //--- Internal Helpers -------------------------------------------------

    fn cell(offset: f32) -> Option<usize> {
        if offset < 0.0 || offset > GRID_EXTENT {
            return None;
        }
        let pitch = TILE_SIZE + TILE_GAP;
        let index = (offset / pitch) as usize;
        let within = offset - index as f32 * pitch;
        (index < GRID_COLUMNS && within <= TILE_SIZE).then_some(index)
    }

    fn press_slot(&mut self, slot: usize) {
        let Some(puzzle) = self.puzzle.as_mut() else {
            return;
        };
        let Some(value) = puzzle.layout().get(slot).copied() else {
            return;
        };

        match puzzle.on_tile_click(value) {
            TileOutcome::Mistake => {
                debug!(target: "story::scene", "Wrong tile {} (mistakes: {})", value, puzzle.mistakes());
            }
            TileOutcome::Solved => {
                info!(target: "story::scene", "{} solved", puzzle.chamber().title());
            }
            TileOutcome::Accepted | TileOutcome::Ignored => {}
        }
    }

    fn proceed(&mut self, ctx: &mut StoryContext) {
        let Some(puzzle) = self.puzzle.as_mut() else {
            return;
        };

        if puzzle.is_final_chamber() {
            if !self.finished {
                self.finished = true;
                ctx.transition_to(SceneId::MainMessage);
            }
        } else if puzzle.advance_round(ctx.rng()) {
            debug!(target: "story::scene", "Ascending to {}", puzzle.chamber().title());
        }
    }
}

impl Default for PyramidOfEmotions {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for PyramidOfEmotions {
    fn on_enter(&mut self, ctx: &mut StoryContext) {
        self.puzzle = Some(SequencePuzzle::new(ctx.rng()));
    }

    fn handle_input(&mut self, input: &StoryInput, ctx: &mut StoryContext) {
        match input {
            StoryInput::Action(StoryAction::Select(n)) if *n >= 1 => self.press_slot(usize::from(*n - 1)),
            StoryInput::Action(StoryAction::Continue) => self.proceed(ctx),
            StoryInput::Pointer { x, y } => {
                if let Some(slot) = Self::tile_at(*x, *y) {
                    self.press_slot(slot);
                }
            }
            _ => {}
        }
    }

    fn update(&mut self, _dt: Duration, _ctx: &mut StoryContext) {}

    fn status(&self) -> String {
        let Some(puzzle) = self.puzzle.as_ref() else {
            return "The pyramid".to_string();
        };
        let title = puzzle.chamber().title();

        if let Some(message) = puzzle.reward() {
            let next = if puzzle.is_final_chamber() { "finish" } else { "ascend" };
            return format!("{}: {} | Enter: {}", title, message.replace('\n', " "), next);
        }

        let rows: Vec<String> = puzzle
            .layout()
            .chunks(GRID_COLUMNS)
            .map(|row| {
                row.iter()
                    .map(|value| {
                        if puzzle.clicked().contains(value) {
                            "*".to_string()
                        } else {
                            value.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        format!("{} | {} | next: {}", title, rows.join(" / "), puzzle.clicked().len() + 1)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::games::Chamber;
    use crate::story::scenes::testing::{enter, press, queued};

    fn slot_of(pyramid: &PyramidOfEmotions, value: u8) -> u8 {
        let layout = pyramid.puzzle().unwrap().layout();
        layout.iter().position(|v| *v == value).unwrap() as u8 + 1
    }

    fn solve_with_keys(pyramid: &mut PyramidOfEmotions, ctx: &mut StoryContext) {
        for value in 1..=9 {
            let slot = slot_of(pyramid, value);
            press(pyramid, ctx, StoryAction::Select(slot));
        }
    }

    #[test]
    fn keys_press_tiles_by_grid_position() {
        let mut pyramid = PyramidOfEmotions::new();
        let mut ctx = enter(&mut pyramid);

        let slot = slot_of(&pyramid, 1);
        press(&mut pyramid, &mut ctx, StoryAction::Select(slot));

        assert_eq!(pyramid.puzzle().unwrap().clicked(), &[1]);
    }

    #[test]
    fn wrong_tile_resets_progress() {
        let mut pyramid = PyramidOfEmotions::new();
        let mut ctx = enter(&mut pyramid);

        let first = slot_of(&pyramid, 1);
        let wrong = slot_of(&pyramid, 5);
        press(&mut pyramid, &mut ctx, StoryAction::Select(first));
        press(&mut pyramid, &mut ctx, StoryAction::Select(wrong));

        let puzzle = pyramid.puzzle().unwrap();
        assert!(puzzle.clicked().is_empty());
        assert_eq!(puzzle.mistakes(), 1);
    }

    #[test]
    fn pointer_hits_tiles_and_misses_gaps() {
        for slot in 0..9 {
            let (x, y) = PyramidOfEmotions::tile_centre(slot);
            assert_eq!(PyramidOfEmotions::tile_at(x, y), Some(slot));
        }
        let (x, y) = PyramidOfEmotions::tile_centre(0);
        assert_eq!(PyramidOfEmotions::tile_at(x + TILE_SIZE / 2.0 + TILE_GAP / 2.0, y), None);
        assert_eq!(PyramidOfEmotions::tile_at(10.0, 10.0), None);
    }

    #[test]
    fn pointer_solves_a_chamber() {
        let mut pyramid = PyramidOfEmotions::new();
        let mut ctx = enter(&mut pyramid);

        for value in 1..=9 {
            let slot = slot_of(&pyramid, value) as usize - 1;
            let (x, y) = PyramidOfEmotions::tile_centre(slot);
            pyramid.handle_input(&StoryInput::Pointer { x, y }, &mut ctx);
        }

        assert!(pyramid.puzzle().unwrap().is_solved());
    }

    #[test]
    fn continue_before_solving_does_nothing() {
        let mut pyramid = PyramidOfEmotions::new();
        let mut ctx = enter(&mut pyramid);

        press(&mut pyramid, &mut ctx, StoryAction::Continue);

        assert_eq!(pyramid.puzzle().unwrap().round(), 0);
        assert!(queued(&mut ctx).is_empty());
    }

    #[test]
    fn climbing_all_chambers_finishes_into_main_message() {
        let mut pyramid = PyramidOfEmotions::new();
        let mut ctx = enter(&mut pyramid);

        for _ in 0..3 {
            solve_with_keys(&mut pyramid, &mut ctx);
            press(&mut pyramid, &mut ctx, StoryAction::Continue);
        }

        assert_eq!(pyramid.puzzle().unwrap().chamber(), Chamber::Heart);
        assert!(pyramid.status().contains("Happy Birthday."));
        assert!(queued(&mut ctx).is_empty(), "Heart chamber waits for the player");

        press(&mut pyramid, &mut ctx, StoryAction::Continue);
        press(&mut pyramid, &mut ctx, StoryAction::Continue);
        assert_eq!(queued(&mut ctx), vec![SceneId::MainMessage]);
    }
}
