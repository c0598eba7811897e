//=========================================================================
// Jungle Memory Quest
//=========================================================================
//
// Find three seeds under the leaves, plant them in the soil at the
// centre one at a time, and read the memory each one blooms into.
//
// Keys: 1-3 work a seed (uncover → pick up → read), P plants, Esc
// closes a memory. Clicking the leaves, the soil and the flowers does
// the same.
//
//=========================================================================

use std::time::Duration;

use log::{debug, info};

use super::{StoryContext, StoryInput};
use crate::core::scene::Scene;
use crate::core::timer::Timers;
use crate::story::games::{MemoryQuest, QuestStep};
use crate::story::{SceneId, StoryAction, SCENE_HEIGHT, SCENE_WIDTH};

//=== Layout & Timing =====================================================

const COMPLETION_DELAY: Duration = Duration::from_secs(4);

const SOIL_CENTRE: (f32, f32) = (SCENE_WIDTH / 2.0, SCENE_HEIGHT / 2.0);
const SOIL_RADIUS: f32 = 96.0;
/// Flowers ring the soil centre at this distance, 120 degrees apart.
const FLOWER_RING: f32 = 60.0;
const FLOWER_RADIUS: f32 = 24.0;
const LEAF_RADIUS: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    Leave,
}

//=== JungleMemoryQuest ===================================================

pub struct JungleMemoryQuest {
    quest: Option<MemoryQuest>,
    planting_order: Vec<usize>,
    celebrating: bool,
    timers: Timers<Cue>,
}

impl JungleMemoryQuest {
    pub fn new() -> Self {
        Self {
            quest: None,
            planting_order: Vec::new(),
            celebrating: false,
            timers: Timers::new(),
        }
    }

    /// The quest state; scattered when the scene is entered.
    pub fn quest(&self) -> Option<&MemoryQuest> {
        self.quest.as_ref()
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    /// Where seed `seed`'s flower blooms, once planted.
    pub fn flower_position(&self, seed: usize) -> Option<(f32, f32)> {
        let slot = self.planting_order.iter().position(|s| *s == seed)?;
        let angle = (slot as f32 * 120.0).to_radians();
        Some((
            SOIL_CENTRE.0 + FLOWER_RING * angle.sin(),
            SOIL_CENTRE.1 - FLOWER_RING * angle.cos(),
        ))
    }

    //--- Internal Helpers -------------------------------------------------

    fn select(&mut self, seed: usize) -> QuestStep {
        let Some(quest) = self.quest.as_mut() else {
            return QuestStep::Ignored;
        };
        let step = quest.select(seed);
        debug!(target: "story::scene", "Seed {}: {:?}", seed + 1, step);
        if step == QuestStep::MemoryOpened {
            self.check_completion();
        }
        step
    }

    fn view(&mut self, seed: usize) {
        if let Some(quest) = self.quest.as_mut() {
            if quest.view_memory(seed) {
                self.check_completion();
            }
        }
    }

    fn plant(&mut self) {
        if let Some(seed) = self.quest.as_mut().and_then(MemoryQuest::plant) {
            debug!(target: "story::scene", "Planted seed {}", seed + 1);
            self.planting_order.push(seed);
        }
    }

    fn close_memory(&mut self) {
        if let Some(quest) = self.quest.as_mut() {
            quest.close_memory();
        }
    }

    fn check_completion(&mut self) {
        let complete = self.quest.as_ref().is_some_and(MemoryQuest::is_complete);
        if complete && !self.celebrating {
            info!(target: "story::scene", "All memories found");
            self.celebrating = true;
            self.timers.after(COMPLETION_DELAY, Cue::Leave);
        }
    }

    fn on_pointer(&mut self, x: f32, y: f32) {
        let Some(quest) = self.quest.as_ref() else {
            return;
        };

        if quest.open_memory().is_some() {
            self.close_memory();
            return;
        }

        let holding = quest.holding().is_some();
        let leaf = quest
            .seeds()
            .iter()
            .filter(|s| !s.collected)
            .find(|s| distance(to_pixels(s.position), (x, y)) <= LEAF_RADIUS)
            .map(|s| s.id);
        if let Some(seed) = leaf {
            // A leaf that cannot be picked up while carrying lets the click
            // through to the soil underneath.
            if self.select(seed) != QuestStep::Ignored || !holding {
                return;
            }
        }

        let Some(quest) = self.quest.as_ref() else {
            return;
        };
        let flower = quest
            .seeds()
            .iter()
            .filter(|s| s.planted)
            .map(|s| s.id)
            .find(|id| self.flower_position(*id).is_some_and(|p| distance(p, (x, y)) <= FLOWER_RADIUS));
        if let Some(seed) = flower {
            self.view(seed);
            return;
        }

        if distance(SOIL_CENTRE, (x, y)) <= SOIL_RADIUS {
            self.plant();
        }
    }
}

impl Default for JungleMemoryQuest {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for JungleMemoryQuest {
    fn on_enter(&mut self, ctx: &mut StoryContext) {
        self.quest = Some(MemoryQuest::new(ctx.rng()));
    }

    fn handle_input(&mut self, input: &StoryInput, _ctx: &mut StoryContext) {
        match input {
            StoryInput::Action(StoryAction::Select(n)) if *n >= 1 => {
                self.select(usize::from(*n - 1));
            }
            StoryInput::Action(StoryAction::Plant) => self.plant(),
            StoryInput::Action(StoryAction::Dismiss) => self.close_memory(),
            StoryInput::Pointer { x, y } => self.on_pointer(*x, *y),
            _ => {}
        }
    }

    fn update(&mut self, dt: Duration, ctx: &mut StoryContext) {
        self.timers.advance(dt);
        while let Some(Cue::Leave) = self.timers.pop_due() {
            ctx.transition_to(SceneId::PyramidOfEmotions);
        }
    }

    fn status(&self) -> String {
        let Some(quest) = self.quest.as_ref() else {
            return "The jungle".to_string();
        };
        if let Some(memory) = quest.open_memory() {
            return memory.to_string();
        }
        if self.celebrating {
            return "The heart ends the quest.".to_string();
        }
        let carrying = match quest.holding() {
            Some(seed) => format!(" | carrying seed {}", seed + 1),
            None => String::new(),
        };
        format!(
            "Find 3 seeds and plant them in the center soil. Memories: {}/3{}",
            quest.memories_viewed(),
            carrying
        )
    }
}

//=== Geometry ============================================================

fn to_pixels((x_pct, y_pct): (f32, f32)) -> (f32, f32) {
    (x_pct / 100.0 * SCENE_WIDTH, y_pct / 100.0 * SCENE_HEIGHT)
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

//=========================================================================
// Unit Tests
//=========================================================================
