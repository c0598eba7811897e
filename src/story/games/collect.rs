//=========================================================================
// Memory Quest
//=========================================================================
//
// Collect-and-plant quest: three seeds lie hidden under leaves on the
// jungle floor. Each must be uncovered, carried (one at a time) to the
// soil in the centre and planted; a planted seed blooms into a memory.
//
//   covered → reveal() → pick_up() → plant() → view_memory()
//
// The quest completes once all three memories have been read.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::Rng;

//=== Constants ===========================================================

pub const SEED_COUNT: usize = 3;

/// Memory revealed by each seed, by seed id.
pub const MEMORIES: [&str; SEED_COUNT] = [
    "Remember when we stayed up all night just talking? That was the moment I knew you were my best friend.",
    "That time you shared your lunch when I forgot mine... smallest gesture, biggest heart.",
    "Watching you grow from a little kid into this amazing person has been my greatest privilege.",
];

//=== Seed ================================================================

/// One seed and the leaf hiding it. Positions are percentages of the
/// scene's width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed {
    pub id: usize,
    pub position: (f32, f32),
    pub covered: bool,
    pub collected: bool,
    pub planted: bool,
}

//=== QuestStep ===========================================================

/// Result of a contextual selection of a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestStep {
    Revealed,
    PickedUp,
    MemoryOpened,
    Ignored,
}

//=== MemoryQuest =========================================================

#[derive(Debug, Clone)]
pub struct MemoryQuest {
    seeds: Vec<Seed>,
    holding: Option<usize>,
    viewed: [bool; SEED_COUNT],
    open_memory: Option<usize>,
}

impl MemoryQuest {
    /// Scatters the seeds over the lower part of the jungle floor.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let seeds = (0..SEED_COUNT)
            .map(|id| Seed {
                id,
                position: (rng.random_range(10.0..90.0), rng.random_range(65.0..90.0)),
                covered: true,
                collected: false,
                planted: false,
            })
            .collect();

        Self {
            seeds,
            holding: None,
            viewed: [false; SEED_COUNT],
            open_memory: None,
        }
    }

    //--- Operations -------------------------------------------------------

    /// Brushes away the leaf over `seed`.
    pub fn reveal(&mut self, seed: usize) -> bool {
        match self.seeds.get_mut(seed) {
            Some(s) if s.covered => {
                s.covered = false;
                true
            }
            _ => false,
        }
    }

    /// Picks up an uncovered seed. Only one seed can be carried at a time.
    pub fn pick_up(&mut self, seed: usize) -> bool {
        if self.holding.is_some() {
            return false;
        }
        match self.seeds.get_mut(seed) {
            Some(s) if !s.covered && !s.collected => {
                s.collected = true;
                self.holding = Some(seed);
                true
            }
            _ => false,
        }
    }

    /// Plants the carried seed. Returns its id.
    pub fn plant(&mut self) -> Option<usize> {
        let seed = self.holding.take()?;
        self.seeds[seed].planted = true;
        Some(seed)
    }

    /// Opens the memory of a planted seed. Reading the same memory again
    /// reopens it without counting twice.
    pub fn view_memory(&mut self, seed: usize) -> bool {
        match self.seeds.get(seed) {
            Some(s) if s.planted => {
                self.viewed[seed] = true;
                self.open_memory = Some(seed);
                true
            }
            _ => false,
        }
    }

    pub fn close_memory(&mut self) -> bool {
        self.open_memory.take().is_some()
    }

    /// Advances `seed` one step along its path: uncover, pick up, read.
    pub fn select(&mut self, seed: usize) -> QuestStep {
        let Some(s) = self.seeds.get(seed).copied() else {
            return QuestStep::Ignored;
        };

        if s.covered {
            self.reveal(seed);
            QuestStep::Revealed
        } else if !s.collected {
            if self.pick_up(seed) {
                QuestStep::PickedUp
            } else {
                QuestStep::Ignored
            }
        } else if s.planted {
            self.view_memory(seed);
            QuestStep::MemoryOpened
        } else {
            QuestStep::Ignored
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    pub fn holding(&self) -> Option<usize> {
        self.holding
    }

    /// The memory currently shown, if any.
    pub fn open_memory(&self) -> Option<&'static str> {
        self.open_memory.map(|seed| MEMORIES[seed])
    }

    /// Distinct memories read so far.
    pub fn memories_viewed(&self) -> usize {
        self.viewed.iter().filter(|v| **v).count()
    }

    pub fn planted_count(&self) -> usize {
        self.seeds.iter().filter(|s| s.planted).count()
    }

    pub fn is_complete(&self) -> bool {
        self.memories_viewed() == SEED_COUNT
    }

    /// Moves a seed (and its leaf) to a fixed spot, in percent.
    #[cfg(test)]
    pub(crate) fn place_seed(&mut self, seed: usize, position: (f32, f32)) {
        if let Some(s) = self.seeds.get_mut(seed) {
            s.position = position;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quest() -> MemoryQuest {
        MemoryQuest::new(&mut StdRng::seed_from_u64(3))
    }

    fn plant_seed(quest: &mut MemoryQuest, seed: usize) {
        quest.reveal(seed);
        assert!(quest.pick_up(seed));
        assert_eq!(quest.plant(), Some(seed));
    }

    #[test]
    fn seeds_start_covered_in_lower_area() {
        let quest = quest();
        assert_eq!(quest.seeds().len(), SEED_COUNT);
        for seed in quest.seeds() {
            assert!(seed.covered && !seed.collected && !seed.planted);
            assert!((10.0..90.0).contains(&seed.position.0));
            assert!((65.0..90.0).contains(&seed.position.1), "Seed {} not on the floor", seed.id);
        }
    }

    #[test]
    fn reveal_does_not_touch_seed_progress() {
        let mut quest = quest();
        assert!(quest.reveal(1));
        assert!(!quest.reveal(1), "Leaf is already gone");

        let seed = quest.seeds()[1];
        assert!(!seed.covered);
        assert!(!seed.collected);
        assert_eq!(quest.holding(), None);
    }

    #[test]
    fn covered_seed_cannot_be_picked_up() {
        let mut quest = quest();
        assert!(!quest.pick_up(0));
        assert_eq!(quest.holding(), None);
    }

    #[test]
    fn only_one_seed_carried_at_a_time() {
        let mut quest = quest();
        quest.reveal(0);
        quest.reveal(1);

        assert!(quest.pick_up(0));
        assert!(!quest.pick_up(1), "Second pick-up while holding must be refused");
        assert_eq!(quest.holding(), Some(0));
        assert!(!quest.seeds()[1].collected);
    }

    #[test]
    fn collected_seed_cannot_be_picked_up_again() {
        let mut quest = quest();
        plant_seed(&mut quest, 2);
        assert!(!quest.pick_up(2));
        assert_eq!(quest.holding(), None);
    }

    #[test]
    fn plant_without_seed_is_noop() {
        let mut quest = quest();
        assert_eq!(quest.plant(), None);
        assert_eq!(quest.planted_count(), 0);
    }

    #[test]
    fn memory_only_opens_for_planted_seed() {
        let mut quest = quest();
        assert!(!quest.view_memory(0));

        plant_seed(&mut quest, 0);
        assert!(quest.view_memory(0));
        assert_eq!(quest.open_memory(), Some(MEMORIES[0]));
        assert!(quest.close_memory());
        assert_eq!(quest.open_memory(), None);
        assert!(!quest.close_memory());
    }

    #[test]
    fn viewing_twice_counts_once() {
        let mut quest = quest();
        plant_seed(&mut quest, 1);

        quest.view_memory(1);
        quest.close_memory();
        quest.view_memory(1);

        assert_eq!(quest.memories_viewed(), 1);
        assert!(!quest.is_complete());
    }

    #[test]
    fn select_walks_a_seed_through_its_steps() {
        let mut quest = quest();
        assert_eq!(quest.select(0), QuestStep::Revealed);
        assert_eq!(quest.select(0), QuestStep::PickedUp);
        assert_eq!(quest.select(0), QuestStep::Ignored, "Carried seed must be planted first");
        quest.plant();
        assert_eq!(quest.select(0), QuestStep::MemoryOpened);
        assert_eq!(quest.select(7), QuestStep::Ignored);
    }

    #[test]
    fn three_distinct_memories_complete_the_quest() {
        let mut quest = quest();
        for seed in 0..SEED_COUNT {
            plant_seed(&mut quest, seed);
            quest.view_memory(seed);
            quest.close_memory();
        }
        assert!(quest.is_complete());
    }
}
