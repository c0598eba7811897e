//=========================================================================
// Scene Identifiers
//=========================================================================
//
// The closed set of story scenes and the forward graph between them.
//
//   Intro → LateRoom → TimeTheory → TimeTravelGame → FixedTimelineRoom
//     → AdventureChoice → JungleMemoryQuest → PyramidOfEmotions
//     → MainMessage → WishInteraction → RatingMessage → MakingOf
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::scene::SceneKey;

//=== SceneId =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneId {
    #[default]
    Intro,
    LateRoom,
    TimeTheory,
    TimeTravelGame,
    FixedTimelineRoom,
    AdventureChoice,
    JungleMemoryQuest,
    PyramidOfEmotions,
    MainMessage,
    WishInteraction,
    RatingMessage,
    MakingOf,
}

impl SceneId {
    /// Every scene, in story order.
    pub const ALL: [SceneId; 12] = [
        SceneId::Intro,
        SceneId::LateRoom,
        SceneId::TimeTheory,
        SceneId::TimeTravelGame,
        SceneId::FixedTimelineRoom,
        SceneId::AdventureChoice,
        SceneId::JungleMemoryQuest,
        SceneId::PyramidOfEmotions,
        SceneId::MainMessage,
        SceneId::WishInteraction,
        SceneId::RatingMessage,
        SceneId::MakingOf,
    ];

    /// The scene that follows this one. Both answers of the adventure
    /// choice continue into the jungle, so the graph stays linear.
    pub fn next(self) -> Option<SceneId> {
        match self {
            SceneId::Intro => Some(SceneId::LateRoom),
            SceneId::LateRoom => Some(SceneId::TimeTheory),
            SceneId::TimeTheory => Some(SceneId::TimeTravelGame),
            SceneId::TimeTravelGame => Some(SceneId::FixedTimelineRoom),
            SceneId::FixedTimelineRoom => Some(SceneId::AdventureChoice),
            SceneId::AdventureChoice => Some(SceneId::JungleMemoryQuest),
            SceneId::JungleMemoryQuest => Some(SceneId::PyramidOfEmotions),
            SceneId::PyramidOfEmotions => Some(SceneId::MainMessage),
            SceneId::MainMessage => Some(SceneId::WishInteraction),
            SceneId::WishInteraction => Some(SceneId::RatingMessage),
            SceneId::RatingMessage => Some(SceneId::MakingOf),
            SceneId::MakingOf => None,
        }
    }
}

impl SceneKey for SceneId {
    fn name(&self) -> &'static str {
        match self {
            SceneId::Intro => "intro",
            SceneId::LateRoom => "late_room",
            SceneId::TimeTheory => "time_theory",
            SceneId::TimeTravelGame => "time_travel_game",
            SceneId::FixedTimelineRoom => "fixed_timeline_room",
            SceneId::AdventureChoice => "adventure_choice",
            SceneId::JungleMemoryQuest => "jungle_memory_quest",
            SceneId::PyramidOfEmotions => "pyramid_of_emotions",
            SceneId::MainMessage => "main_message",
            SceneId::WishInteraction => "wish_interaction",
            SceneId::RatingMessage => "rating_message",
            SceneId::MakingOf => "making_of",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        SceneId::ALL.into_iter().find(|id| id.name() == name)
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
