//=========================================================================
// Mini-games
//=========================================================================
//
// Scene-independent game state. Each scene owns one instance and drops
// it on unmount; timing lives in the scene.
//
//=========================================================================

pub mod collect;
pub mod countdown;
pub mod sequence;

pub use collect::{MemoryQuest, QuestStep, Seed};
pub use countdown::{Countdown, Hazard, HazardField, Steer, TickOutcome};
pub use sequence::{Chamber, SequencePuzzle, TileOutcome};
