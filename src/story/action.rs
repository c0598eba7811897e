//=========================================================================
// Story Actions
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::Action;

//=== StoryAction =========================================================

/// What the player asked for, independent of the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryAction {
    /// Advance, confirm or submit.
    Continue,
    /// Answer "yes".
    Accept,
    /// Answer "no".
    Decline,
    /// Pick the numbered item (1-based).
    Select(u8),
    /// Plant the carried seed.
    Plant,
    /// Close an overlay.
    Dismiss,
    /// Delete the last typed character.
    Erase,
    Previous,
    Next,
}

impl Action for StoryAction {}
