//=========================================================================
// Story Errors
//=========================================================================
//
// Error taxonomy of the story core.
//
// Only navigation can fail. Mini-game misuse (misclicks, planting with
// empty hands, ...) is modelled as no-ops or defined resets inside the
// games themselves and never surfaces here.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== StoryError ==========================================================

/// Errors raised by scene navigation.
///
/// The navigator logs and ignores these while processing queued
/// transitions; they are returned to direct callers of
/// [`crate::core::scene::Navigator::transition_to`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoryError {
    /// The identifier does not name any scene.
    #[error("invalid scene identifier: {0:?}")]
    InvalidScene(String),

    /// The scene exists but no factory was registered for it.
    #[error("scene {0} is not registered")]
    UnregisteredScene(String),
}

/// Result alias for story operations.
pub type Result<T> = std::result::Result<T, StoryError>;

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_scene_message_quotes_the_name() {
        let err = StoryError::InvalidScene("attic".to_string());
        assert_eq!(err.to_string(), "invalid scene identifier: \"attic\"");
    }

    #[test]
    fn unregistered_scene_message_names_the_scene() {
        let err = StoryError::UnregisteredScene("MakingOf".to_string());
        assert_eq!(err.to_string(), "scene MakingOf is not registered");
    }

    #[test]
    fn story_error_is_error_trait() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<StoryError>();
    }
}
