//=========================================================================
// Story State Store
//=========================================================================
//
// Session-scoped story state: which scene is on screen plus the few
// pieces of text the user enters along the way.
//
// Lives inside the `SceneContext` and is handed to every scene
// explicitly. Only the navigator moves `current_scene`; scenes write
// user data through the named setters below.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::scene::SceneKey;

//=== StoryStore ==========================================================

/// Single source of truth for the current scene and user-entered data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryStore<S: SceneKey> {
    current_scene: S,
    wish: String,
    rating: Option<String>,
    message: String,
}

impl<S: SceneKey> StoryStore<S> {
    /// Creates a store positioned on the scene key's default (initial) scene.
    pub fn new() -> Self {
        Self {
            current_scene: S::default(),
            wish: String::new(),
            rating: None,
            message: String::new(),
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn current_scene(&self) -> S {
        self.current_scene
    }

    pub fn wish(&self) -> &str {
        &self.wish
    }

    /// The favourite part picked on the rating form, if submitted.
    pub fn rating(&self) -> Option<&str> {
        self.rating.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    //--- Setters ----------------------------------------------------------

    pub fn set_wish(&mut self, wish: impl Into<String>) {
        self.wish = wish.into();
    }

    pub fn set_rating(&mut self, rating: impl Into<String>) {
        self.rating = Some(rating.into());
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub(in crate::core) fn set_current_scene(&mut self, scene: S) {
        self.current_scene = scene;
    }
}

impl<S: SceneKey> Default for StoryStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
