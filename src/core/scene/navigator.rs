//=========================================================================
// Scene Navigator
//=========================================================================
//
// Owns the mounted scene and the only sanctioned way to replace it.
//
// Scenes are registered as factories keyed by scene id. Exactly one
// scene is mounted at a time; which one is recorded in the story store.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::error::{Result, StoryError};
use crate::core::globals::SceneContext;
use crate::core::input::{Action, SceneInput};

//=== Scene Key Trait =====================================================

/// Identifier of a scene in a closed set.
///
/// `Default` designates the initial scene. `from_name` is the validation
/// point for identifiers coming from outside the type system.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Default + Send + 'static {
    /// Stable, human-readable identifier.
    fn name(&self) -> &'static str;

    /// Parses an identifier produced by [`SceneKey::name`].
    fn from_name(name: &str) -> Option<Self>;
}

//=== Internal Types ======================================================

type SceneFactory<S, A> = Box<dyn Fn() -> Box<dyn Scene<S, A>> + Send>;

struct ActiveScene<S: SceneKey, A: Action> {
    key: S,
    scene: Box<dyn Scene<S, A>>,
}

//=== Navigator ===========================================================

/// Mounts, updates and replaces scenes.
pub struct Navigator<S: SceneKey, A: Action> {
    factories: HashMap<S, SceneFactory<S, A>>,
    active: Option<ActiveScene<S, A>>,
}

impl<S: SceneKey, A: Action> Navigator<S, A> {
    //--- Construction -----------------------------------------------------

    /// Creates a navigator with no registered scenes.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            active: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers the factory that builds a fresh instance of scene `key`.
    ///
    /// ```rust
    /// # use std::time::Duration;
    /// # use aetheric_story::prelude::*;
    /// # struct Credits;
    /// # impl Scene<SceneId, StoryAction> for Credits {
    /// #     fn update(&mut self, _dt: Duration, _ctx: &mut SceneContext<SceneId>) {}
    /// #     fn status(&self) -> String { String::new() }
    /// # }
    /// let mut navigator = Navigator::<SceneId, StoryAction>::new();
    /// navigator.register_scene(SceneId::MakingOf, || Credits);
    /// assert!(navigator.is_registered(SceneId::MakingOf));
    /// ```
    pub fn register_scene<T, F>(&mut self, key: S, factory: F)
    where
        T: Scene<S, A> + 'static,
        F: Fn() -> T + Send + 'static,
    {
        let boxed: SceneFactory<S, A> = Box::new(move || Box::new(factory()));
        if self.factories.insert(key, boxed).is_some() {
            warn!(target: "story::navigator", "Scene {:?} was already registered and has been replaced", key);
        }
    }

    pub fn is_registered(&self, key: S) -> bool {
        self.factories.contains_key(&key)
    }

    pub fn registered_count(&self) -> usize {
        self.factories.len()
    }

    //--- Lifecycle --------------------------------------------------------

    /// Mounts the store's current scene.
    pub fn start(&mut self, context: &mut SceneContext<S>) {
        let initial = context.store().current_scene();
        if self.active.is_some() {
            warn!(target: "story::navigator", "Navigator already started");
            return;
        }
        if !self.mount(initial, context) {
            warn!(target: "story::navigator", "Initial scene {:?} not registered", initial);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// The scene the store says is on screen.
    pub fn current_scene(&self, context: &SceneContext<S>) -> S {
        context.store().current_scene()
    }

    /// Key of the mounted scene instance, if any.
    pub fn active_scene(&self) -> Option<S> {
        self.active.as_ref().map(|active| active.key)
    }

    /// Status line of the mounted scene.
    pub fn status(&self) -> Option<String> {
        self.active.as_ref().map(|active| active.scene.status())
    }

    //--- Transitions ------------------------------------------------------

    /// Replaces the mounted scene with a fresh instance of `target`.
    ///
    /// The old scene gets `on_exit` and is dropped before the store moves,
    /// so none of its timers can fire afterwards. Transitioning to the
    /// scene that is already current is a no-op.
    ///
    /// # Errors
    ///
    /// [`StoryError::UnregisteredScene`] if `target` has no factory; the
    /// current scene stays mounted.
    pub fn transition_to(&mut self, target: S, context: &mut SceneContext<S>) -> Result<()> {
        if !self.is_registered(target) {
            return Err(StoryError::UnregisteredScene(target.name().to_string()));
        }

        let current = context.store().current_scene();
        if current == target && self.active.is_some() {
            debug!(target: "story::navigator", "Scene {:?} is already current, skipping", target);
            return Ok(());
        }

        if let Some(mut old) = self.active.take() {
            debug!(target: "story::navigator", "Unmounting scene {:?}", old.key);
            old.scene.on_exit(context);
        }

        context.store_mut().set_current_scene(target);
        self.mount(target, context);

        info!(target: "story::navigator", "Scene {:?} -> {:?}", current, target);
        Ok(())
    }

    /// Parses `name` and transitions to that scene.
    ///
    /// # Errors
    ///
    /// [`StoryError::InvalidScene`] for unknown names, otherwise as
    /// [`Navigator::transition_to`].
    pub fn transition_to_named(&mut self, name: &str, context: &mut SceneContext<S>) -> Result<()> {
        let target = S::from_name(name).ok_or_else(|| StoryError::InvalidScene(name.to_string()))?;
        self.transition_to(target, context)
    }

    /// Applies the transitions queued on the context, in FIFO order.
    ///
    /// Requests made by a scene that is no longer current are dropped;
    /// failures are logged and ignored.
    pub fn process_transitions(&mut self, context: &mut SceneContext<S>) {
        for transition in context.take_transitions() {
            let current = context.store().current_scene();
            if transition.from != current {
                debug!(
                    target: "story::navigator",
                    "Dropping stale transition {:?} -> {:?} (current: {:?})",
                    transition.from,
                    transition.to,
                    current
                );
                continue;
            }

            if let Err(e) = self.transition_to(transition.to, context) {
                warn!(target: "story::navigator", "Ignoring transition from {:?}: {}", transition.from, e);
            }
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Forwards this frame's inputs to the mounted scene.
    pub fn handle_input(&mut self, inputs: &[SceneInput<A>], context: &mut SceneContext<S>) {
        if let Some(active) = self.active.as_mut() {
            for input in inputs {
                active.scene.handle_input(input, context);
            }
        }
    }

    /// Ticks the mounted scene.
    pub fn update(&mut self, dt: Duration, context: &mut SceneContext<S>) {
        if let Some(active) = self.active.as_mut() {
            active.scene.update(dt, context);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn mount(&mut self, key: S, context: &mut SceneContext<S>) -> bool {
        let Some(factory) = self.factories.get(&key) else {
            return false;
        };

        debug!(target: "story::navigator", "Mounting scene {:?}", key);
        let mut scene = factory();
        scene.on_enter(context);
        self.active = Some(ActiveScene { key, scene });
        true
    }
}

impl<S: SceneKey, A: Action> Default for Navigator<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
