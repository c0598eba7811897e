//=========================================================================
// Aetheric Story Engine
//
// Main entry point that wires the story onto a window.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init(): bindings + scenes
//         ├─ with_channel_capacity() └─ run(): spawns core thread,
//         ├─ with_seed()                       runs platform,
//         └─ with_title()                      blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{CoreEvent, PlatformEvent};
use crate::core::{input::Action, scene::SceneKey, CoreSystemsOrchestrator};
use crate::core::globals::StorySystems;
use crate::platform::Platform;

//=== Constants ===========================================================

/// Title-only updates; a handful in flight is plenty.
const CORE_EVENT_CAPACITY: usize = 16;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (story ticks per second)
/// - **Channel capacity**: 128 events
/// - **Seed**: none (random layouts differ per run)
/// - **Title**: "Aetheric Story"
///
/// # Examples
///
/// ```no_run
/// use aetheric_story::prelude::*;
///
/// EngineBuilder::<SceneId, StoryAction>::new()
///     .with_tps(120.0)
///     .with_seed(7)
///     .build()
///     .init(aetheric_story::story::install)
///     .run();
/// ```
pub struct EngineBuilder<S: SceneKey, A: Action> {
    tps: f64,
    channel_capacity: usize,
    seed: Option<u64>,
    title: String,
    _phantom: std::marker::PhantomData<(S, A)>,
}

impl<S: SceneKey, A: Action> EngineBuilder<S, A> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            seed: None,
            title: "Aetheric Story".to_string(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the target ticks per second for the story thread.
    ///
    /// Scene timers run on measured wall-clock time, so this only changes
    /// how finely they are sampled.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Fixes the random seed so scatter and spawn positions repeat.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the window title prefix.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine<S, A> {
        info!(
            target: "engine",
            "Building engine (TPS: {}, channel: {}, seed: {:?})",
            self.tps,
            self.channel_capacity,
            self.seed
        );

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(rng),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            title: self.title,
        }
    }
}

impl<S: SceneKey, A: Action> Default for EngineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Story engine runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Story Thread @ TPS)
///   │     └─► InputSystem, Navigator, SceneContext
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling, Title
///
/// Communication: PlatformEvent ──► core, CoreEvent ──► platform
/// ```
pub struct Engine<S: SceneKey, A: Action> {
    orchestrator: CoreSystemsOrchestrator<S, A>,
    tps: f64,
    channel_capacity: usize,
    title: String,
}

impl<S: SceneKey, A: Action> Engine<S, A> {
    //--- Initialization ---------------------------------------------------

    /// Binds keys and registers scenes before the story starts.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut StorySystems<S, A>),
    {
        info!(target: "engine", "Initializing story systems");
        self.orchestrator.init_systems(init_fn);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the story and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core and core → platform channels
    /// 2. Spawns the story thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: core receives `WindowClosed` and terminates
    pub fn run(self) {
        info!(target: "engine", "Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) = bounded(self.channel_capacity);
        let (core_tx, core_rx): (Sender<CoreEvent>, Receiver<CoreEvent>) = bounded(CORE_EVENT_CAPACITY);

        //--- 2. Spawn the story thread -----------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, core_tx, self.tps);
        info!(target: "engine", "Story thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, core_rx, self.title);
        if let Err(e) = platform.run() {
            error!(target: "engine", "Platform error: {}", e);
        }

        info!(target: "engine", "Platform event loop exited");

        //--- 4. Cleanup: Wait for story thread to terminate ---------------
        match core_handle.join() {
            Ok(()) => info!(target: "engine", "Story thread terminated cleanly"),
            Err(e) => error!(target: "engine", "Story thread panicked: {:?}", e),
        }

        info!(target: "engine", "Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::{SceneId, StoryAction};

    type Builder = EngineBuilder<SceneId, StoryAction>;

    #[test]
    fn builder_defaults() {
        let builder = Builder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.seed, None);
        assert_eq!(builder.title, "Aetheric Story");
    }

    #[test]
    fn builder_with_tps() {
        assert_eq!(Builder::new().with_tps(120.0).tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        Builder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        Builder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        Builder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = Builder::new()
            .with_tps(30.0)
            .with_channel_capacity(256)
            .with_seed(9)
            .with_title("For you")
            .build();

        assert_eq!(engine.tps, 30.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.title, "For you");
    }

    #[test]
    fn init_installs_story() {
        let engine = Builder::new().with_seed(1).build().init(crate::story::install);
        assert_eq!(engine.orchestrator.systems().navigator.registered_count(), SceneId::ALL.len());
    }
}
