//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the story running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Own the story runtime (input bindings, navigator, scene context)
// - Receive platform events through the bridge channel
// - Maintain steady pacing using a fixed tick rate (TPS)
// - Publish the mounted scene's status line back to the platform
//
// Notes:
// The orchestrator runs independently from the platform layer.
// Communication with the platform occurs only through message passing,
// so no story state is ever shared across threads.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, info, trace};
use rand::rngs::StdRng;

//=== Internal Modules ====================================================
pub mod error;
pub mod globals;
pub mod input;
pub(crate) mod platform_bridge;
pub mod runtime;
pub mod scene;
pub mod store;
pub mod timer;

use globals::StorySystems;
use input::Action;
use platform_bridge::{CoreEvent, EventCollector, PlatformEvent, TickControl};
use runtime::StoryRuntime;
use scene::SceneKey;

//=== CoreSystemsOrchestrator =============================================
//
// Holds the configured systems until the logic thread takes them over.
//
pub(crate) struct CoreSystemsOrchestrator<S: SceneKey, A: Action> {
    systems: StorySystems<S, A>,
    rng: StdRng,
}

impl<S: SceneKey, A: Action> CoreSystemsOrchestrator<S, A> {
    //--- Construction -----------------------------------------------------

    pub fn new(rng: StdRng) -> Self {
        Self {
            systems: StorySystems::new(),
            rng,
        }
    }

    /// Gives the caller one chance to bind keys and register scenes.
    pub fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut StorySystems<S, A>),
    {
        init_fn(&mut self.systems);
        debug!(
            target: "core",
            "Systems ready ({} bindings, {} scenes)",
            self.systems.input.binding_count(),
            self.systems.navigator.registered_count()
        );
    }

    #[cfg(test)]
    pub(crate) fn systems(&self) -> &StorySystems<S, A> {
        &self.systems
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread that ticks the story at a fixed rate.
    //
    // Each tick:
    //  1. Collects platform input batches
    //  2. Runs one runtime frame with the measured wall-clock delta
    //  3. Publishes the status line until the platform has received it
    //  4. Sleeps to maintain pacing
    //  5. Exits cleanly when a shutdown signal is received
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        core_tx: Sender<CoreEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            let mut runtime = StoryRuntime::new(self.systems, self.rng);
            runtime.start();

            let mut title = TitlePublisher::new(core_tx);
            let mut last_tick = Instant::now();

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if let TickControl::Exit = collector.collect_frame() {
                    info!(target: "core", "Core thread exiting.");
                    break;
                }

                //--- Step 2: Run the story ---------------------------------
                let dt = frame_start.duration_since(last_tick);
                last_tick = frame_start;
                runtime.frame(collector.batches(), dt);

                //--- Step 3: Publish status --------------------------------
                title.offer(runtime.status());

                //--- Step 4: Maintain pacing -------------------------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}

//=== TitlePublisher ======================================================
//
// Sends the status line to the platform whenever it changes. A status
// counts as published only once the channel accepted it, so a title
// dropped on a full channel is offered again on the next tick.
//
struct TitlePublisher {
    core_tx: Sender<CoreEvent>,
    published: String,
}

impl TitlePublisher {
    fn new(core_tx: Sender<CoreEvent>) -> Self {
        Self {
            core_tx,
            published: String::new(),
        }
    }

    /// Returns `true` if `status` is what the platform last received.
    fn offer(&mut self, status: String) -> bool {
        if status == self.published {
            return true;
        }
        match self.core_tx.try_send(CoreEvent::Title(status.clone())) {
            Ok(()) => {
                self.published = status;
                true
            }
            Err(TrySendError::Full(_)) => {
                trace!(target: "core", "Core event channel full, retrying next tick");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                trace!(target: "core", "Platform gone, dropping update");
                false
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
