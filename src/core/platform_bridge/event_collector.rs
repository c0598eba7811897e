//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side drain of the platform channel, one tick at a time.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input_batches → TickControl
//
// Draining is bounded so a flood of pointer motion cannot stall a tick.
// Pacing belongs to the core loop, not to the collector.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== Constants ===========================================================

const MAX_EVENTS_PER_FRAME: usize = 100;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects the input batches the platform sent since the last tick.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
        }
    }

    /// Drains pending platform events into this frame's batches.
    ///
    /// Returns [`TickControl::Exit`] once the window closes or the
    /// platform side of the channel is gone.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();
        let mut drained = 0;

        while drained < MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                    if !discrete.is_empty() {
                        self.input_batches.push(discrete);
                    }
                    if !continuous.is_empty() {
                        self.input_batches.push(continuous);
                    }
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => {
                    trace!(target: "core::bridge", "Window closed after {} batches", drained);
                    return TickControl::Exit;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= MAX_EVENTS_PER_FRAME {
            warn!(target: "core::bridge", "Event queue backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Returns collected input batches for this frame.
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
