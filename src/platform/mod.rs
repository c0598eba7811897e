//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the story's core thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  StoryRuntime    │
//  │   ↓                      │    │   ├─ InputSystem │
//  │  InputProcessor          │    │   └─ Navigator   │
//  │   ↓                      │    │        ↓         │
//  │  InputBuffer             │    │   status line    │
//  │   ↓                      │    │                  │
//  │  RedrawRequested ────────┼───>│  PlatformEvent   │
//  │   (flush input)          │    │                  │
//  │  set_title() <───────────┼────┤  CoreEvent       │
//  └──────────────────────────┘    └──────────────────┘
// ```
//
// Frame Boundary: RedrawRequested
//   → All buffered input sent as one batch
//   → Pending title updates from core are applied
//
// Responsibilities:
// - Create and manage the OS window
// - Convert Winit types → story InputEvents (logical pixels)
// - Buffer input until frame boundary
// - Mirror the mounted scene's status line into the window title
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{CoreEvent, PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Constants ===========================================================

/// Logical window size; matches the hazard playfield.
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

//=== Platform ============================================================

/// Window manager and input event aggregator.
///
/// Runs on the main thread (Winit requirement on macOS/iOS). It is not
/// `Send`; everything crossing to the core goes through the channels.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    core_receiver: Receiver<CoreEvent>,
    input_processor: InputProcessor,
    title: String,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(
        event_sender: Sender<PlatformEvent>,
        core_receiver: Receiver<CoreEvent>,
        title: impl Into<String>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            core_receiver,
            input_processor: InputProcessor::new(),
            title: title.into(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop on the calling thread until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// exits abnormally.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the core thread. A dead core only costs a warning.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                );
            }
        }
    }

    /// Applies the latest status line the core published, if any.
    fn apply_core_events(&mut self) -> Option<String> {
        let mut latest = None;
        while let Ok(event) = self.core_receiver.try_recv() {
            match event {
                CoreEvent::Title(status) => latest = Some(status),
            }
        }

        let status = latest?;
        let title = format!("{} | {}", self.title, status);
        if let Some(window) = &self.window {
            window.set_title(&title);
        }
        debug!(target: "platform", "{}", status);
        Some(title)
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.input_processor.set_scale_factor(window.scale_factor());
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.shutdown(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.shutdown(event_loop);
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.input_processor.set_scale_factor(*scale_factor);
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(position.x, position.y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                }
                if let Some(text) = self.input_processor.process_text(key_event) {
                    self.buffer.push_discrete(text);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                // Pin the cursor position in order so the press lands where it happened.
                if *state == ElementState::Pressed {
                    self.buffer.push_discrete(self.input_processor.cursor_event());
                }
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();
                self.apply_core_events();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::InputEvent;
    use crate::core::input::{KeyCode, Modifiers};
    use crossbeam_channel::unbounded;

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<CoreEvent>) {
        let (tx, rx) = unbounded();
        let (core_tx, core_rx) = unbounded();
        (Platform::new(tx, core_rx, "Story"), rx, core_tx)
    }

    #[test]
    fn window_is_created_lazily() {
        let (platform, _rx, _core_tx) = platform();
        assert!(platform.window.is_none());
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _core_tx) = platform();
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events_once() {
        let (mut platform, rx, _core_tx) = platform();
        platform.buffer.push_discrete(InputEvent::KeyDown {
            key: KeyCode::Enter,
            modifiers: Modifiers::NONE,
        });

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete.len(), 1);
                assert!(continuous.is_empty());
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn flush_survives_disconnected_core() {
        let (mut platform, rx, _core_tx) = platform();
        platform.buffer.push_discrete(InputEvent::Text("x".into()));
        drop(rx);

        platform.flush_input_buffer();
    }

    #[test]
    fn latest_status_wins_in_title() {
        let (mut platform, _rx, core_tx) = platform();
        core_tx.send(CoreEvent::Title("Intro: 40%".into())).unwrap();
        core_tx.send(CoreEvent::Title("Intro: 41%".into())).unwrap();

        assert_eq!(platform.apply_core_events().as_deref(), Some("Story | Intro: 41%"));
        assert_eq!(platform.apply_core_events(), None);
    }

    #[test]
    fn platform_error_messages() {
        let err = PlatformError::EventLoopCreation("no display".into());
        assert_eq!(err.to_string(), "Event loop creation failed: no display");
    }
}
