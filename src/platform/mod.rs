//=========================================================================
// Platform Shell
//
// Owns the winit event loop and wires the crate's pieces together.
//
// Architecture:
// ```text
//  Main Thread (event loop):
//  ┌─────────────────────────────┐
//  │  Winit Event Loop           │
//  │   ↓                         │
//  │  EventMapper                │
//  │   ├─ Converts winit types   │
//  │   └─ Tracks cursor          │
//  │   ↓                         │
//  │  EventQueue                 │
//  │   ├─ dedup discrete         │
//  │   └─ coalesce motion        │
//  │   ↓                         │
//  │  RedrawRequested (flush)    │
//  │   ↓                         │
//  │  Listeners ──► callbacks    │
//  │            └─► channel taps │
//  └─────────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input dispatched in order
//    → Next frame requested afterwards
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: input is dispatched in one
//   batch per frame, in arrival order, even under high event rates
// - **One display per shell**: a second open while a surface is live is
//   an `AlreadyOpen` error; winit's resume re-entry on mobile is
//   tolerated and logged
// - **Synchronous dispatch**: everything runs on the thread that called
//   `run()` (winit mandates the main thread on macOS/iOS); consumers
//   that want another thread use a channel tap
//
// Responsibilities:
// - Create and close the display surface
// - Convert winit events → `Event`s and buffer them
// - Dispatch buffered events at the frame boundary
// - Turn close requests into a dispatched `Quit` and a clean exit
//
//=========================================================================

//=== Submodules ==========================================================

mod mapper;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::WindowId,
};

//=== Internal Imports ====================================================

use crate::display::{Display, DisplayConfig, DisplayError};
use crate::event::Event;
use crate::input::{EventQueue, Listeners};
use mapper::EventMapper;

//=== Shell ===============================================================

/// Display owner and event pump.
///
/// Register listeners, then call [`Shell::run`]; the shell opens the
/// display once the event loop is live, feeds input through the mapper
/// and queue, and dispatches each frame's batch to the listeners.
///
/// # Lifecycle
///
/// 1. **Construction**: `Shell::new(config)`
/// 2. **Registration**: `shell.listeners_mut().on_key_down(...)`
/// 3. **Execution**: `shell.run()` — blocks until the display closes
/// 4. **Shutdown**: close request → `Quit` dispatched → loop exits →
///    display closed
///
/// # Examples
///
/// ```no_run
/// use seaglass::{DisplayConfig, KeyCode, Shell};
///
/// let mut shell = Shell::new(DisplayConfig::new(800, 600).title("demo"));
/// shell.listeners_mut().on_key_down(|key| {
///     if key == KeyCode::Escape {
///         println!("escape pressed");
///     }
/// });
/// shell.run().expect("platform failure");
/// ```
pub struct Shell {
    /// Surface parameters applied at open.
    config: DisplayConfig,

    /// The display context (None until the event loop resumes).
    display: Option<Display>,

    /// Converts winit events and tracks the cursor.
    mapper: EventMapper,

    /// Buffers events until the frame boundary.
    queue: EventQueue,

    /// Callback registry and channel taps.
    listeners: Listeners,
}

impl Shell {
    //--- Construction -----------------------------------------------------

    /// Creates a shell for the given display configuration.
    ///
    /// No window exists yet; that happens inside [`Shell::run`] when the
    /// event loop delivers `resumed`.
    pub fn new(config: DisplayConfig) -> Self {
        info!(target: "shell", "Shell initialized");
        Self {
            config,
            display: None,
            mapper: EventMapper::new(),
            queue: EventQueue::new(),
            listeners: Listeners::new(),
        }
    }

    /// Access to the listener registry for registration and removal.
    pub fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    /// The display context, once open.
    pub fn display(&self) -> Option<&Display> {
        self.display.as_ref()
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the display closes.
    ///
    /// Blocks on the calling thread. On exit the display is closed and
    /// the close logged.
    ///
    /// # Errors
    ///
    /// [`DisplayError::EventLoop`] if the platform event loop cannot be
    /// created or fails while running. Window-creation failure inside
    /// the loop is logged and ends the loop (winit reports it to us
    /// asynchronously, after `run` has already been entered).
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (winit requirement on
    /// macOS/iOS).
    pub fn run(mut self) -> Result<(), DisplayError> {
        debug!(target: "shell", "Starting event loop");

        let event_loop = EventLoop::new().map_err(|e| DisplayError::EventLoop(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| DisplayError::EventLoop(e.to_string()))?;

        if let Some(display) = self.display.as_mut() {
            if display.is_open() {
                display.close()?;
            }
        }

        info!(target: "shell", "Event loop exited");
        Ok(())
    }

    //--- Internal Helpers -------------------------------------------------

    /// Opens the display, refusing while a surface is already live.
    fn open_display(&mut self, event_loop: &ActiveEventLoop) -> Result<(), DisplayError> {
        if self.display.is_some() {
            return Err(DisplayError::AlreadyOpen);
        }

        let display = Display::open(event_loop, &self.config)?;
        display.request_redraw();
        self.display = Some(display);
        Ok(())
    }

    /// Dispatches the frame's buffered events in order.
    fn flush_events(&mut self) {
        let events = self.queue.drain();
        if events.is_empty() {
            return;
        }

        trace!(target: "shell::input", "Dispatching {} event(s)", events.len());
        for event in &events {
            self.listeners.dispatch(event);
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Shell {
    /// Called when the app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        match self.open_display(event_loop) {
            Ok(()) => {}
            Err(DisplayError::AlreadyOpen) => {
                debug!(target: "shell", "Display already open (mobile resume?)");
            }
            Err(e) => {
                error!(target: "shell", "{}", e);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "shell", "Close requested");
                self.queue.push(Event::Quit);
                self.flush_events();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.mapper.map_key(key_event.physical_key, key_event.state) {
                    Some(event) => self.queue.push(event),
                    None => trace!(target: "shell::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.mapper.map_mouse_button(button, state);
                self.queue.push(event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.mapper.map_cursor_moved(position.x, position.y);
                self.queue.push(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(event) = self.mapper.map_scroll(delta) {
                    self.queue.push(event);
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: dispatch everything buffered this frame
                self.flush_events();

                if let Some(display) = &self.display {
                    display.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, Focused, etc. (not needed for input)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
