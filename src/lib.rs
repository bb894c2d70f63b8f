//=========================================================================
// Seaglass — Library Root
//
// This crate defines the public API surface of seaglass, a small
// display and input shim.
//
// Responsibilities:
// - Expose the display lifecycle (`DisplayConfig`, `Display`) and the
//   typed event surface (`Event` and its accessors)
// - Keep the winit integration (`platform`) behind the `Shell` facade
// - Provide clean separation between what applications consume and the
//   backend-specific plumbing
//
// Typical usage:
// ```no_run
// use seaglass::{DisplayConfig, Shell};
//
// fn main() {
//     let mut shell = Shell::new(DisplayConfig::new(800, 600));
//     shell.listeners_mut().on_quit(|| println!("bye"));
//     shell.run().expect("platform failure");
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `display` owns the surface lifecycle and its error type. `event` is
// the tagged event representation and its accessors. `input` holds the
// frame queue and the listener registry. `geometry` is the shared
// pixel-space primitives.
//
pub mod display;
pub mod event;
pub mod geometry;
pub mod input;

pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit integration (event loop, window
// creation, event conversion) and is kept private; applications drive
// it through the `Shell` facade.
//
mod platform;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the types nearly every consumer touches, so simple
// applications need only `use seaglass::{Shell, DisplayConfig, Event}`.
//
pub use display::{Display, DisplayConfig, DisplayError};
pub use event::{Event, EventKind, KeyCode, MouseButton};
pub use platform::Shell;
