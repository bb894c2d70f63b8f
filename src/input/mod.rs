//=========================================================================
// Input Subsystem
//
// Frame buffering and fan-out for normalized events.
//
// Components:
// - `queue`: per-frame buffer with duplicate suppression and motion
//   coalescing (filled by the platform layer)
// - `listeners`: callback registry and channel taps (drained into at
//   the frame boundary)
//
//=========================================================================

//=== Submodules ==========================================================

pub mod listeners;
pub mod queue;

//=== Public Exports ======================================================

pub use listeners::{ListenerId, Listeners};
pub use queue::EventQueue;
