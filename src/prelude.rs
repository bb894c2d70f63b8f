//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use seaglass::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Display lifecycle
pub use crate::display::{Display, DisplayConfig, DisplayError};

// Event surface
pub use crate::event::{Event, EventKind, KeyCode, MouseButton};

// Input fan-out
pub use crate::input::{EventQueue, ListenerId, Listeners};

// Geometry
pub use crate::geometry::{Bounds, Point, Size};

// Shell
pub use crate::Shell;
