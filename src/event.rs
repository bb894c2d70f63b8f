//=========================================================================
// Event Types
//
// Defines the tagged event representation exposed to applications.
//
// The platform layer (winit) delivers input in its own per-backend
// shapes; this module is the stable form those are normalized into.
// Every event is a variant of `Event` carrying only the fields that are
// valid for its category, so field access is a pattern match instead of
// a raw union read: asking a keyboard event for a mouse button yields
// `None`, never a garbage value.
//
// Responsibilities:
// - Represent keyboard, mouse, and lifecycle events in a portable way
// - Provide the discriminant projection (`EventKind`) and per-category
//   field accessors
// - Provide equality and hashing semantics that let the frame queue
//   coalesce cursor motion
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== Internal Imports ====================================================

use crate::geometry::Point;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Abstracts the backend's button representation into a stable enum.
/// The `Other` variant covers side buttons, thumb buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// `KeyA` is the same key on QWERTY and AZERTY layouts.
///
/// Coverage: alphanumerics, arrows, the punctuation row, and the common
/// editing/control keys. Anything the platform reports outside this set
/// maps to `Unidentified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow keys -------------------------------------------------------
    ArrowDown, ArrowLeft, ArrowRight, ArrowUp,

    //--- Editing and whitespace -------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    //--- Punctuation row --------------------------------------------------
    Comma, Period, Slash, Semicolon, Quote,
    Minus, Equal, BracketLeft, BracketRight,
    Backquote, Backslash,

    //--- Modifiers reported as keys ---------------------------------------
    ControlLeft,
    ControlRight,

    //--- Fallback ---------------------------------------------------------
    /// Used for keys not mapped explicitly by the platform layer.
    Unidentified,
}

//=== EventKind ===========================================================

/// Discriminant tag of an event's category.
///
/// One case per `Event` variant, carrying no payload. This is the
/// projection applications branch on before reaching for the
/// category-specific accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Quit,
    KeyDown,
    KeyUp,
    MouseButtonDown,
    MouseButtonUp,
    MouseMoved,
    MouseWheel,
    Unidentified,
}

//=== Event ===============================================================

/// A single input or lifecycle occurrence, normalized by the platform
/// layer.
///
/// Each variant carries only its relevant fields. Mouse-button and wheel
/// events carry the cursor position at the time of the event (stamped by
/// the mapper, which tracks cursor motion).
///
/// Coordinates are `i32` pixels in screen space, top-left origin.
#[derive(Debug, Clone)]
pub enum Event {
    /// Window close requested by the user or the OS.
    Quit,

    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Mouse button pressed at the given cursor position.
    MouseButtonDown { button: MouseButton, x: i32, y: i32 },

    /// Mouse button released at the given cursor position.
    MouseButtonUp { button: MouseButton, x: i32, y: i32 },

    /// Cursor moved to a new position.
    ///
    /// Consecutive motion events are coalesced by the frame queue; only
    /// the latest position survives a frame.
    MouseMoved { x: i32, y: i32 },

    /// Vertical wheel step at the given cursor position.
    ///
    /// `up` is true for scrolling away from the user.
    MouseWheel { up: bool, x: i32, y: i32 },

    /// Unrecognized or unsupported platform event.
    Unidentified,
}

//--- Accessors -----------------------------------------------------------

impl Event {
    /// Returns the event's category tag.
    ///
    /// Pure projection; never fails.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Quit => EventKind::Quit,
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::KeyUp(_) => EventKind::KeyUp,
            Self::MouseButtonDown { .. } => EventKind::MouseButtonDown,
            Self::MouseButtonUp { .. } => EventKind::MouseButtonUp,
            Self::MouseMoved { .. } => EventKind::MouseMoved,
            Self::MouseWheel { .. } => EventKind::MouseWheel,
            Self::Unidentified => EventKind::Unidentified,
        }
    }

    /// The key symbol, for keyboard events.
    ///
    /// `None` for any non-keyboard category.
    pub fn key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => Some(*key),
            _ => None,
        }
    }

    /// The button identifier, for mouse-button events.
    ///
    /// `None` for any other category, wheel included.
    pub fn mouse_button(&self) -> Option<MouseButton> {
        match self {
            Self::MouseButtonDown { button, .. } | Self::MouseButtonUp { button, .. } => {
                Some(*button)
            }
            _ => None,
        }
    }

    /// The horizontal cursor coordinate, for events that carry one.
    pub fn mouse_x(&self) -> Option<i32> {
        self.position().map(|p| p.x)
    }

    /// The vertical cursor coordinate, for events that carry one.
    pub fn mouse_y(&self) -> Option<i32> {
        self.position().map(|p| p.y)
    }

    /// The cursor position, for button, motion, and wheel events.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::MouseButtonDown { x, y, .. }
            | Self::MouseButtonUp { x, y, .. }
            | Self::MouseMoved { x, y }
            | Self::MouseWheel { x, y, .. } => Some(Point::new(x, y)),
            _ => None,
        }
    }
}

//=========================================================================
// Equality and Hashing
//
// `MouseMoved` compares and hashes by tag alone so the frame queue can
// coalesce motion with a latest-wins slot; every other variant compares
// by payload.
//=========================================================================

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        use Event::*;
        match (self, other) {
            (Quit, Quit) => true,
            (KeyDown(a), KeyDown(b)) => a == b,
            (KeyUp(a), KeyUp(b)) => a == b,
            (
                MouseButtonDown { button: a, x: ax, y: ay },
                MouseButtonDown { button: b, x: bx, y: by },
            ) => a == b && ax == bx && ay == by,
            (
                MouseButtonUp { button: a, x: ax, y: ay },
                MouseButtonUp { button: b, x: bx, y: by },
            ) => a == b && ax == bx && ay == by,
            // Motion: coordinates ignored so coalescing replaces in place
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (
                MouseWheel { up: a, x: ax, y: ay },
                MouseWheel { up: b, x: bx, y: by },
            ) => a == b && ax == bx && ay == by,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => key.hash(state),
            Self::MouseButtonDown { button, x, y } | Self::MouseButtonUp { button, x, y } => {
                button.hash(state);
                x.hash(state);
                y.hash(state);
            }
            Self::MouseWheel { up, x, y } => {
                up.hash(state);
                x.hash(state);
                y.hash(state);
            }
            // MouseMoved, Quit, Unidentified: tag only
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
