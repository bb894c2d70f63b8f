//=========================================================================
// Event Mapper
//
// Converts winit input events into the crate's `Event` type.
//
// Architecture:
//   Winit Events → EventMapper → Event → EventQueue
//
// Stateful cursor tracking: winit reports button and wheel events
// without a position, but downstream consumers expect one (button
// events carry the click location). The mapper caches the position from
// every `CursorMoved` and stamps it onto subsequent button and wheel
// events. Unmapped keys (F13-F24, media keys, exotic keyboards) are
// filtered (returns None).
//
//=========================================================================

//=== External Crates =====================================================

use winit::{
    event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Imports ====================================================

use crate::event::{Event, KeyCode, MouseButton};
use crate::geometry::Point;

//=== EventMapper =========================================================

/// Converts winit events to `Event`s with stateful cursor tracking.
pub(crate) struct EventMapper {
    cursor: Point,
}

impl EventMapper {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            cursor: Point::new(0, 0),
        }
    }

    /// The last cursor position observed.
    pub(crate) fn cursor(&self) -> Point {
        self.cursor
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps a keyboard event (filters unmapped keys).
    pub(crate) fn map_key(
        &self,
        physical_key: PhysicalKey,
        state: ElementState,
    ) -> Option<Event> {
        let key = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        if matches!(key, KeyCode::Unidentified) {
            return None;
        }

        Some(match state {
            ElementState::Pressed => Event::KeyDown(key),
            ElementState::Released => Event::KeyUp(key),
        })
    }

    /// Maps a button event, stamped with the tracked cursor position.
    pub(crate) fn map_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> Event {
        let button = MouseButton::from(button);
        let Point { x, y } = self.cursor;

        match state {
            ElementState::Pressed => Event::MouseButtonDown { button, x, y },
            ElementState::Released => Event::MouseButtonUp { button, x, y },
        }
    }

    /// Records the new cursor position and maps the motion event.
    pub(crate) fn map_cursor_moved(&mut self, x: f64, y: f64) -> Event {
        self.cursor = Point::new(x as i32, y as i32);
        Event::MouseMoved {
            x: self.cursor.x,
            y: self.cursor.y,
        }
    }

    /// Maps a wheel step to a directional event at the cursor position.
    ///
    /// Only the vertical component is considered; a zero delta maps to
    /// nothing.
    pub(crate) fn map_scroll(&self, delta: MouseScrollDelta) -> Option<Event> {
        let vertical = match delta {
            MouseScrollDelta::LineDelta(_, y) => y as f64,
            MouseScrollDelta::PixelDelta(pos) => pos.y,
        };

        if vertical == 0.0 {
            return None;
        }

        Some(Event::MouseWheel {
            up: vertical > 0.0,
            x: self.cursor.x,
            y: self.cursor.y,
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts winit physical key codes to crate key codes.
///
/// Maps A-Z, 0-9, arrows, the punctuation row, and common editing keys.
/// Everything else returns `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0,
            Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2,
            Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4,
            Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6,
            Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8,
            Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Editing and whitespace ---------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            //--- Punctuation row ----------------------------------------------

            Comma => KeyCode::Comma,
            Period => KeyCode::Period,
            Slash => KeyCode::Slash,
            Semicolon => KeyCode::Semicolon,
            Quote => KeyCode::Quote,
            Minus => KeyCode::Minus,
            Equal => KeyCode::Equal,
            BracketLeft => KeyCode::BracketLeft,
            BracketRight => KeyCode::BracketRight,
            Backquote => KeyCode::Backquote,
            Backslash => KeyCode::Backslash,

            //--- Modifiers reported as keys -----------------------------------

            ControlLeft => KeyCode::ControlLeft,
            ControlRight => KeyCode::ControlRight,

            //--- Unmapped (return Unidentified) -------------------------------

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts winit mouse buttons to crate buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
