//=========================================================================
// Event Queue
//
// Per-frame event buffer sitting between the platform layer and
// dispatch. Collects events as winit delivers them and hands them over
// in one batch at the frame boundary.
//
// Responsibilities:
// - Store incoming events in arrival order
// - Suppress consecutive duplicate discrete events
// - Coalesce cursor motion into a single latest-wins slot
//
// The queue exists only for the current frame and is reset by `drain`.
//=========================================================================

//=== Internal Imports ====================================================

use crate::event::Event;

//=== EventQueue ==========================================================

/// Transient event store for one frame.
///
/// Discrete events (keys, buttons, wheel, quit) keep their order;
/// motion collapses to the last observed position. Motion is appended
/// after the discrete batch on drain, so a frame's button events are
/// seen before the final cursor position.
pub struct EventQueue {
    discrete: Vec<Event>,
    motion: Option<Event>,
}

impl EventQueue {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        const DISCRETE_BASE: usize = 64;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            motion: None,
        }
    }

    //--- Collection -------------------------------------------------------

    /// Adds an event to the current frame.
    ///
    /// `MouseMoved` replaces any motion already held; other events append
    /// unless identical to the one just pushed (platforms occasionally
    /// double-report a discrete event). Wheel steps are exempt from the
    /// duplicate check: fast scrolling legitimately produces identical
    /// consecutive steps, and each one counts.
    pub fn push(&mut self, event: Event) {
        if matches!(event, Event::MouseMoved { .. }) {
            self.motion = Some(event);
            return;
        }

        let repeatable = matches!(event, Event::MouseWheel { .. });
        if repeatable || self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Returns the frame's events and resets the queue.
    ///
    /// Discrete events come first in arrival order, then the coalesced
    /// motion event if any.
    pub fn drain(&mut self) -> Vec<Event> {
        let mut events = std::mem::take(&mut self.discrete);
        events.extend(self.motion.take());
        events
    }

    //--- Utilities --------------------------------------------------------

    pub fn clear(&mut self) {
        self.discrete.clear();
        self.motion = None;
    }

    pub fn len(&self) -> usize {
        self.discrete.len() + usize::from(self.motion.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.motion.is_none()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyCode, MouseButton};

    fn key_down(key: KeyCode) -> Event {
        Event::KeyDown(key)
    }

    fn mouse_move(x: i32, y: i32) -> Event {
        Event::MouseMoved { x, y }
    }

    #[test]
    fn starts_empty() {
        let queue = EventQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn discrete_events_keep_order() {
        let mut queue = EventQueue::new();
        queue.push(key_down(KeyCode::KeyA));
        queue.push(key_down(KeyCode::KeyB));
        queue.push(Event::MouseButtonDown { button: MouseButton::Left, x: 1, y: 2 });

        let events = queue.drain();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], key_down(KeyCode::KeyA));
        assert_eq!(events[1], key_down(KeyCode::KeyB));
        assert_eq!(
            events[2],
            Event::MouseButtonDown { button: MouseButton::Left, x: 1, y: 2 }
        );
    }

    #[test]
    fn consecutive_duplicates_suppressed() {
        let mut queue = EventQueue::new();
        queue.push(key_down(KeyCode::Space));
        queue.push(key_down(KeyCode::Space));
        assert_eq!(queue.len(), 1);
    }

    /// Every wheel step counts, identical or not.
    #[test]
    fn wheel_repeats_kept() {
        let mut queue = EventQueue::new();
        queue.push(Event::MouseWheel { up: true, x: 5, y: 5 });
        queue.push(Event::MouseWheel { up: true, x: 5, y: 5 });
        assert_eq!(queue.len(), 2);
    }

    /// Non-consecutive repeats are real (press, release, press again).
    #[test]
    fn non_consecutive_repeats_kept() {
        let mut queue = EventQueue::new();
        queue.push(key_down(KeyCode::Space));
        queue.push(Event::KeyUp(KeyCode::Space));
        queue.push(key_down(KeyCode::Space));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn motion_coalesces_to_latest() {
        let mut queue = EventQueue::new();
        queue.push(mouse_move(1, 1));
        queue.push(mouse_move(2, 2));
        queue.push(mouse_move(30, 40));

        let events = queue.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].position().map(|p| (p.x, p.y)), Some((30, 40)));
    }

    #[test]
    fn motion_drains_after_discrete() {
        let mut queue = EventQueue::new();
        queue.push(mouse_move(5, 5));
        queue.push(key_down(KeyCode::KeyQ));

        let events = queue.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], key_down(KeyCode::KeyQ));
        assert!(matches!(events[1], Event::MouseMoved { .. }));
    }

    #[test]
    fn drain_resets_queue() {
        let mut queue = EventQueue::new();
        queue.push(key_down(KeyCode::KeyA));
        queue.push(mouse_move(1, 1));

        assert_eq!(queue.drain().len(), 2);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn clear_discards_everything() {
        let mut queue = EventQueue::new();
        queue.push(key_down(KeyCode::KeyA));
        queue.push(mouse_move(1, 1));
        queue.clear();
        assert!(queue.is_empty());
    }
}
