//=========================================================================
// Listener Registry
//
// Fans dispatched events out to application code.
//
// Two consumption styles are supported:
// - **Callbacks** registered per category (quit, key press/release,
//   mouse press/release, wheel), invoked synchronously with the
//   variant's payload during dispatch.
// - **Channel taps** that receive every event, for consumers that want
//   to drain input on their own schedule (or thread).
//
// Registration hands back a `ListenerId`; closures have no identity of
// their own, so removal goes through the id.
//
// A tap whose receiver has been dropped is pruned with a warning, never
// a panic. In normal shutdown the `Quit` event reaches taps before they
// disconnect.
//
//=========================================================================

//=== External Crates =====================================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::warn;

//=== Internal Imports ====================================================

use crate::event::{Event, KeyCode, MouseButton};
use crate::geometry::Point;

//=== Callback Types ======================================================

type QuitFn = Box<dyn FnMut()>;
type KeyFn = Box<dyn FnMut(KeyCode)>;
type MouseFn = Box<dyn FnMut(MouseButton, Point)>;
type WheelFn = Box<dyn FnMut(bool, Point)>;

//=== ListenerId ==========================================================

/// Handle identifying a registered callback.
///
/// Returned by every `on_*` registration; pass it to
/// [`Listeners::remove`] to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

//=== Listeners ===========================================================

/// Registry of event callbacks and channel taps.
///
/// Dispatch routes each event by its tag: the matching callback set is
/// invoked with the variant's payload, and every tap receives a clone of
/// the event regardless of category. Cursor motion and unidentified
/// events reach taps only; there is no per-motion callback (consumers
/// that care about motion subscribe).
pub struct Listeners {
    next_id: u64,
    quit: Vec<(ListenerId, QuitFn)>,
    key_down: Vec<(ListenerId, KeyFn)>,
    key_up: Vec<(ListenerId, KeyFn)>,
    mouse_down: Vec<(ListenerId, MouseFn)>,
    mouse_up: Vec<(ListenerId, MouseFn)>,
    wheel: Vec<(ListenerId, WheelFn)>,
    taps: Vec<Sender<Event>>,
}

impl Listeners {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            next_id: 0,
            quit: Vec::new(),
            key_down: Vec::new(),
            key_up: Vec::new(),
            mouse_down: Vec::new(),
            mouse_up: Vec::new(),
            wheel: Vec::new(),
            taps: Vec::new(),
        }
    }

    fn allocate_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    //--- Registration -----------------------------------------------------

    /// Listens for quit requests.
    pub fn on_quit(&mut self, f: impl FnMut() + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.quit.push((id, Box::new(f)));
        id
    }

    /// Listens for key presses.
    pub fn on_key_down(&mut self, f: impl FnMut(KeyCode) + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.key_down.push((id, Box::new(f)));
        id
    }

    /// Listens for key releases.
    pub fn on_key_up(&mut self, f: impl FnMut(KeyCode) + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.key_up.push((id, Box::new(f)));
        id
    }

    /// Listens for mouse button presses; the callback receives the button
    /// and the cursor position.
    pub fn on_mouse_down(&mut self, f: impl FnMut(MouseButton, Point) + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.mouse_down.push((id, Box::new(f)));
        id
    }

    /// Listens for mouse button releases.
    pub fn on_mouse_up(&mut self, f: impl FnMut(MouseButton, Point) + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.mouse_up.push((id, Box::new(f)));
        id
    }

    /// Listens for wheel steps; `true` means scrolling away from the user.
    pub fn on_wheel(&mut self, f: impl FnMut(bool, Point) + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.wheel.push((id, Box::new(f)));
        id
    }

    /// Unregisters a callback of any category.
    ///
    /// Returns whether the id was found.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.callback_count();
        self.quit.retain(|(i, _)| *i != id);
        self.key_down.retain(|(i, _)| *i != id);
        self.key_up.retain(|(i, _)| *i != id);
        self.mouse_down.retain(|(i, _)| *i != id);
        self.mouse_up.retain(|(i, _)| *i != id);
        self.wheel.retain(|(i, _)| *i != id);
        self.callback_count() < before
    }

    /// Opens a channel tap receiving every dispatched event.
    ///
    /// The tap stays registered until its receiver is dropped, at which
    /// point the next dispatch prunes it.
    pub fn subscribe(&mut self) -> Receiver<Event> {
        let (tx, rx) = unbounded();
        self.taps.push(tx);
        rx
    }

    //--- Dispatch ---------------------------------------------------------

    /// Routes one event to the matching callbacks and every live tap.
    pub fn dispatch(&mut self, event: &Event) {
        self.feed_taps(event);

        match *event {
            Event::Quit => {
                for (_, f) in &mut self.quit {
                    f();
                }
            }
            Event::KeyDown(key) => {
                for (_, f) in &mut self.key_down {
                    f(key);
                }
            }
            Event::KeyUp(key) => {
                for (_, f) in &mut self.key_up {
                    f(key);
                }
            }
            Event::MouseButtonDown { button, x, y } => {
                for (_, f) in &mut self.mouse_down {
                    f(button, Point::new(x, y));
                }
            }
            Event::MouseButtonUp { button, x, y } => {
                for (_, f) in &mut self.mouse_up {
                    f(button, Point::new(x, y));
                }
            }
            Event::MouseWheel { up, x, y } => {
                for (_, f) in &mut self.wheel {
                    f(up, Point::new(x, y));
                }
            }
            // Motion and unidentified events reach taps only
            Event::MouseMoved { .. } | Event::Unidentified => {}
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn feed_taps(&mut self, event: &Event) {
        let mut dropped = 0usize;
        self.taps.retain(|tap| {
            let alive = tap.send(event.clone()).is_ok();
            if !alive {
                dropped += 1;
            }
            alive
        });

        if dropped > 0 {
            warn!(
                target: "input",
                "Pruned {} disconnected event tap(s)",
                dropped
            );
        }
    }

    fn callback_count(&self) -> usize {
        self.quit.len()
            + self.key_down.len()
            + self.key_up.len()
            + self.mouse_down.len()
            + self.mouse_up.len()
            + self.wheel.len()
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn tap_count(&self) -> usize {
        self.taps.len()
    }
}

impl Default for Listeners {
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
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counter() -> (Rc<RefCell<u32>>, Rc<RefCell<u32>>) {
        let c = Rc::new(RefCell::new(0));
        (c.clone(), c)
    }

    //=====================================================================
    // Callback Routing Tests
    //=====================================================================

    #[test]
    fn quit_reaches_quit_listeners() {
        let mut listeners = Listeners::new();
        let (tally, handle) = counter();
        listeners.on_quit(move || *tally.borrow_mut() += 1);

        listeners.dispatch(&Event::Quit);

        assert_eq!(*handle.borrow(), 1);
    }

    #[test]
    fn key_down_carries_key() {
        let mut listeners = Listeners::new();
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        listeners.on_key_down(move |key| *sink.borrow_mut() = Some(key));

        listeners.dispatch(&Event::KeyDown(KeyCode::Escape));

        assert_eq!(*seen.borrow(), Some(KeyCode::Escape));
    }

    #[test]
    fn key_up_does_not_trigger_key_down() {
        let mut listeners = Listeners::new();
        let (tally, handle) = counter();
        listeners.on_key_down(move |_| *tally.borrow_mut() += 1);

        listeners.dispatch(&Event::KeyUp(KeyCode::KeyA));

        assert_eq!(*handle.borrow(), 0);
    }

    #[test]
    fn mouse_down_carries_button_and_position() {
        let mut listeners = Listeners::new();
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        listeners.on_mouse_down(move |button, at| *sink.borrow_mut() = Some((button, at)));

        listeners.dispatch(&Event::MouseButtonDown {
            button: MouseButton::Right,
            x: 33,
            y: 44,
        });

        assert_eq!(
            *seen.borrow(),
            Some((MouseButton::Right, Point::new(33, 44)))
        );
    }

    #[test]
    fn wheel_carries_direction() {
        let mut listeners = Listeners::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        listeners.on_wheel(move |up, _| sink.borrow_mut().push(up));

        listeners.dispatch(&Event::MouseWheel { up: true, x: 0, y: 0 });
        listeners.dispatch(&Event::MouseWheel { up: false, x: 0, y: 0 });

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn all_listeners_of_a_category_run() {
        let mut listeners = Listeners::new();
        let (a_tally, a) = counter();
        let (b_tally, b) = counter();
        listeners.on_quit(move || *a_tally.borrow_mut() += 1);
        listeners.on_quit(move || *b_tally.borrow_mut() += 1);

        listeners.dispatch(&Event::Quit);

        assert_eq!(*a.borrow(), 1);
        assert_eq!(*b.borrow(), 1);
    }

    #[test]
    fn motion_triggers_no_callbacks() {
        let mut listeners = Listeners::new();
        let (tally, handle) = counter();
        listeners.on_mouse_down(move |_, _| *tally.borrow_mut() += 1);

        listeners.dispatch(&Event::MouseMoved { x: 1, y: 2 });

        assert_eq!(*handle.borrow(), 0);
    }

    //=====================================================================
    // Removal Tests
    //=====================================================================

    #[test]
    fn removed_listener_stops_firing() {
        let mut listeners = Listeners::new();
        let (tally, handle) = counter();
        let id = listeners.on_quit(move || *tally.borrow_mut() += 1);

        listeners.dispatch(&Event::Quit);
        assert!(listeners.remove(id));
        listeners.dispatch(&Event::Quit);

        assert_eq!(*handle.borrow(), 1);
    }

    #[test]
    fn remove_unknown_id_reports_false() {
        let mut listeners = Listeners::new();
        let id = listeners.on_quit(|| {});
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
    }

    #[test]
    fn remove_only_targets_one_listener() {
        let mut listeners = Listeners::new();
        let (tally, handle) = counter();
        let doomed = listeners.on_key_down(|_| {});
        listeners.on_key_down(move |_| *tally.borrow_mut() += 1);

        assert!(listeners.remove(doomed));
        listeners.dispatch(&Event::KeyDown(KeyCode::KeyA));

        assert_eq!(*handle.borrow(), 1);
    }

    //=====================================================================
    // Channel Tap Tests
    //=====================================================================

    #[test]
    fn tap_receives_every_event() {
        let mut listeners = Listeners::new();
        let rx = listeners.subscribe();

        listeners.dispatch(&Event::KeyDown(KeyCode::KeyA));
        listeners.dispatch(&Event::MouseMoved { x: 1, y: 2 });
        listeners.dispatch(&Event::Quit);

        assert_eq!(rx.try_recv(), Ok(Event::KeyDown(KeyCode::KeyA)));
        assert_eq!(rx.try_recv(), Ok(Event::MouseMoved { x: 1, y: 2 }));
        assert_eq!(rx.try_recv(), Ok(Event::Quit));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn disconnected_tap_is_pruned_without_panic() {
        let mut listeners = Listeners::new();
        let rx = listeners.subscribe();
        drop(rx);

        listeners.dispatch(&Event::Quit);

        assert_eq!(listeners.tap_count(), 0);
    }

    #[test]
    fn live_taps_survive_pruning() {
        let mut listeners = Listeners::new();
        let doomed = listeners.subscribe();
        let kept = listeners.subscribe();
        drop(doomed);

        listeners.dispatch(&Event::Quit);

        assert_eq!(listeners.tap_count(), 1);
        assert_eq!(kept.try_recv(), Ok(Event::Quit));
    }
}
