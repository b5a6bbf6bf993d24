//! Host appearance signal.
//!
//! The host reports a tri-state light/dark preference. Views subscribe to
//! an [`AppearanceSignal`] and receive every change until their
//! [`Subscription`] is dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Environment variable terminals use to advertise their colors.
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// System appearance preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Appearance {
    /// Light background preferred.
    Light,
    /// Dark background preferred.
    Dark,
    /// The host did not report a preference.
    #[default]
    Unknown,
}

impl Appearance {
    /// Parse a raw host value. Anything other than `light` or `dark` is unknown.
    pub fn from_signal(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("light") => Appearance::Light,
            Some(s) if s.eq_ignore_ascii_case("dark") => Appearance::Dark,
            _ => Appearance::Unknown,
        }
    }

    /// Parse a `COLORFGBG` value such as `15;0` or `0;default;15`.
    ///
    /// The last field is the ANSI index of the background. Index 7 and the
    /// bright range 9-15 are light; 0-6 and 8 are dark.
    pub fn from_colorfgbg(value: &str) -> Self {
        let Some(bg) = value.rsplit(';').next() else {
            return Appearance::Unknown;
        };

        match bg.trim().parse::<u8>() {
            Ok(7) | Ok(9..=15) => Appearance::Light,
            Ok(0..=6) | Ok(8) => Appearance::Dark,
            _ => Appearance::Unknown,
        }
    }

    /// Read the current preference from the environment.
    pub fn detect() -> Self {
        match std::env::var(COLORFGBG_VAR) {
            Ok(value) => {
                let appearance = Self::from_colorfgbg(&value);
                tracing::debug!("{}={:?} -> {}", COLORFGBG_VAR, value, appearance);
                appearance
            },
            Err(_) => Appearance::Unknown,
        }
    }

    /// Get the next value in the cycle.
    pub fn next(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Unknown,
            Appearance::Unknown => Appearance::Light,
        }
    }

    /// Get the appearance name.
    pub fn name(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
            Appearance::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Listener = Box<dyn FnMut(Appearance)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
    /// Nesting depth of running dispatches.
    dispatching: u32,
    /// Ids unsubscribed while a dispatch held their listener.
    removed: Vec<u64>,
}

/// Observable appearance value, owned by the host side.
///
/// Single-threaded: listeners run synchronously inside [`AppearanceSignal::set`]
/// and may subscribe or unsubscribe while they run.
pub struct AppearanceSignal {
    current: RefCell<Appearance>,
    listeners: Rc<RefCell<Listeners>>,
}

impl fmt::Debug for AppearanceSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppearanceSignal")
            .field("current", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl AppearanceSignal {
    /// Create a signal with an initial value.
    pub fn new(initial: Appearance) -> Self {
        Self {
            current: RefCell::new(initial),
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    /// Current value.
    pub fn get(&self) -> Appearance {
        *self.current.borrow()
    }

    /// Update the value. Listeners are notified only when it changes.
    ///
    /// Returns whether the value changed.
    pub fn set(&self, value: Appearance) -> bool {
        let previous = self.current.replace(value);
        if previous == value {
            return false;
        }

        tracing::debug!("Appearance changed: {} -> {}", previous, value);
        self.dispatch(value);
        true
    }

    /// Run every listener without holding the borrow, so callbacks may
    /// subscribe or drop subscriptions.
    fn dispatch(&self, value: Appearance) {
        let mut batch = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.dispatching += 1;
            std::mem::take(&mut listeners.entries)
        };

        for (id, listener) in batch.iter_mut() {
            if self.listeners.borrow().removed.contains(id) {
                continue;
            }
            listener(value);
        }

        let removed = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.dispatching -= 1;
            if listeners.dispatching == 0 {
                std::mem::take(&mut listeners.removed)
            } else {
                listeners.removed.clone()
            }
        };
        let (gone, kept): (Vec<_>, Vec<_>) = batch
            .into_iter()
            .partition(|(id, _)| removed.contains(id));

        // Keep registration order; listeners added during dispatch go last.
        {
            let mut listeners = self.listeners.borrow_mut();
            let added = std::mem::replace(&mut listeners.entries, kept);
            listeners.entries.extend(added);
        }

        // Closures may own subscriptions; drop them with the borrow released.
        drop(gone);
    }

    /// Register a listener. It stays registered until the returned guard is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(Appearance) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Number of live subscriptions.
    ///
    /// Listeners being dispatched are not counted until the dispatch ends.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

/// Registration handle returned by [`AppearanceSignal::subscribe`].
///
/// Dropping it removes the listener.
#[must_use = "dropping a Subscription unregisters the listener immediately"]
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &(self.listeners.strong_count() > 0))
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Signal already gone
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        let entry = {
            let mut listeners = listeners.borrow_mut();
            if listeners.dispatching > 0 {
                listeners.removed.push(self.id);
            }
            listeners
                .entries
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|pos| listeners.entries.remove(pos))
        };
        drop(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_from_signal() {
        assert_eq!(Appearance::from_signal(Some("light")), Appearance::Light);
        assert_eq!(Appearance::from_signal(Some("DARK")), Appearance::Dark);
        assert_eq!(Appearance::from_signal(Some("sepia")), Appearance::Unknown);
        assert_eq!(Appearance::from_signal(None), Appearance::Unknown);
    }

    #[test]
    fn test_from_colorfgbg() {
        assert_eq!(Appearance::from_colorfgbg("0;15"), Appearance::Light);
        assert_eq!(Appearance::from_colorfgbg("15;0"), Appearance::Dark);
        assert_eq!(Appearance::from_colorfgbg("0;default;7"), Appearance::Light);
        assert_eq!(Appearance::from_colorfgbg("7;8"), Appearance::Dark);
        assert_eq!(Appearance::from_colorfgbg("15;default"), Appearance::Unknown);
        assert_eq!(Appearance::from_colorfgbg(""), Appearance::Unknown);
        assert_eq!(Appearance::from_colorfgbg("0;200"), Appearance::Unknown);
    }

    #[test]
    fn test_cycle_visits_every_value() {
        let start = Appearance::Light;
        assert_eq!(start.next(), Appearance::Dark);
        assert_eq!(start.next().next(), Appearance::Unknown);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_set_notifies_on_change_only() {
        let signal = AppearanceSignal::new(Appearance::Light);
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(Appearance::Unknown));

        let _sub = {
            let calls = Rc::clone(&calls);
            let seen = Rc::clone(&seen);
            signal.subscribe(move |a| {
                calls.set(calls.get() + 1);
                seen.set(a);
            })
        };

        assert!(!signal.set(Appearance::Light));
        assert_eq!(calls.get(), 0);

        assert!(signal.set(Appearance::Dark));
        assert_eq!(calls.get(), 1);
        assert_eq!(seen.get(), Appearance::Dark);
        assert_eq!(signal.get(), Appearance::Dark);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let signal = AppearanceSignal::new(Appearance::Dark);
        let calls = Rc::new(Cell::new(0));

        let sub = {
            let calls = Rc::clone(&calls);
            signal.subscribe(move |_| calls.set(calls.get() + 1))
        };
        let _other = signal.subscribe(|_| {});
        assert_eq!(signal.subscriber_count(), 2);

        drop(sub);
        assert_eq!(signal.subscriber_count(), 1);

        signal.set(Appearance::Light);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_listener_drops_later_subscription() {
        let signal = AppearanceSignal::new(Appearance::Light);
        let later_calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _first = {
            let slot = Rc::clone(&slot);
            signal.subscribe(move |_| {
                slot.borrow_mut().take();
            })
        };
        let later = {
            let later_calls = Rc::clone(&later_calls);
            signal.subscribe(move |_| later_calls.set(later_calls.get() + 1))
        };
        *slot.borrow_mut() = Some(later);

        assert!(signal.set(Appearance::Dark));
        assert_eq!(later_calls.get(), 0);
        assert_eq!(signal.subscriber_count(), 1);

        signal.set(Appearance::Light);
        assert_eq!(later_calls.get(), 0);
    }

    #[test]
    fn test_listener_drops_own_subscription() {
        let signal = AppearanceSignal::new(Appearance::Light);
        let calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let sub = {
            let slot = Rc::clone(&slot);
            let calls = Rc::clone(&calls);
            signal.subscribe(move |_| {
                calls.set(calls.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(sub);

        signal.set(Appearance::Dark);
        signal.set(Appearance::Light);
        assert_eq!(calls.get(), 1);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_subscribes_during_dispatch() {
        let signal = Rc::new(AppearanceSignal::new(Appearance::Light));
        let added_calls = Rc::new(Cell::new(0));
        let held: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let _sub = {
            let weak = Rc::downgrade(&signal);
            let held = Rc::clone(&held);
            let added_calls = Rc::clone(&added_calls);
            signal.subscribe(move |_| {
                let Some(signal) = weak.upgrade() else {
                    return;
                };
                let added_calls = Rc::clone(&added_calls);
                held.borrow_mut()
                    .push(signal.subscribe(move |_| added_calls.set(added_calls.get() + 1)));
            })
        };

        signal.set(Appearance::Dark);
        assert_eq!(added_calls.get(), 0);
        assert_eq!(signal.subscriber_count(), 2);

        signal.set(Appearance::Unknown);
        assert_eq!(added_calls.get(), 1);
        assert_eq!(signal.subscriber_count(), 3);
    }

    #[test]
    fn test_subscription_outlives_signal() {
        let signal = AppearanceSignal::new(Appearance::Dark);
        let sub = signal.subscribe(|_| {});
        drop(signal);
        drop(sub);
    }
}
