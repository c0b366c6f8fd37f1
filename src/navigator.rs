//! The navigation registry and its two mutating operations.
//!
//! A [`Navigator`] owns the list of currently mounted route observers and the
//! handle to the navigation substrate. [`push`] and [`replace`] mutate the
//! location and then broadcast to every registered observer; each observer's
//! own match check decides whether it renders anything for the new location.
//!
//! There is no module-global registry: the application's root constructs a
//! `Navigator` and hands clones of it to routes and links, which makes
//! lifecycle and testing deterministic.
//!
//! [`Navigator`]: struct.Navigator.html
//! [`push`]: struct.Navigator.html#method.push
//! [`replace`]: struct.Navigator.html#method.replace

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;

use crate::error::Error;
use crate::history::History;

/// Identifies one registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

/// A mounted unit that re-evaluates itself against the current location.
pub trait Observer {
    /// Re-run the match against the live location and deliver the output.
    fn refresh(&self) -> Result<(), Error>;
}

/// A shared registry handle.
///
/// Cloning a `Navigator` is cheap and every clone operates on the same
/// registry and history. Everything runs on the single render/event thread,
/// so interior mutability here needs no locking.
pub struct Navigator {
    history: Rc<dyn History>,
    observers: Rc<RefCell<Vec<(ObserverId, Weak<dyn Observer>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl Clone for Navigator {
    fn clone(&self) -> Self {
        Navigator {
            history: Rc::clone(&self.history),
            observers: Rc::clone(&self.observers),
            next_id: Rc::clone(&self.next_id),
        }
    }
}

impl Navigator {
    /// Create a registry on top of the given navigation substrate.
    pub fn new(history: Rc<dyn History>) -> Self {
        Navigator {
            history: history,
            observers: Rc::new(RefCell::new(vec![])),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// The navigation substrate this registry drives.
    pub fn history(&self) -> &Rc<dyn History> {
        &self.history
    }

    /// The current path.
    pub fn location(&self) -> String {
        self.history.location()
    }

    /// Append a new history entry and re-render every registered observer.
    pub fn push(&self, path: &str) {
        // mutate the location first so observers rendering inside the
        // broadcast see the new value
        self.history.push(path);
        self.broadcast();
    }

    /// Overwrite the current history entry and re-render every registered
    /// observer.
    pub fn replace(&self, path: &str) {
        self.history.replace(path);
        self.broadcast();
    }

    /// Add an observer to the registry.
    ///
    /// Called from a route's mount and nowhere else.
    pub fn register(&self, observer: Weak<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    /// Remove an observer from the registry.
    ///
    /// Called from a route's unmount and nowhere else. Safe to call while a
    /// broadcast is in progress.
    pub fn unregister(&self, id: ObserverId) {
        self.observers.borrow_mut().retain(|(entry, _)| *entry != id);
    }

    /// Notify every currently registered observer exactly once.
    ///
    /// This is unconditional: the registry can't know which observers care
    /// about the new location, so all of them re-run their own match check.
    /// An observer that fails to render is logged and skipped; the broadcast
    /// still reaches the rest.
    pub fn broadcast(&self) {
        // snapshot the list so observers can unregister (themselves or each
        // other) while we iterate
        let snapshot: Vec<(ObserverId, Weak<dyn Observer>)> = self.observers.borrow()
            .iter()
            .map(|(id, observer)| (*id, Weak::clone(observer)))
            .collect();

        for (id, observer) in snapshot {
            // skip entries unregistered mid-broadcast
            let registered = self.observers.borrow()
                .iter()
                .any(|(entry, _)| *entry == id);
            if !registered {
                continue;
            }

            if let Some(observer) = observer.upgrade() {
                if let Err(error) = observer.refresh() {
                    warn!("observer failed to render during broadcast: {}", error);
                }
            }
        }
    }

    /// The number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}
