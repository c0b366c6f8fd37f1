//! Test utilties.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::Error;
use crate::history::MemoryHistory;
use crate::matcher::match_path;
use crate::navigator::{Navigator, Observer};

/// Build a navigator on an in-memory history starting at the given path.
///
/// Returns the concrete history too so tests can inspect the stack and drive
/// back/forward navigation.
pub fn navigator(initial: &str) -> (Rc<MemoryHistory>, Navigator) {
    let history = Rc::new(MemoryHistory::new(initial));
    let nav = Navigator::new(history.clone());
    (history, nav)
}

/// An observer that counts how many times it was refreshed.
#[derive(Default)]
pub struct Recorder {
    refreshes: Cell<usize>,
    hook: Option<Box<dyn Fn()>>,
    fail: bool,
}

impl Recorder {
    /// A recorder that runs the given hook on every refresh.
    pub fn with_hook(hook: impl Fn() + 'static) -> Self {
        Recorder {
            refreshes: Cell::new(0),
            hook: Some(Box::new(hook)),
            fail: false,
        }
    }

    /// A recorder whose refresh always fails.
    pub fn failing() -> Self {
        Recorder {
            refreshes: Cell::new(0),
            hook: None,
            fail: true,
        }
    }

    /// How many times this recorder has been refreshed.
    pub fn refreshes(&self) -> usize {
        self.refreshes.get()
    }
}

impl Observer for Recorder {
    fn refresh(&self) -> Result<(), Error> {
        self.refreshes.set(self.refreshes.get() + 1);

        if let Some(ref hook) = self.hook {
            hook();
        }

        if self.fail {
            // manufacture a real pattern error
            return match_path("/", Some("("), false).map(|_| ());
        }

        Ok(())
    }
}
