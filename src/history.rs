//! The navigation substrate behind the router.
//!
//! The router never talks to the browser directly. Everything it needs from
//! the host environment is captured by the [`History`] trait: read the
//! current path, mutate it (growing or overwriting the history stack), and
//! subscribe to the back/forward navigation signal. [`BrowserHistory`]
//! implements this on top of the browser's history API; [`MemoryHistory`]
//! implements it on a plain vec for tests and non-browser embeddings.
//!
//! [`History`]: trait.History.html
//! [`BrowserHistory`]: struct.BrowserHistory.html
//! [`MemoryHistory`]: struct.MemoryHistory.html

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Identifies one subscription to the back/forward navigation signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A handler invoked when the host fires a back/forward navigation.
pub type PopHandler = Rc<dyn Fn()>;

/// The capabilities the router needs from a navigation substrate.
///
/// The underlying history stack is owned by the implementation; the router
/// only reads the current path, mutates it through [`push`] and [`replace`],
/// and listens for back/forward navigation.
///
/// [`push`]: #tymethod.push
/// [`replace`]: #tymethod.replace
pub trait History {
    /// The current path.
    fn location(&self) -> String;

    /// Append a new entry to the history and make it current.
    fn push(&self, path: &str);

    /// Overwrite the current entry without growing the history.
    fn replace(&self, path: &str);

    /// Subscribe a handler to the back/forward navigation signal.
    fn listen(&self, handler: PopHandler) -> ListenerId;

    /// Remove a previously registered handler.
    fn unlisten(&self, id: ListenerId);
}

/// A [`History`] backed by the browser's history API.
///
/// Popstate listeners are retained as closures here and removed from the
/// window on [`unlisten`], so no handler outlives its subscription.
///
/// [`History`]: trait.History.html
/// [`unlisten`]: trait.History.html#tymethod.unlisten
pub struct BrowserHistory {
    window: web_sys::Window,
    listeners: RefCell<HashMap<ListenerId, Closure<dyn FnMut(web_sys::Event)>>>,
    next_id: Cell<u64>,
}

impl BrowserHistory {
    /// Bind to the browser window this code is running in.
    pub fn new() -> Self {
        let window = web_sys::window()
            .expect("couldn't get window handle");

        BrowserHistory {
            window: window,
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }
}

impl Default for BrowserHistory {
    fn default() -> Self {
        BrowserHistory::new()
    }
}

impl History for BrowserHistory {
    fn location(&self) -> String {
        self.window.location()
            .pathname()
            .expect_throw("couldn't get location pathname")
    }

    fn push(&self, path: &str) {
        self.window.history()
            .expect_throw("couldn't get history handle")
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .expect_throw("failed to push history entry");
    }

    fn replace(&self, path: &str) {
        self.window.history()
            .expect_throw("couldn't get history handle")
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .expect_throw("failed to replace history entry");
    }

    fn listen(&self, handler: PopHandler) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let closure = Closure::wrap(
            Box::new(move |_event: web_sys::Event| {
                handler();
            }) as Box<dyn FnMut(web_sys::Event)>
        );

        self.window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .expect_throw("failed to add popstate listener");

        self.listeners.borrow_mut().insert(id, closure);
        id
    }

    fn unlisten(&self, id: ListenerId) {
        if let Some(closure) = self.listeners.borrow_mut().remove(&id) {
            self.window
                .remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                .expect_throw("failed to remove popstate listener");
        }
    }
}

/// An in-memory [`History`] for tests and non-browser embeddings.
///
/// Keeps the full entry stack and a cursor into it. [`back`] and [`forward`]
/// move the cursor and fire the navigation signal, standing in for the
/// browser's back/forward buttons.
///
/// [`History`]: trait.History.html
/// [`back`]: #method.back
/// [`forward`]: #method.forward
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
    listeners: RefCell<HashMap<ListenerId, PopHandler>>,
    next_id: Cell<u64>,
}

impl MemoryHistory {
    /// Create a history whose single entry is the given path.
    pub fn new(initial: &str) -> Self {
        MemoryHistory {
            entries: RefCell::new(vec![initial.to_string()]),
            index: Cell::new(0),
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }

    /// The number of entries currently in the history.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Move the cursor one entry back and fire the navigation signal.
    ///
    /// Does nothing at the oldest entry.
    pub fn back(&self) {
        let index = self.index.get();
        if index > 0 {
            self.index.set(index - 1);
            self.notify();
        }
    }

    /// Move the cursor one entry forward and fire the navigation signal.
    ///
    /// Does nothing at the newest entry.
    pub fn forward(&self) {
        let index = self.index.get();
        if index + 1 < self.entries.borrow().len() {
            self.index.set(index + 1);
            self.notify();
        }
    }

    fn notify(&self) {
        // snapshot the handlers so one of them can unlisten without
        // invalidating the iteration
        let handlers: Vec<PopHandler> = self.listeners.borrow()
            .values()
            .map(Rc::clone)
            .collect();

        for handler in handlers {
            handler();
        }
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries.borrow()[self.index.get()].clone()
    }

    fn push(&self, path: &str) {
        let index = self.index.get();
        let mut entries = self.entries.borrow_mut();

        // pushing discards any forward entries, like the browser does
        entries.truncate(index + 1);
        entries.push(path.to_string());
        self.index.set(index + 1);
    }

    fn replace(&self, path: &str) {
        self.entries.borrow_mut()[self.index.get()] = path.to_string();
    }

    fn listen(&self, handler: PopHandler) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, handler);
        id
    }

    fn unlisten(&self, id: ListenerId) {
        self.listeners.borrow_mut().remove(&id);
    }
}
