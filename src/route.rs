//! A route: a mounted observer that conditionally renders a view.
//!
//! A route is configured with an optional pattern, an exactness flag, and a
//! view strategy, then mounted on a [`Navigator`]. While mounted it re-runs
//! the path matcher against the live location on every render pass (initial
//! mount, back/forward navigation, explicit `push`/`replace`) and hands the
//! output to the host through its sink.
//!
//! [`Navigator`]: ../navigator/struct.Navigator.html

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Error;
use crate::history::ListenerId;
use crate::matcher::{match_path, PathMatch};
use crate::navigator::{Navigator, Observer, ObserverId};

/// The argument object handed to a callback view strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderArgs {
    /// The match that caused this render.
    pub matched: PathMatch,
}

/// How a matched route produces its view.
///
/// Exactly two strategies exist and the choice between them is resolved once
/// when the route is built, not on every render.
pub enum View<V> {
    /// Instantiate a view from the match result as its sole input.
    Factory(Box<dyn Fn(PathMatch) -> V>),
    /// Invoke a callback with the full render arguments.
    Callback(Box<dyn Fn(RenderArgs) -> V>),
}

struct Mounted {
    navigator: Navigator,
    id: ObserverId,
    listener: ListenerId,
}

/// Configure a route before mounting it.
///
/// `component` and `render` mirror the two mount-time view configurations a
/// host exposes; if both are supplied, `component` takes precedence. The sink
/// is the host's mechanism for re-rendering this particular instance: it
/// receives the route's output on every render pass.
pub struct RouteBuilder<V> {
    path: Option<String>,
    exact: bool,
    component: Option<Box<dyn Fn(PathMatch) -> V>>,
    render: Option<Box<dyn Fn(RenderArgs) -> V>>,
    sink: Box<dyn Fn(Option<V>)>,
}

impl<V> Default for RouteBuilder<V> {
    fn default() -> Self {
        RouteBuilder {
            path: None,
            exact: false,
            component: None,
            render: None,
            sink: Box::new(|_| ()),
        }
    }
}

impl<V> RouteBuilder<V> {
    /// The pattern this route matches. Absent means match everything.
    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Require the match to cover the entire current path.
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Render by instantiating a view from the match result.
    pub fn component(mut self, component: impl Fn(PathMatch) -> V + 'static) -> Self {
        self.component = Some(Box::new(component));
        self
    }

    /// Render by invoking a callback with the render arguments.
    pub fn render(mut self, render: impl Fn(RenderArgs) -> V + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Where this route's output goes on every render pass.
    pub fn sink(mut self, sink: impl Fn(Option<V>) + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Build the route, resolving the view strategy.
    pub fn build(self) -> Rc<Route<V>> {
        let RouteBuilder {
            path,
            exact,
            component,
            render,
            sink,
        } = self;

        // component takes precedence over render, decided here once
        let view = match (component, render) {
            (Some(factory), _) => Some(View::Factory(factory)),
            (None, Some(callback)) => Some(View::Callback(callback)),
            (None, None) => None,
        };

        Rc::new(Route {
            path: path,
            exact: exact,
            view: view,
            sink: sink,
            mounted: RefCell::new(None),
        })
    }
}

/// A route observer.
///
/// Lives in an `Rc` so the registry can hold a weak reference to it; the
/// owning host component keeps the strong reference for the route's mounted
/// lifetime.
pub struct Route<V> {
    path: Option<String>,
    exact: bool,
    view: Option<View<V>>,
    sink: Box<dyn Fn(Option<V>)>,
    mounted: RefCell<Option<Mounted>>,
}

impl<V> Route<V> {
    /// Start configuring a route.
    pub fn builder() -> RouteBuilder<V> {
        RouteBuilder::default()
    }

    /// Whether this route is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.borrow().is_some()
    }

    /// Run the matcher against the live location and produce this route's
    /// output.
    ///
    /// `Ok(None)` when the location doesn't match, when no view strategy was
    /// configured, or when the route isn't mounted. Calling this twice
    /// without an intervening navigation yields the same output.
    pub fn render(&self) -> Result<Option<V>, Error> {
        // clone the handle out so no borrow is held while user code runs
        let navigator = match &*self.mounted.borrow() {
            Some(mounted) => mounted.navigator.clone(),
            None => return Ok(None),
        };

        let location = navigator.location();
        let matched = match match_path(&location, self.path.as_deref(), self.exact)? {
            Some(matched) => matched,
            None => return Ok(None),
        };

        match &self.view {
            Some(View::Factory(factory)) => Ok(Some(factory(matched))),
            Some(View::Callback(callback)) => Ok(Some(callback(RenderArgs { matched }))),
            None => Ok(None),
        }
    }
}

impl<V: 'static> Route<V> {
    /// Mount this route on the given navigator.
    ///
    /// Registers with the navigation registry, subscribes to the
    /// back/forward signal, and performs the initial render pass. Mounting an
    /// already mounted route does nothing, so the registry never holds a
    /// duplicate entry. An invalid pattern surfaces here, from the initial
    /// render.
    pub fn mount(self: &Rc<Self>, navigator: &Navigator) -> Result<(), Error> {
        if self.is_mounted() {
            return Ok(());
        }

        let id = {
            let observer: Rc<dyn Observer> = self.clone();
            navigator.register(Rc::downgrade(&observer))
        };

        let listener = {
            let route = Rc::downgrade(self);
            navigator.history().listen(Rc::new(move || {
                if let Some(route) = route.upgrade() {
                    if let Err(error) = route.refresh() {
                        log::warn!("route failed to render on navigation: {}", error);
                    }
                }
            }))
        };

        *self.mounted.borrow_mut() = Some(Mounted {
            navigator: navigator.clone(),
            id: id,
            listener: listener,
        });

        self.refresh()
    }

    /// Unmount this route.
    ///
    /// Unsubscribes from the back/forward signal and leaves the registry; no
    /// further broadcasts reach this route. Does nothing if not mounted.
    pub fn unmount(&self) {
        if let Some(mounted) = self.mounted.borrow_mut().take() {
            mounted.navigator.history().unlisten(mounted.listener);
            mounted.navigator.unregister(mounted.id);
        }
    }
}

impl<V> Observer for Route<V> {
    fn refresh(&self) -> Result<(), Error> {
        let output = self.render()?;
        (self.sink)(output);
        Ok(())
    }
}
