//! A minimal client side router for Rust WASM front ends.
//!
//! The router decides which declared route's view should render for the
//! current location, and provides navigation primitives that update the
//! location and re-render every mounted route.
//!
//! The pieces are small and composable: [`match_path`] is the pure matching
//! core, a [`Navigator`] owns the registry of mounted routes and the two
//! navigation operations, a [`Route`] observes the location and renders a
//! view through one of two caller supplied strategies, and a [`Link`] turns
//! a click into a navigation operation.
//!
//! The browser is pluggable: everything the router needs from the host is
//! behind the [`History`] trait, with [`BrowserHistory`] for real pages and
//! [`MemoryHistory`] for tests and non-browser embeddings.
//!
//! ```
//! use std::rc::Rc;
//! use waypoint::{MemoryHistory, Navigator, Route};
//!
//! let history = Rc::new(MemoryHistory::new("/users/42"));
//! let nav = Navigator::new(history);
//!
//! let route = Route::builder()
//!     .path("/users")
//!     .component(|m| format!("user page for {}", m.matched_prefix))
//!     .build();
//! route.mount(&nav).unwrap();
//!
//! assert_eq!(route.render().unwrap().as_deref(), Some("user page for /users"));
//!
//! nav.push("/about");
//! assert_eq!(route.render().unwrap(), None);
//! ```
//!
//! [`match_path`]: matcher/fn.match_path.html
//! [`Navigator`]: navigator/struct.Navigator.html
//! [`Route`]: route/struct.Route.html
//! [`Link`]: link/struct.Link.html
//! [`History`]: history/trait.History.html
//! [`BrowserHistory`]: history/struct.BrowserHistory.html
//! [`MemoryHistory`]: history/struct.MemoryHistory.html

#![deny(missing_docs)]

pub mod error;
pub mod history;
pub mod link;
pub mod matcher;
pub mod navigator;
pub mod route;
pub mod test;

pub use crate::error::Error;
pub use crate::history::{BrowserHistory, History, ListenerId, MemoryHistory};
pub use crate::link::Link;
pub use crate::matcher::{match_path, PathMatch};
pub use crate::navigator::{Navigator, Observer, ObserverId};
pub use crate::route::{RenderArgs, Route, RouteBuilder, View};
