//! A clickable affordance bound to a target path.

use crate::navigator::Navigator;

/// A link to a target path on a [`Navigator`].
///
/// Activating the link performs one navigation operation (`push` by default,
/// `replace` when so configured) and relies on the registry broadcast to
/// update every mounted route. There is no debouncing; every activation is
/// one operation and one broadcast.
///
/// [`Navigator`]: ../navigator/struct.Navigator.html
pub struct Link {
    navigator: Navigator,
    to: String,
    replace: bool,
}

impl Link {
    /// Create a link to the given path.
    pub fn new(navigator: &Navigator, to: &str) -> Self {
        Link {
            navigator: navigator.clone(),
            to: to.to_string(),
            replace: false,
        }
    }

    /// Overwrite the current history entry instead of pushing a new one.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// The target path, for rendering a real anchor.
    pub fn href(&self) -> &str {
        &self.to
    }

    /// Navigate to the target path.
    pub fn follow(&self) {
        if self.replace {
            self.navigator.replace(&self.to);
        }
        else {
            self.navigator.push(&self.to);
        }
    }

    /// Handle a click on the rendered anchor.
    ///
    /// Suppresses the browser's native navigation and follows the link
    /// through the router instead.
    pub fn handle_click(&self, event: &web_sys::Event) {
        event.prevent_default();
        self.follow();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use crate::history::{History, MemoryHistory};

    #[test]
    fn follow_pushes_by_default() {
        let history = Rc::new(MemoryHistory::new("/"));
        let nav = Navigator::new(history.clone());

        let link = Link::new(&nav, "/login");
        link.follow();

        assert_eq!(history.len(), 2);
        assert_eq!(history.location(), "/login");
    }

    #[test]
    fn follow_can_replace() {
        let history = Rc::new(MemoryHistory::new("/"));
        let nav = Navigator::new(history.clone());

        let link = Link::new(&nav, "/login").replace(true);
        link.follow();

        assert_eq!(history.len(), 1);
        assert_eq!(history.location(), "/login");
    }

    #[test]
    fn each_activation_is_one_operation() {
        let history = Rc::new(MemoryHistory::new("/"));
        let nav = Navigator::new(history.clone());

        let link = Link::new(&nav, "/login");
        link.follow();
        link.follow();

        assert_eq!(history.len(), 3);
    }
}
