#![forbid(unsafe_code)]

//! The navigation handle contexts synchronize against.
//!
//! The handle is constructed once per process by the host and passed down
//! explicitly to every builder that wants sync; the library never reaches
//! for a global. [`MemoryHistory`] is the in-process implementation used by
//! hosts and tests alike; embedding layers that sit on a real browser hash
//! history implement [`History`] over it instead.

use tracing::trace;
use weft_state::{StateCell, Subscription};

/// Process-wide navigation handle.
///
/// Exposes the current hash path, a replace-path operation, and a change
/// subscription. `replace` swaps the current entry in place; no history
/// entries accumulate however often state changes push new paths.
pub trait History {
    /// The current hash path, e.g. `"lang=en&theme=dark"`.
    fn current_path(&self) -> String;

    /// Replace the current path in place.
    fn replace(&self, path: &str);

    /// Subscribe to path changes. The callback receives the new path.
    ///
    /// Dropping the returned guard unsubscribes.
    fn on_change(&self, callback: Box<dyn Fn(&str)>) -> Subscription;
}

/// In-memory [`History`].
///
/// The path lives in a [`StateCell`], so `replace` with an unchanged path
/// is a no-op and change subscribers are notified in registration order.
/// Cloning shares the same underlying path.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    path: StateCell<String>,
}

impl MemoryHistory {
    /// Create a history positioned at the empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history positioned at the given path.
    #[must_use]
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: StateCell::new(path.into()),
        }
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.path.get()
    }

    fn replace(&self, path: &str) {
        trace!(path, "history replace");
        self.path.set(path.to_owned());
    }

    fn on_change(&self, callback: Box<dyn Fn(&str)>) -> Subscription {
        self.path.subscribe(move |path: &String| callback(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_at_empty_path() {
        assert_eq!(MemoryHistory::new().current_path(), "");
    }

    #[test]
    fn with_path_positions_the_history() {
        let history = MemoryHistory::with_path("lang=en");
        assert_eq!(history.current_path(), "lang=en");
    }

    #[test]
    fn replace_swaps_the_current_path() {
        let history = MemoryHistory::new();
        history.replace("theme=dark");
        history.replace("theme=light");
        assert_eq!(history.current_path(), "theme=light");
    }

    #[test]
    fn on_change_observes_replacements() {
        let history = MemoryHistory::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen2 = Rc::clone(&seen);
        let _sub = history.on_change(Box::new(move |path| {
            seen2.borrow_mut().push(path.to_owned());
        }));

        history.replace("lang=en");
        history.replace("lang=ru");
        assert_eq!(*seen.borrow(), vec!["lang=en", "lang=ru"]);
    }

    #[test]
    fn replace_with_same_path_does_not_notify() {
        let history = MemoryHistory::with_path("lang=en");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen2 = Rc::clone(&seen);
        let _sub = history.on_change(Box::new(move |path| {
            seen2.borrow_mut().push(path.to_owned());
        }));

        history.replace("lang=en");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn clones_share_the_same_path() {
        let a = MemoryHistory::new();
        let b = a.clone();
        a.replace("enabled=true");
        assert_eq!(b.current_path(), "enabled=true");
    }
}
