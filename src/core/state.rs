//! Shared mutable state seam.
//!
//! Controllers ([`crate::core::Session`], [`crate::core::DirectoryLoader`])
//! read and write their state through [`StateCell`] so the same logic runs
//! against Leptos signals in the browser and plain `Rc<RefCell<_>>` cells in
//! tests.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{GetUntracked, RwSignal, Update};

/// A cell holding a value of type `T`.
pub trait StateCell<T> {
    /// Copy of the current value, without subscribing to changes.
    fn snapshot(&self) -> T;

    /// Mutate the value in place. Returns `None` if the cell is gone.
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Clone> StateCell<T> for Rc<RefCell<T>> {
    fn snapshot(&self) -> T {
        self.borrow().clone()
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Clone + Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn snapshot(&self) -> T {
        self.get_untracked()
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}
