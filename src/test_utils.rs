//! Instrumented element types for checking lifetime bookkeeping in tests.

use core::cell::Cell;

/// Counts constructions, clones and drops of the [`Droppable`]s it creates,
/// and can be told to panic on a specific construction.
pub struct DropCounter {
    created: Cell<usize>,
    cloned: Cell<usize>,
    dropped: Cell<usize>,
    fail_at: Cell<Option<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        DropCounter {
            created: Cell::new(0),
            cloned: Cell::new(0),
            dropped: Cell::new(0),
            fail_at: Cell::new(None),
        }
    }

    pub fn new_droppable<T>(&self, value: T) -> Droppable<'_, T> {
        self.construct();
        Droppable {
            value,
            counter: self,
        }
    }

    /// Makes the construction after the next `successes` ones panic.
    pub fn fail_after(&self, successes: usize) {
        self.fail_at.set(Some(self.created.get() + successes));
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn cloned(&self) -> usize {
        self.cloned.get()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    fn construct(&self) {
        let created = self.created.get();
        if self.fail_at.get() == Some(created) {
            self.fail_at.set(None);
            panic!("injected construction failure");
        }
        self.created.set(created + 1);
    }
}

#[derive(Debug)]
pub struct Droppable<'a, T> {
    pub value: T,
    counter: &'a DropCounter,
}

impl<T: Clone> Clone for Droppable<'_, T> {
    fn clone(&self) -> Self {
        self.counter.construct();
        self.counter.cloned.set(self.counter.cloned.get() + 1);
        Droppable {
            value: self.value.clone(),
            counter: self.counter,
        }
    }
}

impl<T> Drop for Droppable<'_, T> {
    fn drop(&mut self) {
        self.counter.dropped.set(self.counter.dropped.get() + 1);
    }
}

impl<T: PartialEq> PartialEq<T> for Droppable<'_, T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl core::fmt::Debug for DropCounter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DropCounter")
            .field("created", &self.created.get())
            .field("cloned", &self.cloned.get())
            .field("dropped", &self.dropped.get())
            .finish()
    }
}

std::thread_local! {
    static DEFAULTS_LEFT: Cell<usize> = Cell::new(usize::MAX);
    static DEFAULTS_DROPPED: Cell<usize> = Cell::new(0);
}

/// A default-constructible value whose `Default` impl panics once the
/// per-thread budget set by [`Fallible::set_budget`] runs out.
#[derive(Debug, PartialEq)]
pub struct Fallible(pub u32);

impl Fallible {
    pub fn set_budget(constructions: usize) {
        DEFAULTS_LEFT.with(|left| left.set(constructions));
        DEFAULTS_DROPPED.with(|dropped| dropped.set(0));
    }

    pub fn dropped() -> usize {
        DEFAULTS_DROPPED.with(|dropped| dropped.get())
    }
}

impl Default for Fallible {
    fn default() -> Self {
        DEFAULTS_LEFT.with(|left| {
            let remaining = left.get();
            if remaining == 0 {
                panic!("injected default construction failure");
            }
            left.set(remaining - 1);
        });
        Fallible(7)
    }
}

impl Drop for Fallible {
    fn drop(&mut self) {
        DEFAULTS_DROPPED.with(|dropped| dropped.set(dropped.get() + 1));
    }
}
