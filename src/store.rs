//! In-memory drink collection, synchronized with the remote service.

use crate::api::Drink;

/// Holds the current collection and the outstanding-request flag.
///
/// The collection starts unloaded and is replaced wholesale on every
/// successful read; it is never merged or patched, so after any mutation
/// the list always reflects server truth. A failed read leaves whatever
/// was held before untouched.
#[derive(Debug, Default)]
pub struct DrinkStore {
    drinks: Option<Vec<Drink>>,
    refreshing: bool,
    load_failed: bool,
}

impl DrinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection, or `None` before the first successful read.
    pub fn drinks(&self) -> Option<&[Drink]> {
        self.drinks.as_deref()
    }

    pub fn len(&self) -> usize {
        self.drinks.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&Drink> {
        self.drinks.as_ref().and_then(|drinks| drinks.get(index))
    }

    /// True while a collection read is outstanding.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// True if no read has ever succeeded.
    pub fn never_loaded(&self) -> bool {
        self.drinks.is_none()
    }

    /// True if the most recent read failed.
    pub fn last_load_failed(&self) -> bool {
        self.load_failed
    }

    /// Mark a collection read as in flight.
    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
    }

    /// Replace the collection with a fresh server read.
    pub fn replace(&mut self, drinks: Vec<Drink>) {
        self.drinks = Some(drinks);
        self.refreshing = false;
        self.load_failed = false;
    }

    /// Record a failed read. The previously held collection is kept.
    pub fn mark_load_failed(&mut self) {
        self.refreshing = false;
        self.load_failed = true;
    }
}
