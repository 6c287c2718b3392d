//! Canonical list store with change notification.
//!
//! A `CanonicalList` owns the single authoritative copy of a collection
//! fetched from the server. Every change publishes a brand new container
//! (`Arc<[T]>`) under a bumped revision; the previous container is never
//! touched. Observers hold a `watch::Receiver` and recompute their derived
//! views whenever a new snapshot arrives.

use std::sync::Arc;

use tokio::sync::watch;

/// Immutable view of the canonical list at one revision.
#[derive(Debug)]
pub struct Snapshot<T> {
    revision: u64,
    items: Arc<[T]>,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            revision: self.revision,
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Snapshot<T> {
    /// Monotonic revision; `0` for the initial empty list.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The items of this revision.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Shared handle on the container.
    #[must_use]
    pub fn container(&self) -> &Arc<[T]> {
        &self.items
    }

    /// Whether two snapshots share the same container.
    #[must_use]
    pub fn same_container(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

/// Single source of truth for one fetched collection.
#[derive(Debug)]
pub struct CanonicalList<T> {
    tx: watch::Sender<Snapshot<T>>,
}

impl<T: Clone> Default for CanonicalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> CanonicalList<T> {
    /// Creates an empty list at revision 0.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Snapshot {
            revision: 0,
            items: Arc::from(Vec::new()),
        });
        Self { tx }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<T> {
        self.tx.borrow().clone()
    }

    /// Subscribes to future snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.tx.subscribe()
    }

    /// Replaces the whole list (initial load or reload).
    pub fn replace_all(&self, items: Vec<T>) {
        self.publish(items);
    }

    /// Applies `mutator` to the first item matching `matches` and publishes
    /// a new container when the mutator succeeds.
    ///
    /// Returns `None` when no item matches. When the mutator returns `Err`
    /// nothing is published.
    pub fn try_update<R, E>(
        &self,
        matches: impl Fn(&T) -> bool,
        mutator: impl FnOnce(&mut T) -> Result<R, E>,
    ) -> Option<Result<R, E>> {
        let current = self.snapshot();
        let index = current.items().iter().position(matches)?;
        let mut next = current.items().to_vec();
        match mutator(&mut next[index]) {
            Ok(out) => {
                self.publish(next);
                Some(Ok(out))
            }
            Err(err) => Some(Err(err)),
        }
    }

    /// Inserts `item` at the head of the list (server-created records).
    pub fn prepend(&self, item: T) {
        let current = self.snapshot();
        let mut next = Vec::with_capacity(current.items().len() + 1);
        next.push(item);
        next.extend_from_slice(current.items());
        self.publish(next);
    }

    /// Removes every item matching `matches`. Publishes only when at least
    /// one item was removed; returns the number removed.
    pub fn remove_where(&self, matches: impl Fn(&T) -> bool) -> usize {
        let current = self.snapshot();
        let next: Vec<T> = current.items().iter().filter(|item| !matches(item)).cloned().collect();
        let removed = current.items().len() - next.len();
        if removed > 0 {
            self.publish(next);
        }
        removed
    }

    fn publish(&self, items: Vec<T>) {
        self.tx.send_modify(|snapshot| {
            snapshot.revision += 1;
            snapshot.items = Arc::from(items);
        });
    }
}
