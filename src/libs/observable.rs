//! Observable values for binding presentation state to a UI layer.
//!
//! An [`ObservableField`] holds one value and tells two kinds of observers when
//! it changes:
//!
//! - **Listeners** registered with [`ObservableField::subscribe`] are called
//!   synchronously, on the thread that performed the write.
//! - **Watchers** obtained from [`ObservableField::watch`] are
//!   `tokio::sync::watch` receivers for async consumers.
//!
//! Writing a value equal to the current one is not a change and notifies nobody.
//!
//! [`ObservableField::store`] splits a write in two: the value is stored at once
//! and the returned [`PendingChange`] tells listeners later, so several fields
//! can be updated together under an outside lock. A pending change that has been
//! overtaken by a newer write is not delivered.
//!
//! ```rust
//! use todostat::libs::observable::ObservableField;
//!
//! let empty = ObservableField::new(false);
//! let id = empty.subscribe(|value| println!("empty = {}", value));
//! empty.set(true);
//! empty.unsubscribe(id);
//! ```

use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`ObservableField::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct ObservableField<T> {
    value: watch::Sender<T>,
    listeners: Mutex<Vec<(SubscriptionId, Listener<T>)>>,
    next_id: AtomicU64,
    // Bumped on every change, while the watch channel is write-locked
    version: AtomicU64,
}

/// A stored change whose listeners have not been notified yet.
#[must_use = "listeners are only told about the change by `notify`"]
pub struct PendingChange<'a, T> {
    field: &'a ObservableField<T>,
    version: u64,
}

impl<T> ObservableField<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(value: T) -> Self {
        let (value, _) = watch::channel(value);
        Self {
            value,
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            version: AtomicU64::new(0),
        }
    }

    pub fn get(&self) -> T {
        (*self.value.borrow()).clone()
    }

    /// Stores `value` and notifies observers. Returns whether the value changed.
    pub fn set(&self, value: T) -> bool {
        match self.store(value) {
            Some(change) => {
                change.notify();
                true
            }
            None => false,
        }
    }

    /// Stores `value` without calling listeners.
    ///
    /// Watchers see the new value immediately. Listeners are called when the
    /// returned change is notified. Returns `None` if the value did not change.
    pub fn store(&self, value: T) -> Option<PendingChange<'_, T>> {
        let mut version = 0;
        let changed = self.value.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
            true
        });

        changed.then(|| PendingChange { field: self, version })
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn watch(&self) -> watch::Receiver<T> {
        self.value.subscribe()
    }

    /// Resolves with the first value, current or future, that satisfies `predicate`.
    #[allow(clippy::let_and_return)]
    pub async fn wait_for<P>(&self, mut predicate: P) -> T
    where
        P: FnMut(&T) -> bool,
    {
        let mut receiver = self.value.subscribe();
        let value = match receiver.wait_for(|value| predicate(value)).await {
            Ok(value) => (*value).clone(),
            // The sender lives in `self`, so the channel cannot close while we wait
            Err(_) => self.get(),
        };
        // The borrow of `receiver` has to end before it is dropped
        value
    }
}

impl<T> PendingChange<'_, T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Calls every listener with the stored value, unless a newer write has
    /// replaced it in the meantime.
    pub fn notify(self) {
        let value = {
            let current = self.field.value.borrow();
            if self.field.version.load(Ordering::SeqCst) != self.version {
                return;
            }
            (*current).clone()
        };

        // Snapshot so listeners may subscribe or unsubscribe while being notified
        let listeners: Vec<Listener<T>> = self.field.listeners.lock().iter().map(|(_, listener)| listener.clone()).collect();
        for listener in listeners {
            listener(&value);
        }
    }
}

impl<T> Default for ObservableField<T>
where
    T: Clone + PartialEq + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableField")
            .field("value", &*self.value.borrow())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn set_notifies_only_on_change() {
        let field = ObservableField::new(false);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        field.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(field.set(true));
        assert!(!field.set(true));
        assert!(field.set(false));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn listener_receives_new_value() {
        let field = ObservableField::new(0usize);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        field.subscribe(move |value| sink.lock().push(*value));

        field.set(3);
        field.set(5);
        assert_eq!(*seen.lock(), vec![3, 5]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let field = ObservableField::new(false);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let id = field.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(field.unsubscribe(id));
        assert!(!field.unsubscribe(id));
        field.set(true);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(field.listener_count(), 0);
    }

    #[tokio::test]
    async fn watchers_see_changes() {
        let field = ObservableField::new(false);
        let mut receiver = field.watch();

        field.set(true);
        receiver.changed().await.unwrap();
        assert!(*receiver.borrow());
    }

    #[test]
    fn store_defers_listeners_until_notified() {
        let field = ObservableField::new(0usize);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        field.subscribe(move |value| sink.lock().push(*value));

        let change = field.store(4).unwrap();
        assert_eq!(field.get(), 4);
        assert!(seen.lock().is_empty());

        change.notify();
        assert_eq!(*seen.lock(), vec![4]);
        assert!(field.store(4).is_none());
    }

    #[test]
    fn overtaken_change_is_not_delivered() {
        let field = ObservableField::new(0usize);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        field.subscribe(move |value| sink.lock().push(*value));

        let stale = field.store(1).unwrap();
        field.set(2);
        stale.notify();

        assert_eq!(*seen.lock(), vec![2]);
    }

    #[tokio::test]
    async fn wait_for_resolves_on_later_write() {
        let field = Arc::new(ObservableField::new(true));
        let writer = field.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            writer.set(false);
        });

        assert!(!field.wait_for(|loading| !loading).await);
    }

    #[tokio::test]
    async fn wait_for_returns_current_value_when_it_matches() {
        let field = ObservableField::new(7);
        assert_eq!(field.wait_for(|value| *value == 7).await, 7);
    }
}
