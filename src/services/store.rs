use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::models::notification::Notification;

/// How many undelivered notifications are kept before the oldest are dropped.
pub const MAX_PENDING: usize = 100;

/// Backing store for notifications waiting to be polled.
///
/// The store is global rather than keyed by speaker: every poller drains the
/// same queue.
pub trait NotificationStore: Send + Sync {
    /// Appends a notification, evicting the oldest entries past the bound.
    fn enqueue(&self, notification: Notification) -> Result<(), StoreError>;

    /// Returns every pending notification and leaves the store empty.
    fn drain(&self) -> Result<Vec<Notification>, StoreError>;

    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[derive(Clone)]
pub struct MemoryStore {
    pending: Arc<Mutex<VecDeque<Notification>>>,
    capacity: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_PENDING)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore for MemoryStore {
    fn enqueue(&self, notification: Notification) -> Result<(), StoreError> {
        let mut pending = self.pending.lock().map_err(|_| StoreError::Poisoned)?;
        pending.push_back(notification);
        while pending.len() > self.capacity {
            pending.pop_front();
        }
        Ok(())
    }

    fn drain(&self) -> Result<Vec<Notification>, StoreError> {
        let mut pending = self.pending.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(std::mem::take(&mut *pending).into())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let pending = self.pending.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(pending.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(n: usize) -> Notification {
        Notification::new(None, "new-order.mp3".to_string(), format!("order {}", n), None)
    }

    #[test]
    fn keeps_only_the_most_recent_hundred() {
        let store = MemoryStore::new();
        for n in 0..105 {
            store.enqueue(notification(n)).unwrap();
        }

        let drained = store.drain().unwrap();
        assert_eq!(drained.len(), MAX_PENDING);
        let messages: Vec<String> = drained.into_iter().map(|n| n.message).collect();
        let expected: Vec<String> = (5..105).map(|n| format!("order {}", n)).collect();
        assert_eq!(messages, expected);
    }

    #[test]
    fn drain_empties_the_store() {
        let store = MemoryStore::new();
        store.enqueue(notification(1)).unwrap();
        store.enqueue(notification(2)).unwrap();

        assert_eq!(store.drain().unwrap().len(), 2);
        assert!(store.is_empty().unwrap());
        assert!(store.drain().unwrap().is_empty());
    }

    #[test]
    fn clones_share_the_same_queue() {
        let store = MemoryStore::new();
        let handle = store.clone();
        handle.enqueue(notification(1)).unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn concurrent_enqueue_and_drain_lose_nothing() {
        let store = MemoryStore::with_capacity(10_000);
        let writers: Vec<_> = (0..4)
            .map(|w| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for n in 0..250 {
                        store.enqueue(notification(w * 1000 + n)).unwrap();
                    }
                })
            })
            .collect();

        let mut delivered = 0;
        while writers.iter().any(|w| !w.is_finished()) {
            delivered += store.drain().unwrap().len();
        }
        for writer in writers {
            writer.join().unwrap();
        }
        delivered += store.drain().unwrap().len();

        assert_eq!(delivered, 1000);
    }
}
