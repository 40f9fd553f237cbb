use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Weak;

use parking_lot::Mutex;

/// Receives "file-system set changed" notifications.
pub trait InvalidationListener: Send + Sync {
    fn file_systems_changed(&self);
}

/// Handle returned by [`InvalidationBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Publish/subscribe channel for file-system invalidation events.
///
/// The bus is an explicitly constructed, injectable value (no process-wide
/// singleton): construct one per application, share it via `Arc`, and pass it
/// to each resolver. External actors (e.g. a provider whose available
/// instances changed) call [`notify_changed`](Self::notify_changed) to
/// request rebuilds.
///
/// Listeners are held weakly; dropped listeners are pruned lazily on the
/// next notification. Delivery order is unspecified, and notifications are
/// delivered on the notifying thread.
#[derive(Debug, Default)]
pub struct InvalidationBus {
    listeners: Mutex<Vec<(SubscriptionId, Weak<dyn InvalidationListener>)>>,
    next_id: AtomicU64,
}

impl InvalidationBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Weak<dyn InvalidationListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, listener));
        id
    }

    /// Removes a subscription. Unknown (or already removed) ids are a no-op,
    /// which makes disposal idempotent for callers.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().retain(|(sub, _)| *sub != id);
    }

    /// Fire-and-forget notification that the set of available file systems
    /// may have changed.
    pub fn notify_changed(&self) {
        // Upgrade under the lock, invoke outside it, so a listener reacting
        // to the event can subscribe/unsubscribe without deadlocking.
        let live: Vec<_> = {
            let mut listeners = self.listeners.lock();
            listeners.retain(|(_, listener)| listener.strong_count() > 0);
            listeners
                .iter()
                .filter_map(|(_, listener)| listener.upgrade())
                .collect()
        };
        for listener in live {
            listener.file_systems_changed();
        }
    }

    /// Number of live subscriptions; dead listeners are pruned first.
    pub fn listener_count(&self) -> usize {
        let mut listeners = self.listeners.lock();
        listeners.retain(|(_, listener)| listener.strong_count() > 0);
        listeners.len()
    }
}
