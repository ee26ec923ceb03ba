//! Event bus.
//!
//! Collaborators either subscribe a callback for the kinds they care about
//! or poll the queue with `drain()` once per frame. Both see every event in
//! publication order.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::{EventKind, MatchEvent};

/// Handle returned by `subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriberId(pub u32);

impl SubscriberId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscriber({})", self.0)
    }
}

type Callback = Box<dyn FnMut(&MatchEvent) + Send>;

/// Publish/subscribe hub plus a polled queue.
#[derive(Default)]
pub struct EventBus {
    callbacks: FxHashMap<SubscriberId, Callback>,

    /// Subscribers per kind, in subscription order.
    by_kind: FxHashMap<EventKind, Vec<SubscriberId>>,

    /// Subscribers to every kind.
    wildcard: Vec<SubscriberId>,

    queue: VecDeque<MatchEvent>,
    next_id: u32,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` for every event of `kind`.
    pub fn subscribe(&mut self, kind: EventKind, callback: impl FnMut(&MatchEvent) + Send + 'static) -> SubscriberId {
        let id = self.alloc_id();
        self.callbacks.insert(id, Box::new(callback));
        self.by_kind.entry(kind).or_default().push(id);
        id
    }

    /// Call `callback` for every event.
    pub fn subscribe_all(&mut self, callback: impl FnMut(&MatchEvent) + Send + 'static) -> SubscriberId {
        let id = self.alloc_id();
        self.callbacks.insert(id, Box::new(callback));
        self.wildcard.push(id);
        id
    }

    /// Remove a subscriber. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        if self.callbacks.remove(&id).is_none() {
            return false;
        }
        self.wildcard.retain(|&s| s != id);
        self.by_kind.retain(|_, ids| {
            ids.retain(|&s| s != id);
            !ids.is_empty()
        });
        true
    }

    /// Deliver an event to its subscribers and queue it for polling.
    ///
    /// Subscribers run in subscription order, kind-specific and wildcard
    /// subscribers interleaved.
    pub fn publish(&mut self, event: MatchEvent) {
        let mut targets: Vec<SubscriberId> = self
            .by_kind
            .get(&event.kind())
            .map(|ids| ids.to_vec())
            .unwrap_or_default();
        targets.extend_from_slice(&self.wildcard);
        targets.sort_unstable();

        for id in targets {
            if let Some(callback) = self.callbacks.get_mut(&id) {
                callback(&event);
            }
        }
        self.queue.push_back(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<MatchEvent> {
        self.queue.drain(..).collect()
    }

    /// Number of queued events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.callbacks.len()
    }

    fn alloc_id(&mut self) -> SubscriberId {
        let id = SubscriberId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.callbacks.len())
            .field("queued", &self.queue.len())
            .finish()
    }
}
