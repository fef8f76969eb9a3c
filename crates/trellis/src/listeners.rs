//! Per-widget listener registry: the second dispatch stage.

use std::fmt;

use crate::{
    NodeId,
    event::{Event, EventKind},
};

/// A user callback. Returning `true` marks the event handled and stops the
/// remaining listeners from running.
pub type Listener = Box<dyn FnMut(NodeId, &Event) -> bool + Send>;

/// Handle for a registered listener, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

/// A registered listener.
struct Entry {
    /// Removal handle.
    id: ListenerId,
    /// Event kind this listener receives.
    kind: EventKind,
    /// The callback.
    f: Listener,
}

/// Listeners for one widget, kept in insertion order.
#[derive(Default)]
pub struct Listeners {
    /// Registered entries.
    entries: Vec<Entry>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (e.id, e.kind)))
            .finish()
    }
}

impl Listeners {
    /// Register a listener.
    pub(crate) fn add(&mut self, id: ListenerId, kind: EventKind, f: Listener) {
        self.entries.push(Entry { id, kind, f });
    }

    /// Remove a listener. Returns false if it was not registered here.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let len = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != len
    }

    /// Number of listeners registered for a kind.
    pub fn count(&self, kind: EventKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Run the listeners for this event's kind in order, stopping at the first
    /// one that handles it.
    pub(crate) fn notify(&mut self, node: NodeId, event: &Event) -> bool {
        let kind = event.kind();
        self.entries
            .iter_mut()
            .filter(|e| e.kind == kind)
            .any(|e| (e.f)(node, event))
    }
}
