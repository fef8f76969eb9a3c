//! The cross-thread input queue. Any thread may push; the owning thread drains
//! it once per loop iteration.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::{trace, warn};

use crate::{WindowId, event::InputEvent};

/// Shared queue storage.
type Shared = Arc<Mutex<VecDeque<(WindowId, InputEvent)>>>;

/// Lock the queue. The queue holds plain data, so a poisoned lock is
/// recovered rather than propagated.
fn lock(inner: &Shared) -> MutexGuard<'_, VecDeque<(WindowId, InputEvent)>> {
    inner.lock().unwrap_or_else(|e: PoisonError<_>| {
        warn!("event queue lock poisoned, recovering");
        e.into_inner()
    })
}

/// The receiving end, owned by the application.
#[derive(Debug, Default)]
pub struct EventQueue {
    /// Pending events.
    inner: Shared,
}

impl EventQueue {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle other threads can push through.
    pub fn sender(&self) -> EventSender {
        EventSender {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Take everything queued so far, in arrival order.
    pub fn drain(&self) -> Vec<(WindowId, InputEvent)> {
        let events: Vec<_> = lock(&self.inner).drain(..).collect();
        if !events.is_empty() {
            trace!(count = events.len(), "drained input");
        }
        events
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        lock(&self.inner).len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pushes input onto an application's queue from any thread.
#[derive(Debug, Clone)]
pub struct EventSender {
    /// Shared queue.
    inner: Shared,
}

impl EventSender {
    /// Queue an event for a window.
    pub fn send(&self, window: WindowId, event: InputEvent) {
        trace!(?window, ?event, "queued input");
        lock(&self.inner).push_back((window, event));
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::geom::Point;

    #[test]
    fn cross_thread_order() {
        let queue = EventQueue::new();
        let window = WindowId::default();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let sender = queue.sender();
                thread::spawn(move || {
                    for i in 0..10 {
                        sender.send(window, InputEvent::MouseMove(Point::new(t, i)));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let events = queue.drain();
        assert_eq!(events.len(), 40);
        assert!(queue.is_empty());
        for t in 0..4 {
            let ys: Vec<i32> = events
                .iter()
                .filter_map(|(_, e)| match e {
                    InputEvent::MouseMove(p) if p.x == t => Some(p.y),
                    _ => None,
                })
                .collect();
            assert_eq!(ys, (0..10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn poisoned_lock_recovers() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        let inner = Arc::clone(&queue.inner);
        let _ = thread::spawn(move || {
            let _guard = inner.lock().unwrap();
            panic!("poison");
        })
        .join();
        sender.send(WindowId::default(), InputEvent::MouseLeave);
        assert_eq!(queue.drain().len(), 1);
    }
}
