use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    context::Context,
    error::Result,
    event::Event,
    state::NodeName,
    widget::{EventOutcome, Widget},
};

/// A log shared between probes and the test that inspects it.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    /// Recorded `(label, event)` pairs.
    inner: Arc<Mutex<Vec<(String, Event)>>>,
}

impl EventLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the log, ignoring poison from a panicking test thread.
    fn lock(&self) -> MutexGuard<'_, Vec<(String, Event)>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an entry.
    fn push(&self, label: &str, event: Event) {
        self.lock().push((label.to_string(), event));
    }

    /// Every `(label, event)` pair so far.
    pub fn entries(&self) -> Vec<(String, Event)> {
        self.lock().clone()
    }

    /// Every event so far, without labels.
    pub fn events(&self) -> Vec<Event> {
        self.lock().iter().map(|(_, e)| e.clone()).collect()
    }

    /// Entries rendered as `label:Kind`, handy for sequence assertions.
    pub fn trace(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|(l, e)| format!("{l}:{:?}", e.kind()))
            .collect()
    }

    /// Entries for pointer and key input only, rendered as by [`Self::trace`].
    pub fn input_trace(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(_, e)| is_input(e))
            .map(|(l, e)| format!("{l}:{:?}", e.kind()))
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

/// True for events that come from user input rather than notifications.
fn is_input(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(_)
            | Event::Click { .. }
            | Event::Release { .. }
            | Event::Hover(_)
            | Event::Enter
            | Event::Leave
            | Event::Scroll { .. }
    )
}

/// A widget that records every event it receives. A handling probe claims
/// user input; all probes ignore notifications.
#[derive(Debug)]
pub struct Probe {
    /// Label written to the log.
    label: String,
    /// Shared log.
    log: EventLog,
    /// Whether input events are handled.
    handles: bool,
}

impl Probe {
    /// A probe with a fresh log that ignores everything.
    pub fn new(label: &str) -> (Self, EventLog) {
        let log = EventLog::new();
        (Self::with_log(label, &log), log)
    }

    /// A probe with a fresh log that handles input.
    pub fn handling(label: &str) -> (Self, EventLog) {
        let (mut probe, log) = Self::new(label);
        probe.handles = true;
        (probe, log)
    }

    /// A probe that records into an existing log and ignores everything.
    pub fn with_log(label: &str, log: &EventLog) -> Self {
        Self {
            label: label.to_string(),
            log: log.clone(),
            handles: false,
        }
    }
}

impl Widget for Probe {
    fn on_event(&mut self, event: &Event, _ctx: &mut Context<'_>) -> Result<EventOutcome> {
        self.log.push(&self.label, event.clone());
        Ok(EventOutcome::from_handled(self.handles && is_input(event)))
    }

    fn name(&self) -> NodeName {
        NodeName::new(self.label.as_str())
    }
}
