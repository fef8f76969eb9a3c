//! Event routing for nodes with children: hit-testing, hover tracking and
//! click capture.

use tracing::{trace, warn};

use crate::{
    NodeId,
    error::Result,
    event::Event,
    geom::Point,
    node::ContainerState,
    widget::EventOutcome,
    world::Core,
};

/// Order in which children are scanned during a hit-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOrder {
    /// Insertion order: the first matching child wins.
    Forward,
    /// Reverse insertion order: the topmost matching child wins.
    Reverse,
}

/// Find the child of `id` containing `local`, a point in `id`'s coordinates.
pub(crate) fn hit_test(core: &Core, id: NodeId, local: Point, order: ScanOrder) -> Option<NodeId> {
    let node = core.nodes.get(id)?;
    let hit = |child: &&NodeId| {
        core.nodes
            .get(**child)
            .is_some_and(|c| c.rect().contains_point(local))
    };
    match order {
        ScanOrder::Forward => node.children.iter().find(hit).copied(),
        ScanOrder::Reverse => node.children.iter().rev().find(hit).copied(),
    }
}

/// Routing state of a container node.
fn state(core: &Core, id: NodeId) -> ContainerState {
    core.nodes
        .get(id)
        .and_then(|n| n.kind.routing().copied())
        .unwrap_or_default()
}

/// Update routing state in place.
fn with_state(core: &mut Core, id: NodeId, f: impl FnOnce(&mut ContainerState)) {
    if let Some(state) = core.nodes.get_mut(id).and_then(|n| n.kind.routing_mut()) {
        f(state);
    }
}

/// Send an event to a child, translating pointer positions into the child's
/// coordinates. A child that no longer exists is forgotten.
fn forward(core: &mut Core, parent: NodeId, child: NodeId, event: &Event) -> Result<EventOutcome> {
    let Some(position) = core.nodes.get(child).map(|n| n.position) else {
        warn!(?parent, ?child, "routing to a stale child");
        with_state(core, parent, |s| s.forget(child));
        return Ok(EventOutcome::Ignore);
    };
    let event = match event.pos() {
        Some(p) => event.with_pos(p - position),
        None => event.clone(),
    };
    trace!(?parent, ?child, ?event, "forward");
    core.dispatch(child, &event)
}

/// Move the hover to whatever is under `pos`, then deliver the hover.
fn hover(core: &mut Core, id: NodeId, pos: Point) -> Result<EventOutcome> {
    let hit = hit_test(core, id, pos, ScanOrder::Reverse);
    let old = state(core, id).hover;
    if hit != old {
        if let Some(old) = old {
            forward(core, id, old, &Event::Leave)?;
        }
        with_state(core, id, |s| s.hover = hit);
        if let Some(new) = hit {
            forward(core, id, new, &Event::Enter)?;
        }
    }
    match hit {
        Some(child) => forward(core, id, child, &Event::Hover(pos)),
        None => Ok(EventOutcome::Ignore),
    }
}

/// First dispatch stage for a container. Returns `Ignore` when no child took
/// the event, so the container's own widget and listeners see it.
pub(crate) fn route(core: &mut Core, id: NodeId, event: &Event) -> Result<EventOutcome> {
    match event {
        Event::Click { pos, .. } => {
            let Some(child) = hit_test(core, id, *pos, ScanOrder::Reverse) else {
                trace!(?id, ?pos, "click missed all children");
                return Ok(EventOutcome::Ignore);
            };
            with_state(core, id, |s| s.last_clicked = Some(child));
            forward(core, id, child, event)?;
            Ok(EventOutcome::Handle)
        }
        Event::Release { .. } | Event::Key(_) => match state(core, id).last_clicked {
            Some(child) => forward(core, id, child, event),
            None => Ok(EventOutcome::Ignore),
        },
        Event::Hover(pos) => hover(core, id, *pos),
        Event::Leave => {
            if let Some(child) = state(core, id).hover {
                with_state(core, id, |s| s.hover = None);
                forward(core, id, child, event)?;
            }
            Ok(EventOutcome::Ignore)
        }
        Event::Scroll { .. } => match state(core, id).hover {
            Some(child) => forward(core, id, child, event),
            None => Ok(EventOutcome::Ignore),
        },
        _ => Ok(EventOutcome::Ignore),
    }
}
