/// A canvas that records draw calls.
pub mod canvas;
/// An event-recording widget.
pub mod probe;

pub use canvas::RecordingCanvas;
pub use probe::{EventLog, Probe};

use crate::{
    NodeId,
    error::Result,
    node::Props,
    widget::Blank,
    world::Core,
};

/// Create a detached leaf with a fixed size.
pub fn fixed_leaf(core: &mut Core, w: u32, h: u32) -> Result<NodeId> {
    let id = core.create_leaf(Blank);
    core.set_props(id, Props::new().fixed().size((w, h)))?;
    Ok(id)
}

/// Create a fixed-size probe leaf that records into `log`.
pub fn fixed_probe(core: &mut Core, label: &str, log: &EventLog, w: u32, h: u32) -> Result<NodeId> {
    let id = core.create_leaf(Probe::with_log(label, log));
    core.set_props(id, Props::new().fixed().size((w, h)))?;
    Ok(id)
}

/// Attach one fixed leaf per size to `parent`, returning them in order.
pub fn fixed_children(core: &mut Core, parent: NodeId, sizes: &[(u32, u32)]) -> Result<Vec<NodeId>> {
    sizes
        .iter()
        .map(|(w, h)| {
            let id = fixed_leaf(core, *w, *h)?;
            core.add(parent, id)?;
            Ok(id)
        })
        .collect()
}
