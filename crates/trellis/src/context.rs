//! The handle passed to widget callbacks.

use crate::{
    NodeId,
    error::Result,
    geom::Size,
    world::Core,
};

/// Gives a widget callback access to the arena and its own node.
pub struct Context<'a> {
    /// The arena.
    core: &'a mut Core,
    /// The node whose widget is running.
    node: NodeId,
}

impl<'a> Context<'a> {
    /// Construct a context for a node.
    pub(crate) fn new(core: &'a mut Core, node: NodeId) -> Self {
        Self { core, node }
    }

    /// The node whose widget is running.
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// Shared access to the arena.
    pub fn core(&self) -> &Core {
        self.core
    }

    /// Mutable access to the arena.
    pub fn core_mut(&mut self) -> &mut Core {
        self.core
    }

    /// The node's current size.
    pub fn size(&self) -> Size {
        self.core
            .node(self.node)
            .map(|n| n.size())
            .unwrap_or_default()
    }

    /// Ask for this node to be redrawn.
    pub fn update(&mut self) {
        self.core.update(self.node);
    }

    /// Resize this node. Layout and notifications follow as for
    /// [`Core::set_size`].
    pub fn set_size(&mut self, size: Size) -> Result<()> {
        self.core.set_size(self.node, size).map(|_| ())
    }
}
