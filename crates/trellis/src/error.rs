use std::result::Result as StdResult;

use thiserror::Error;

use crate::{NodeId, WindowId, geom};

/// Result type for trellis operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A node handle does not refer to a live node.
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),
    /// A window handle does not refer to a live window.
    #[error("window not found: {0:?}")]
    WindowNotFound(WindowId),
    /// A container operation was attempted on a leaf.
    #[error("node is not a container: {0:?}")]
    NotAContainer(NodeId),
    /// A box layout operation was attempted on something else.
    #[error("node is not a box layout: {0:?}")]
    NotABox(NodeId),
    /// The child already has a parent.
    #[error("node already attached: {0:?}")]
    AlreadyAttached(NodeId),
    /// Attaching would make a node its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Prospective parent.
        parent: NodeId,
        /// Prospective child.
        child: NodeId,
    },
    /// A widget was re-entered while it was already executing.
    #[error("widget re-entered during its own callback: {0:?}")]
    ReentrantWidgetBorrow(NodeId),
    #[error("geometry: {0}")]
    /// Geometry failure.
    Geometry(String),
    #[error("invalid: {0}")]
    /// Invalid input error.
    Invalid(String),
}

impl From<geom::Error> for Error {
    fn from(e: geom::Error) -> Self {
        Self::Geometry(e.to_string())
    }
}
