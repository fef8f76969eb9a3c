//! Trellis: the widget core of a desktop GUI toolkit.
//!
//! Trellis owns an arena of widgets and the protocols that connect them: size
//! negotiation through a min / current / max triple and per-axis size
//! policies, alignment flags with a margin box, two-stage event dispatch, and
//! a box layout engine that stacks children along one axis.
//!
//! # Quick Start
//!
//! The main entry points are:
//! - [`App`] - Windows, global listeners and the cross-thread input queue
//! - [`Core`] - The node arena and layout engine
//! - [`Widget`] - The trait implemented by all widgets
//!
//! Platform windowing, text and image handling live outside this crate. A
//! backend feeds [`event::InputEvent`]s in and supplies a [`render::Canvas`]
//! to draw on.

#![warn(missing_docs)]

pub use trellis_geom as geom;

/// Alignment flags and the margin box.
pub mod align;
/// The application context.
pub mod app;
/// The box layout engine.
pub mod boxlayout;
/// Event routing for containers.
pub mod container;
/// Context handed to widget callbacks.
pub mod context;
/// Debug dump utilities.
pub mod dump;
/// Core error types.
pub mod error;
/// Input and widget event types.
pub mod event;
/// Node ID types.
pub mod id;
/// Listener registry.
pub mod listeners;
/// Node data stored in the arena.
pub mod node;
/// Size policies.
pub mod policy;
/// The cross-thread input queue.
pub mod queue;
/// Drawing interfaces.
pub mod render;
/// The size triple.
pub mod sizable;
/// Node names.
pub mod state;
/// Testing utilities.
#[cfg(any(test, feature = "testing"))]
pub mod testing;
/// The widget trait.
pub mod widget;
/// The node arena.
pub mod world;

pub use align::{Align, Alignment, Axis};
pub use app::{App, Window};
pub use boxlayout::{BoxKind, Direction};
pub use context::Context;
pub use error::{Error, Result};
pub use id::{NodeId, TypedId, WindowId};
pub use listeners::ListenerId;
pub use node::{Node, NodeKind, Props};
pub use policy::{SizePolicies, SizePolicy};
pub use queue::EventSender;
pub use sizable::{Sizable, SizeChanges};
pub use widget::{EventOutcome, Widget};
pub use world::Core;
