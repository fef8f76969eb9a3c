//! Event types: normalized platform input, and the events dispatched to
//! widgets.

/// Keyboard primitives.
pub mod key;
/// Pointer primitives.
pub mod mouse;

use crate::{
    NodeId,
    boxlayout::Direction,
    geom::{Point, Size, Vec2},
};

/// Normalized input from a platform backend. Positions are logical pixels
/// relative to the window's content area.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A keyboard event.
    Key(key::Key),
    /// The pointer moved.
    MouseMove(Point),
    /// The pointer left the window.
    MouseLeave,
    /// A button was pressed or released.
    MouseButton {
        /// The button.
        button: mouse::Button,
        /// Press or release.
        action: mouse::Action,
        /// Pointer position.
        pos: Point,
    },
    /// Scroll wheel or trackpad scroll.
    Scroll {
        /// Scroll offset.
        offset: Vec2,
        /// Pointer position.
        pos: Point,
    },
    /// The content area changed size or scale.
    Resize {
        /// New content size.
        size: Size,
        /// New DPI scale.
        scale: Vec2,
    },
}

/// Events delivered to widgets. Pointer positions are local to the receiving
/// widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event, delivered to the last clicked widget.
    Key(key::Key),
    /// A button press.
    Click {
        /// The button.
        button: mouse::Button,
        /// Pointer position.
        pos: Point,
    },
    /// A button release, delivered to the widget that received the press.
    Release {
        /// The button.
        button: mouse::Button,
        /// Pointer position.
        pos: Point,
    },
    /// The pointer moved over the widget.
    Hover(Point),
    /// The pointer entered the widget.
    Enter,
    /// The pointer left the widget.
    Leave,
    /// Scroll over the widget.
    Scroll {
        /// Scroll offset.
        offset: Vec2,
        /// Pointer position.
        pos: Point,
    },
    /// The widget's current size changed.
    SizeChanged(Size),
    /// The widget's min or max size changed.
    LimitsChanged {
        /// New min size.
        min: Size,
        /// New max size.
        max: Size,
    },
    /// A box layout's direction changed.
    DirectionChanged(Direction),
    /// A child was attached to this container.
    ChildAdded(NodeId),
    /// A child was detached from this container.
    ChildRemoved(NodeId),
}

impl Event {
    /// The discriminant used for listener registration.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Key(_) => EventKind::Key,
            Self::Click { .. } => EventKind::Click,
            Self::Release { .. } => EventKind::Release,
            Self::Hover(_) => EventKind::Hover,
            Self::Enter => EventKind::Enter,
            Self::Leave => EventKind::Leave,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::SizeChanged(_) => EventKind::SizeChanged,
            Self::LimitsChanged { .. } => EventKind::LimitsChanged,
            Self::DirectionChanged(_) => EventKind::DirectionChanged,
            Self::ChildAdded(_) => EventKind::ChildAdded,
            Self::ChildRemoved(_) => EventKind::ChildRemoved,
        }
    }

    /// The pointer position carried by this event, if any.
    pub fn pos(&self) -> Option<Point> {
        match self {
            Self::Click { pos, .. }
            | Self::Release { pos, .. }
            | Self::Scroll { pos, .. }
            | Self::Hover(pos) => Some(*pos),
            _ => None,
        }
    }

    /// Copy of this event with its pointer position replaced.
    pub fn with_pos(&self, p: Point) -> Self {
        match self {
            Self::Click { button, .. } => Self::Click {
                button: *button,
                pos: p,
            },
            Self::Release { button, .. } => Self::Release {
                button: *button,
                pos: p,
            },
            Self::Scroll { offset, .. } => Self::Scroll {
                offset: *offset,
                pos: p,
            },
            Self::Hover(_) => Self::Hover(p),
            other => other.clone(),
        }
    }
}

/// Event discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Key events.
    Key,
    /// Button presses.
    Click,
    /// Button releases.
    Release,
    /// Pointer motion.
    Hover,
    /// Pointer enter.
    Enter,
    /// Pointer leave.
    Leave,
    /// Scrolling.
    Scroll,
    /// Size notifications.
    SizeChanged,
    /// Limit notifications.
    LimitsChanged,
    /// Direction notifications.
    DirectionChanged,
    /// Child attach notifications.
    ChildAdded,
    /// Child detach notifications.
    ChildRemoved,
}
