use crate::{
    NodeId,
    align::{Align, Alignment},
    boxlayout::BoxState,
    geom::{Color, Margin, Point, Rect, Size},
    listeners::Listeners,
    policy::SizePolicies,
    sizable::Sizable,
    state::NodeName,
    widget::Widget,
};

/// Routing state for a container: which child has the pointer and which
/// received the most recent press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerState {
    /// Target for releases and keys.
    pub(crate) last_clicked: Option<NodeId>,
    /// Child currently under the pointer.
    pub(crate) hover: Option<NodeId>,
}

impl ContainerState {
    /// The child that received the most recent press.
    pub fn last_clicked(&self) -> Option<NodeId> {
        self.last_clicked
    }

    /// The child currently under the pointer.
    pub fn hover(&self) -> Option<NodeId> {
        self.hover
    }

    /// Drop any reference to a child that is leaving.
    pub(crate) fn forget(&mut self, child: NodeId) {
        if self.last_clicked == Some(child) {
            self.last_clicked = None;
        }
        if self.hover == Some(child) {
            self.hover = None;
        }
    }
}

/// What kind of node this is. Dispatch and layout branch on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A widget with no children.
    Leaf,
    /// An ordered collection of children positioned by the user.
    Container(ContainerState),
    /// A container that lays its children out along one axis.
    Box(BoxState),
}

impl NodeKind {
    /// Routing state, if this node can have children.
    pub fn routing(&self) -> Option<&ContainerState> {
        match self {
            Self::Leaf => None,
            Self::Container(state) => Some(state),
            Self::Box(b) => Some(&b.routing),
        }
    }

    /// Mutable routing state.
    pub(crate) fn routing_mut(&mut self) -> Option<&mut ContainerState> {
        match self {
            Self::Leaf => None,
            Self::Container(state) => Some(state),
            Self::Box(b) => Some(&mut b.routing),
        }
    }

    /// Short label for debug output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Leaf => "leaf",
            Self::Container(_) => "container",
            Self::Box(b) => b.kind.label(),
        }
    }
}

/// Core node data stored in the arena.
pub struct Node {
    /// Widget behaviour. Taken out of the slot while the widget runs.
    pub(crate) widget: Option<Box<dyn Widget>>,
    /// Leaf, container or box.
    pub(crate) kind: NodeKind,

    /// Parent in the arena tree.
    pub(crate) parent: Option<NodeId>,
    /// Children in insertion order.
    pub(crate) children: Vec<NodeId>,

    /// Top-left corner relative to the parent.
    pub(crate) position: Point,
    /// Min, current and max size.
    pub(crate) sizable: Sizable,
    /// Per-axis size policy.
    pub(crate) policy: SizePolicies,
    /// Alignment flags and margin.
    pub(crate) alignment: Alignment,
    /// Second-stage event listeners.
    pub(crate) listeners: Listeners,

    /// Name for lookups and dumps.
    pub(crate) name: NodeName,
    /// Background fill painted before the widget.
    pub(crate) background: Option<Color>,
    /// Set by `update`, cleared by `draw`.
    pub(crate) needs_draw: bool,
}

impl Node {
    /// Construct a detached node.
    pub(crate) fn new(widget: Box<dyn Widget>, kind: NodeKind) -> Self {
        let name = widget.name();
        // An empty box is bounded by its (empty) content.
        let sizable = match kind {
            NodeKind::Box(_) => Sizable::new(Size::MIN, Size::MIN, Size::MIN),
            _ => Sizable::default(),
        };
        Self {
            widget: Some(widget),
            kind,
            parent: None,
            children: Vec::new(),
            position: Point::zero(),
            sizable,
            policy: SizePolicies::default(),
            alignment: Alignment::default(),
            listeners: Listeners::default(),
            name,
            background: None,
            needs_draw: true,
        }
    }

    /// Return the node's name.
    pub fn name(&self) -> &NodeName {
        &self.name
    }

    /// Return the node's kind.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Return the node's parent, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Return the node's children.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Position relative to the parent.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current size.
    pub fn size(&self) -> Size {
        self.sizable.size()
    }

    /// Minimum size.
    pub fn min_size(&self) -> Size {
        self.sizable.min()
    }

    /// Maximum size.
    pub fn max_size(&self) -> Size {
        self.sizable.max()
    }

    /// The full size triple.
    pub fn sizable(&self) -> &Sizable {
        &self.sizable
    }

    /// Size policy.
    pub fn policy(&self) -> SizePolicies {
        self.policy
    }

    /// Alignment flags.
    pub fn align(&self) -> Align {
        self.alignment.align
    }

    /// Margin box.
    pub fn margin(&self) -> Margin {
        self.alignment.margin
    }

    /// Background colour.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Min and max as the layout engine sees them.
    pub fn limits_with_policy(&self) -> (Size, Size) {
        self.sizable.limits_with_policy(self.policy)
    }

    /// Rectangle relative to the parent.
    pub fn rect(&self) -> Rect {
        self.size().at(self.position)
    }

    /// True if a redraw was requested and not yet painted.
    pub fn needs_draw(&self) -> bool {
        self.needs_draw
    }

    /// Listener registry.
    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }
}

/// A bundle of node settings applied in one step with
/// [`Core::set_props`](crate::Core::set_props). Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    /// Margin box.
    pub(crate) margin: Option<Margin>,
    /// Alignment flags.
    pub(crate) align: Option<Align>,
    /// Size policy.
    pub(crate) policy: Option<SizePolicies>,
    /// Min size.
    pub(crate) min: Option<Size>,
    /// Max size.
    pub(crate) max: Option<Size>,
    /// Current size.
    pub(crate) size: Option<Size>,
    /// Background fill.
    pub(crate) background: Option<Color>,
    /// Node name.
    pub(crate) name: Option<NodeName>,
}

impl Props {
    /// Empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the margin.
    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Set the alignment flags.
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Set the size policy.
    pub fn policy(mut self, policy: SizePolicies) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Fixed on both axes.
    pub fn fixed(self) -> Self {
        self.policy(SizePolicies::FIXED)
    }

    /// Expanding on both axes.
    pub fn expanding(self) -> Self {
        self.policy(SizePolicies::EXPANDING)
    }

    /// Set the minimum size.
    pub fn min_size(mut self, min: impl Into<Size>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the maximum size.
    pub fn max_size(mut self, max: impl Into<Size>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Set the current size.
    pub fn size(mut self, size: impl Into<Size>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the background fill.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the node name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(NodeName::new(name));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forget_clears_matching_refs() {
        let mut state = ContainerState::default();
        let a = NodeId::default();
        state.last_clicked = Some(a);
        state.hover = Some(a);
        state.forget(a);
        assert_eq!(state, ContainerState::default());
    }

    #[test]
    fn props_builder() {
        let p = Props::new()
            .fixed()
            .size((10, 20))
            .align(Align::CENTER)
            .name("OK Button");
        assert_eq!(p.policy, Some(SizePolicies::FIXED));
        assert_eq!(p.size, Some(Size::new(10, 20)));
        assert_eq!(p.name.as_ref().map(NodeName::as_str), Some("OK Button"));
        assert_eq!(p.margin, None);
    }
}
