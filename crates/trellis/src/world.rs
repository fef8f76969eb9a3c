use std::any::{Any, type_name};

use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::{
    NodeId, TypedId,
    align::Align,
    boxlayout::{self, BoxKind, BoxState, Direction, Placement},
    container::{self, ScanOrder},
    context::Context,
    error::{Error, Result},
    event::{Event, EventKind},
    geom::{Color, Margin, Point, Rect, Size},
    listeners::ListenerId,
    node::{ContainerState, Node, NodeKind, Props},
    policy::SizePolicies,
    render::{Canvas, DrawContext},
    sizable::{Sizable, SizeChanges},
    state::NodeName,
    widget::{Blank, EventOutcome, Widget},
};

/// The arena that owns every node, plus the bookkeeping that keeps layout
/// recomputation bounded.
pub struct Core {
    /// Node storage.
    pub(crate) nodes: SlotMap<NodeId, Node>,
    /// Boxes currently inside a layout pass. A box on this stack is not laid
    /// out again until its pass finishes.
    layout_stack: Vec<NodeId>,
    /// Next listener handle.
    next_listener: u64,
}

impl Default for Core {
    fn default() -> Self {
        Self::new()
    }
}

impl Core {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            layout_stack: Vec::new(),
            next_listener: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if the handle refers to a live node.
    pub fn contains(&self, id: impl Into<NodeId>) -> bool {
        self.nodes.contains_key(id.into())
    }

    /// Borrow a node.
    pub fn node(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.nodes.get(id.into())
    }

    /// Borrow a node or fail with `NodeNotFound`.
    fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or(Error::NodeNotFound(id))
    }

    /// Mutably borrow a node or fail with `NodeNotFound`.
    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or(Error::NodeNotFound(id))
    }

    /// Insert a detached node.
    fn insert(&mut self, widget: Box<dyn Widget>, kind: NodeKind) -> NodeId {
        let id = self.nodes.insert(Node::new(widget, kind));
        trace!(?id, kind = kind.label(), "created node");
        id
    }

    /// Create a detached leaf.
    pub fn create_leaf<W>(&mut self, widget: W) -> NodeId
    where
        W: Widget + 'static,
    {
        self.insert(Box::new(widget), NodeKind::Leaf)
    }

    /// Create a detached container whose children are positioned by hand.
    pub fn create_container<W>(&mut self, widget: W) -> NodeId
    where
        W: Widget + 'static,
    {
        self.insert(
            Box::new(widget),
            NodeKind::Container(ContainerState::default()),
        )
    }

    /// Create a detached box layout with a custom widget. Fails if the kind
    /// does not accept the starting direction.
    pub fn create_box_with<W>(
        &mut self,
        widget: W,
        kind: BoxKind,
        direction: Direction,
    ) -> Result<NodeId>
    where
        W: Widget + 'static,
    {
        if !kind.accepts(direction) {
            return Err(Error::Invalid(format!(
                "{} cannot lay out {direction:?}",
                kind.label()
            )));
        }
        Ok(self.insert(Box::new(widget), NodeKind::Box(BoxState::new(kind, direction))))
    }

    /// Create a detached box layout that accepts any direction.
    pub fn create_box(&mut self, direction: Direction) -> NodeId {
        self.labelled_box(BoxKind::Any, direction)
    }

    /// Create a detached horizontal box, laid out left to right.
    pub fn hbox(&mut self) -> NodeId {
        self.labelled_box(BoxKind::Horizontal, Direction::LeftToRight)
    }

    /// Create a detached vertical box, laid out top to bottom.
    pub fn vbox(&mut self) -> NodeId {
        self.labelled_box(BoxKind::Vertical, Direction::TopToBottom)
    }

    /// A blank box whose name is its kind label.
    fn labelled_box(&mut self, kind: BoxKind, direction: Direction) -> NodeId {
        let id = self.insert(Box::new(Blank), NodeKind::Box(BoxState::new(kind, direction)));
        if let Some(node) = self.nodes.get_mut(id) {
            node.name = NodeName::new(kind.label());
        }
        id
    }

    /// True if `ancestor` is `node` or one of its ancestors.
    pub fn is_ancestor(&self, ancestor: impl Into<NodeId>, node: impl Into<NodeId>) -> bool {
        let ancestor = ancestor.into();
        let mut current = Some(node.into());
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// True if the node is a box layout.
    fn is_box(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id).map(|n| &n.kind), Some(NodeKind::Box(_)))
    }

    /// The parent if it is a box layout.
    fn box_parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes
            .get(id)
            .and_then(|n| n.parent)
            .filter(|p| self.is_box(*p))
    }

    /// Attach a detached node as the last child of a container. Fires
    /// `ChildAdded` on the container and lays it out again if it is a box.
    pub fn add(&mut self, parent: impl Into<NodeId>, child: impl Into<NodeId>) -> Result<()> {
        let parent = parent.into();
        let child = child.into();
        if self.get(parent)?.kind.routing().is_none() {
            return Err(Error::NotAContainer(parent));
        }
        if self.get(child)?.parent.is_some() {
            return Err(Error::AlreadyAttached(child));
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(Error::WouldCreateCycle { parent, child });
        }

        self.get_mut(child)?.parent = Some(parent);
        self.get_mut(parent)?.children.push(child);
        trace!(?parent, ?child, "attached");

        self.notify(parent, Event::ChildAdded(child))?;
        if self.is_box(parent) {
            self.refit(parent)?;
        }
        self.update(parent);
        Ok(())
    }

    /// Detach a child from a container. Returns false if it was not a child of
    /// this container. The container forgets any hover or click reference to
    /// the child.
    pub fn remove(&mut self, parent: impl Into<NodeId>, child: impl Into<NodeId>) -> Result<bool> {
        let parent = parent.into();
        let child = child.into();
        let node = self.get_mut(parent)?;
        if node.kind.routing().is_none() {
            return Err(Error::NotAContainer(parent));
        }
        let before = node.children.len();
        node.children.retain(|c| *c != child);
        if node.children.len() == before {
            return Ok(false);
        }
        if let Some(state) = node.kind.routing_mut() {
            state.forget(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = None;
        }
        trace!(?parent, ?child, "detached");

        self.notify(parent, Event::ChildRemoved(child))?;
        if self.is_box(parent) {
            self.refit(parent)?;
        }
        self.update(parent);
        Ok(true)
    }

    /// Detach a node from its parent, if it has one.
    pub fn detach(&mut self, child: impl Into<NodeId>) -> Result<()> {
        let child = child.into();
        if let Some(parent) = self.get(child)?.parent {
            self.remove(parent, child)?;
        }
        Ok(())
    }

    /// Detach a node and destroy it along with all of its descendants.
    pub fn remove_subtree(&mut self, root: impl Into<NodeId>) -> Result<()> {
        let root = root.into();
        self.detach(root)?;
        for id in self.subtree_pre_order(root) {
            self.nodes.remove(id);
        }
        Ok(())
    }

    /// The node and its descendants, parents before children.
    fn subtree_pre_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(id) {
                out.push(id);
                stack.extend(node.children.iter().rev());
            }
        }
        out
    }

    /// The node's parent.
    pub fn parent(&self, id: impl Into<NodeId>) -> Option<NodeId> {
        self.nodes.get(id.into()).and_then(|n| n.parent)
    }

    /// The node's children in insertion order. Empty for leaves and unknown
    /// handles.
    pub fn children(&self, id: impl Into<NodeId>) -> &[NodeId] {
        self.nodes
            .get(id.into())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Children in layout and draw order: reversed for boxes running in a
    /// reverse direction.
    pub fn draw_order(&self, id: impl Into<NodeId>) -> Vec<NodeId> {
        let Some(node) = self.nodes.get(id.into()) else {
            return Vec::new();
        };
        match node.kind {
            NodeKind::Box(b) if b.direction.is_reverse() => {
                node.children.iter().rev().copied().collect()
            }
            _ => node.children.clone(),
        }
    }

    /// Position relative to the parent.
    pub fn position(&self, id: impl Into<NodeId>) -> Result<Point> {
        Ok(self.get(id.into())?.position)
    }

    /// Current size.
    pub fn size(&self, id: impl Into<NodeId>) -> Result<Size> {
        Ok(self.get(id.into())?.size())
    }

    /// Minimum size.
    pub fn min_size(&self, id: impl Into<NodeId>) -> Result<Size> {
        Ok(self.get(id.into())?.min_size())
    }

    /// Maximum size.
    pub fn max_size(&self, id: impl Into<NodeId>) -> Result<Size> {
        Ok(self.get(id.into())?.max_size())
    }

    /// Min and max with the node's size policy applied.
    pub fn limits_with_policy(&self, id: impl Into<NodeId>) -> Result<(Size, Size)> {
        Ok(self.get(id.into())?.limits_with_policy())
    }

    /// The node's rectangle in window coordinates.
    pub fn absolute_rect(&self, id: impl Into<NodeId>) -> Result<Rect> {
        let id = id.into();
        let node = self.get(id)?;
        let mut tl = node.position;
        let mut current = node.parent;
        while let Some(p) = current {
            let parent = self.get(p)?;
            tl = tl + parent.position;
            current = parent.parent;
        }
        Ok(node.size().at(tl))
    }

    /// Move a node within its parent. Boxes overwrite positions of their
    /// children on the next layout pass.
    pub fn set_position(&mut self, id: impl Into<NodeId>, position: Point) -> Result<()> {
        let id = id.into();
        self.get_mut(id)?.position = position;
        if let Some(parent) = self.parent(id) {
            self.update(parent);
        }
        Ok(())
    }

    /// Set the current size. A size outside the limits moves the limit.
    pub fn set_size(&mut self, id: impl Into<NodeId>, size: Size) -> Result<SizeChanges> {
        self.mutate_sizable(id.into(), |s| s.set_size(size))
    }

    /// Set the minimum size.
    pub fn set_min_size(&mut self, id: impl Into<NodeId>, min: Size) -> Result<SizeChanges> {
        self.mutate_sizable(id.into(), |s| s.set_min_size(min))
    }

    /// Set the maximum size.
    pub fn set_max_size(&mut self, id: impl Into<NodeId>, max: Size) -> Result<SizeChanges> {
        self.mutate_sizable(id.into(), |s| s.set_max_size(max))
    }

    /// Set both limits at once.
    pub fn set_limits(&mut self, id: impl Into<NodeId>, min: Size, max: Size) -> Result<SizeChanges> {
        self.mutate_sizable(id.into(), |s| s.set_limits(min, max))
    }

    /// Apply a sizable mutation requested from outside the layout engine: a
    /// box lays itself out again, notifications fire, and a box parent is
    /// laid out again.
    fn mutate_sizable(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut Sizable) -> SizeChanges,
    ) -> Result<SizeChanges> {
        let node = self.get_mut(id)?;
        let before = node.sizable;
        if f(&mut node.sizable).is_empty() {
            return Ok(SizeChanges::empty());
        }
        if self.is_box(id) {
            self.relayout(id)?;
        }
        let changes = SizeChanges::between(&before, &self.get(id)?.sizable);
        self.settle(id, before, true)?;
        Ok(changes)
    }

    /// Set the size policy. A box parent is laid out again.
    pub fn set_policy(&mut self, id: impl Into<NodeId>, policy: SizePolicies) -> Result<()> {
        let id = id.into();
        self.get_mut(id)?.policy = policy;
        self.refit_parent(id)
    }

    /// Set the alignment flags. A box parent is laid out again.
    pub fn set_align(&mut self, id: impl Into<NodeId>, align: Align) -> Result<()> {
        let id = id.into();
        self.get_mut(id)?.alignment.align = align;
        self.refit_parent(id)
    }

    /// Set the margin box. A box parent is laid out again.
    pub fn set_margin(&mut self, id: impl Into<NodeId>, margin: Margin) -> Result<()> {
        let id = id.into();
        self.get_mut(id)?.alignment.margin = margin;
        self.refit_parent(id)
    }

    /// Rename a node. The name is stored exactly as given.
    pub fn set_name(&mut self, id: impl Into<NodeId>, name: &str) -> Result<()> {
        self.get_mut(id.into())?.name = NodeName::new(name);
        Ok(())
    }

    /// Set or clear the background fill.
    pub fn set_background(&mut self, id: impl Into<NodeId>, color: Option<Color>) -> Result<()> {
        let id = id.into();
        self.get_mut(id)?.background = color;
        self.update(id);
        Ok(())
    }

    /// Apply a bundle of settings. Limits are applied before the size. The
    /// node settles once and a box parent is laid out once.
    pub fn set_props(&mut self, id: impl Into<NodeId>, props: Props) -> Result<()> {
        let id = id.into();
        let node = self.get_mut(id)?;
        let before = node.sizable;
        match (props.min, props.max) {
            (Some(min), Some(max)) => {
                node.sizable.set_limits(min, max);
            }
            (Some(min), None) => {
                node.sizable.set_min_size(min);
            }
            (None, Some(max)) => {
                node.sizable.set_max_size(max);
            }
            (None, None) => {}
        }
        if let Some(size) = props.size {
            node.sizable.set_size(size);
        }
        if let Some(policy) = props.policy {
            node.policy = policy;
        }
        if let Some(align) = props.align {
            node.alignment.align = align;
        }
        if let Some(margin) = props.margin {
            node.alignment.margin = margin;
        }
        if let Some(color) = props.background {
            node.background = Some(color);
        }
        if let Some(name) = props.name {
            node.name = name;
        }
        let resized = node.sizable != before;

        if resized && self.is_box(id) {
            self.relayout(id)?;
        }
        self.settle(id, before, false)?;
        self.update(id);
        self.refit_parent(id)
    }

    /// The direction of a box layout.
    pub fn direction(&self, id: impl Into<NodeId>) -> Result<Direction> {
        boxlayout::direction_of(self, id.into())
    }

    /// Change a box's direction. Returns `Ok(false)` without changing anything
    /// if the box kind does not accept the direction. Every accepted direction,
    /// including the current one, lays the box out again and fires
    /// `DirectionChanged`.
    pub fn set_direction(&mut self, id: impl Into<NodeId>, direction: Direction) -> Result<bool> {
        let id = id.into();
        let NodeKind::Box(state) = &mut self.get_mut(id)?.kind else {
            return Err(Error::NotABox(id));
        };
        if !state.kind.accepts(direction) {
            debug!(?id, kind = state.kind.label(), ?direction, "direction rejected");
            return Ok(false);
        }
        state.direction = direction;
        self.refit(id)?;
        self.notify(id, Event::DirectionChanged(direction))?;
        self.update(id);
        Ok(true)
    }

    /// Minimum footprint of a box's children along its axis.
    pub fn content_min_size(&self, id: impl Into<NodeId>) -> Result<Size> {
        let id = id.into();
        let direction = self.direction(id)?;
        let specs = boxlayout::child_specs(self, id)?;
        Ok(boxlayout::content_min_size(&specs, direction.axis()))
    }

    /// Maximum footprint of a box's children along its axis.
    pub fn content_max_size(&self, id: impl Into<NodeId>) -> Result<Size> {
        let id = id.into();
        let direction = self.direction(id)?;
        let specs = boxlayout::child_specs(self, id)?;
        Ok(boxlayout::content_max_size(&specs, direction.axis()))
    }

    /// Lay a box out again, notify it of any change to its own size, and lay
    /// out a box parent if the box changed.
    pub fn refit(&mut self, id: impl Into<NodeId>) -> Result<()> {
        let id = id.into();
        if !self.is_box(id) {
            self.get(id)?;
            return Err(Error::NotABox(id));
        }
        let before = self.get(id)?.sizable;
        self.relayout(id)?;
        self.settle(id, before, true)
    }

    /// Lay out the box parent of a node, if any.
    fn refit_parent(&mut self, id: NodeId) -> Result<()> {
        match self.box_parent(id) {
            Some(parent) => self.refit(parent),
            None => Ok(()),
        }
    }

    /// Run the box layout for a node unless it is already being laid out.
    fn relayout(&mut self, id: NodeId) -> Result<()> {
        if self.layout_stack.contains(&id) {
            trace!(?id, "layout already in progress");
            return Ok(());
        }
        self.layout_stack.push(id);
        let result = boxlayout::layout_box(self, id);
        self.layout_stack.pop();
        result.map(|_| ())
    }

    /// Apply a placement computed by a parent box. The child is notified and,
    /// if it is a box, laid out, but the parent is not told about it.
    pub(crate) fn place_child(&mut self, child: NodeId, placement: Placement) -> Result<()> {
        let node = self.get_mut(child)?;
        let before = node.sizable;
        if node.position != placement.position {
            node.position = placement.position;
            node.needs_draw = true;
        }
        let changed = !node.sizable.set_size(placement.size).is_empty();
        if changed && self.is_box(child) {
            self.relayout(child)?;
        }
        self.settle(child, before, false)
    }

    /// Fire `SizeChanged` and `LimitsChanged` for whatever changed since
    /// `before`, at most once each. With `propagate`, a box parent is laid out
    /// again.
    fn settle(&mut self, id: NodeId, before: Sizable, propagate: bool) -> Result<()> {
        let after = self.get(id)?.sizable;
        let changes = SizeChanges::between(&before, &after);
        if changes.is_empty() {
            return Ok(());
        }
        if changes.contains(SizeChanges::SIZE) {
            self.notify(id, Event::SizeChanged(after.size()))?;
        }
        if changes.contains(SizeChanges::LIMITS) {
            self.notify(
                id,
                Event::LimitsChanged {
                    min: after.min(),
                    max: after.max(),
                },
            )?;
        }
        self.update(id);
        if propagate {
            self.refit_parent(id)?;
        }
        Ok(())
    }

    /// Deliver a notification. A widget that is currently running is skipped
    /// and only the listeners see it.
    fn notify(&mut self, id: NodeId, event: Event) -> Result<()> {
        let node = self.get_mut(id)?;
        if node.widget.is_none() {
            trace!(?id, ?event, "widget busy, notifying listeners only");
            node.listeners.notify(id, &event);
            return Ok(());
        }
        self.dispatch(id, &event)?;
        Ok(())
    }

    /// Register a listener for one event kind. Listeners run in registration
    /// order after the node's own handler ignores an event.
    pub fn add_listener<F>(&mut self, id: impl Into<NodeId>, kind: EventKind, f: F) -> Result<ListenerId>
    where
        F: FnMut(NodeId, &Event) -> bool + Send + 'static,
    {
        let id = id.into();
        let handle = ListenerId(self.next_listener);
        self.get_mut(id)?.listeners.add(handle, kind, Box::new(f));
        self.next_listener += 1;
        Ok(handle)
    }

    /// Remove a listener. Returns false if it was not registered on this node.
    pub fn remove_listener(&mut self, id: impl Into<NodeId>, listener: ListenerId) -> Result<bool> {
        Ok(self.get_mut(id.into())?.listeners.remove(listener))
    }

    /// Dispatch an event to a node. Stage one is container routing followed by
    /// the widget's handler; stage two runs the listeners for the event kind,
    /// only if stage one ignored the event.
    pub fn dispatch(&mut self, id: impl Into<NodeId>, event: &Event) -> Result<EventOutcome> {
        let id = id.into();
        let mut outcome = if self.get(id)?.kind.routing().is_some() {
            container::route(self, id, event)?
        } else {
            EventOutcome::Ignore
        };
        if !outcome.is_handled() {
            outcome = self.with_widget_mut(id, |w, core| {
                let mut ctx = Context::new(core, id);
                w.on_event(event, &mut ctx)
            })??;
        }
        if !outcome.is_handled()
            && let Some(node) = self.nodes.get_mut(id)
        {
            outcome = EventOutcome::from_handled(node.listeners.notify(id, event));
        }
        Ok(outcome)
    }

    /// Take a node's widget out of its slot for the duration of a call. Fails
    /// with `ReentrantWidgetBorrow` if the widget is already running.
    pub(crate) fn with_widget_mut<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut Self) -> R,
    ) -> Result<R> {
        let mut widget = self
            .get_mut(id)?
            .widget
            .take()
            .ok_or(Error::ReentrantWidgetBorrow(id))?;
        let out = f(widget.as_mut(), self);
        if let Some(node) = self.nodes.get_mut(id) {
            node.widget = Some(widget);
        }
        Ok(out)
    }

    /// Create a detached leaf and return a handle that remembers its widget
    /// type.
    pub fn create_typed<W>(&mut self, widget: W) -> TypedId<W>
    where
        W: Widget + 'static,
    {
        TypedId::new(self.create_leaf(widget))
    }

    /// Run a closure with mutable access to a widget of type `W`.
    pub fn with_widget<W, R>(
        &mut self,
        id: impl Into<NodeId>,
        f: impl FnOnce(&mut W, &mut Self) -> R,
    ) -> Result<R>
    where
        W: Widget + 'static,
    {
        let id = id.into();
        self.with_widget_mut(id, |w, core| {
            let any = w as &mut dyn Any;
            let widget = any.downcast_mut::<W>().ok_or_else(|| {
                Error::Invalid(format!("expected widget type {}", type_name::<W>()))
            })?;
            Ok(f(widget, core))
        })?
    }

    /// Mark a node and its ancestors as needing a redraw.
    pub fn update(&mut self, id: impl Into<NodeId>) {
        let mut current = Some(id.into());
        while let Some(id) = current {
            let Some(node) = self.nodes.get_mut(id) else {
                break;
            };
            node.needs_draw = true;
            current = node.parent;
        }
    }

    /// Read and clear the redraw flags of a subtree. Returns true if any node
    /// in it asked to be redrawn.
    pub fn take_redraw(&mut self, root: impl Into<NodeId>) -> bool {
        let mut dirty = false;
        for id in self.subtree_pre_order(root.into()) {
            if let Some(node) = self.nodes.get_mut(id) {
                dirty |= node.needs_draw;
                node.needs_draw = false;
            }
        }
        dirty
    }

    /// Paint a subtree: background, then the widget, then the children in
    /// draw order. Clears the redraw flags of everything painted.
    pub fn draw(&mut self, root: impl Into<NodeId>, canvas: &mut dyn Canvas) -> Result<()> {
        let root = root.into();
        let rect = self.absolute_rect(root)?;
        self.draw_node(root, rect, canvas)
    }

    /// Paint one node at an absolute rectangle, then recurse.
    fn draw_node(&mut self, id: NodeId, rect: Rect, canvas: &mut dyn Canvas) -> Result<()> {
        let node = self.get_mut(id)?;
        node.needs_draw = false;
        if let Some(bg) = node.background
            && !bg.is_transparent()
        {
            canvas.fill_rect(rect, bg);
        }
        let ctx = DrawContext { node: id, rect };
        self.with_widget_mut(id, |w, _| w.draw(canvas, &ctx))??;
        for child in self.draw_order(id) {
            let child_rect = self.get(child)?.rect().shift(rect.tl);
            self.draw_node(child, child_rect, canvas)?;
        }
        Ok(())
    }

    /// The child of `id` under `local`, a point in `id`'s own coordinates.
    pub fn hit_test(&self, id: impl Into<NodeId>, local: Point, order: ScanOrder) -> Option<NodeId> {
        container::hit_test(self, id.into(), local, order)
    }

    /// The deepest node under a point given in window coordinates, searching
    /// from `root`.
    pub fn locate(&self, root: impl Into<NodeId>, point: Point) -> Option<NodeId> {
        let root = root.into();
        let rect = self.absolute_rect(root).ok()?;
        if !rect.contains_point(point) {
            return None;
        }
        let mut current = root;
        let mut origin = rect.tl;
        while let Some(child) = container::hit_test(self, current, point - origin, ScanOrder::Reverse) {
            origin = origin + self.nodes.get(child)?.position;
            current = child;
        }
        Some(current)
    }

    /// The first descendant of `root`, in depth-first insertion order, with the
    /// given name.
    pub fn find_child_by_name(&self, root: impl Into<NodeId>, name: &str) -> Option<NodeId> {
        let root = root.into();
        self.subtree_pre_order(root)
            .into_iter()
            .filter(|id| *id != root)
            .find(|id| self.nodes.get(*id).is_some_and(|n| n.name == name))
    }
}
