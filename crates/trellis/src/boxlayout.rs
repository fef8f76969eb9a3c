//! The box layout engine: stacks children along one axis, growing them into
//! the available space and spreading whatever is left into alignment-driven
//! gaps.

use tracing::debug;

use crate::{
    NodeId,
    align::{Align, AxisAlign, Axis, align_child},
    error::{Error, Result},
    geom::{Margin, Point, Size, add_without_overflow, to_coord},
    node::{ContainerState, NodeKind},
    world::Core,
};

/// Stacking direction of a box layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Horizontal, first child at the left.
    LeftToRight,
    /// Horizontal, first child at the right.
    RightToLeft,
    /// Vertical, first child at the top.
    TopToBottom,
    /// Vertical, first child at the bottom.
    BottomToTop,
}

impl Direction {
    /// True for the two horizontal directions.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::LeftToRight | Self::RightToLeft)
    }

    /// True for the two vertical directions.
    pub fn is_vertical(&self) -> bool {
        !self.is_horizontal()
    }

    /// True if children are iterated in insertion order.
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::LeftToRight | Self::TopToBottom)
    }

    /// True if children are iterated in reverse insertion order.
    pub fn is_reverse(&self) -> bool {
        !self.is_forward()
    }

    /// The primary axis.
    pub fn axis(&self) -> Axis {
        if self.is_horizontal() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Child indices in the order they are positioned and drawn.
    pub fn order(&self, n: usize) -> Vec<usize> {
        if self.is_forward() {
            (0..n).collect()
        } else {
            (0..n).rev().collect()
        }
    }
}

/// Which directions a box accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxKind {
    /// Any of the four directions.
    Any,
    /// Only horizontal directions.
    Horizontal,
    /// Only vertical directions.
    Vertical,
}

impl BoxKind {
    /// True if a box of this kind may take the direction.
    pub fn accepts(&self, direction: Direction) -> bool {
        match self {
            Self::Any => true,
            Self::Horizontal => direction.is_horizontal(),
            Self::Vertical => direction.is_vertical(),
        }
    }

    /// Short label for debug output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Any => "box",
            Self::Horizontal => "hbox",
            Self::Vertical => "vbox",
        }
    }
}

/// Per-node state for a box layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxState {
    /// Hover and click routing.
    pub(crate) routing: ContainerState,
    /// Current direction.
    pub(crate) direction: Direction,
    /// Direction predicate.
    pub(crate) kind: BoxKind,
}

impl BoxState {
    /// A box with the given kind and starting direction.
    pub(crate) fn new(kind: BoxKind, direction: Direction) -> Self {
        Self {
            routing: ContainerState::default(),
            direction,
            kind,
        }
    }

    /// Current direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction predicate.
    pub fn kind(&self) -> BoxKind {
        self.kind
    }
}

/// The layout-relevant view of one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSpec {
    /// Policy-limited minimum.
    pub min: Size,
    /// Policy-limited maximum.
    pub max: Size,
    /// Margin, clamped to the signed range.
    pub margin: Margin,
    /// Alignment flags.
    pub align: Align,
}

/// Where a child ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Position relative to the box.
    pub position: Point,
    /// The child's own size, margins excluded.
    pub size: Size,
}

/// Which code path a layout took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPath {
    /// The box was smaller than its content and was grown; children sit at
    /// their minimum.
    Expand,
    /// Children fit; slack was distributed.
    Refit,
}

/// The result of planning a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Path taken.
    pub path: LayoutPath,
    /// One placement per child, in insertion order.
    pub placements: Vec<Placement>,
    /// Slack-distribution passes used.
    pub passes: usize,
}

/// Extent along an axis.
fn extent_on(s: Size, axis: Axis) -> u32 {
    match axis {
        Axis::Horizontal => s.w,
        Axis::Vertical => s.h,
    }
}

/// Leading and trailing margin along an axis.
fn margins(m: Margin, axis: Axis) -> (u32, u32) {
    match axis {
        Axis::Horizontal => (m.left, m.right),
        Axis::Vertical => (m.top, m.bottom),
    }
}

/// Build a size from primary and cross extents.
fn size_from(axis: Axis, main_v: u32, cross_v: u32) -> Size {
    match axis {
        Axis::Horizontal => Size::new(main_v, cross_v),
        Axis::Vertical => Size::new(cross_v, main_v),
    }
}

/// Build a point from primary and cross coordinates.
fn point_from(axis: Axis, main_v: i32, cross_v: i32) -> Point {
    match axis {
        Axis::Horizontal => Point::new(main_v, cross_v),
        Axis::Vertical => Point::new(cross_v, main_v),
    }
}

/// Stack outer sizes: sum along the primary axis, max along the cross axis.
fn stack(sizes: impl Iterator<Item = Size>, axis: Axis) -> Size {
    let (m, c) = sizes.fold((0u32, 0u32), |(m, c), s| {
        (
            add_without_overflow(m, extent_on(s, axis)),
            c.max(extent_on(s, axis.cross())),
        )
    });
    size_from(axis, m, c)
}

/// Minimum outer footprint of the children stacked along `axis`.
pub fn content_min_size(children: &[ChildSpec], axis: Axis) -> Size {
    stack(children.iter().map(|c| c.margin.outer_from_size(c.min)), axis)
}

/// Maximum outer footprint of the children stacked along `axis`.
pub fn content_max_size(children: &[ChildSpec], axis: Axis) -> Size {
    stack(children.iter().map(|c| c.margin.outer_from_size(c.max)), axis)
}

/// Result of slack distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    /// Slack nobody could absorb.
    pub leftover: u32,
    /// Passes taken.
    pub passes: usize,
}

/// Grow `sizes` towards `max` by handing out `slack` in equal increments.
/// Each pass gives every child with headroom `max(1, slack / eligible)`,
/// capped by its headroom. A pass either saturates a child or leaves less
/// slack than there are eligible children, which the next pass exhausts, so
/// the loop needs at most `sizes.len()` passes.
pub fn distribute_slack(mut slack: u32, sizes: &mut [u32], max: &[u32]) -> Distribution {
    let mut passes = 0;
    for _ in 0..sizes.len() {
        if slack == 0 {
            break;
        }
        let eligible = sizes.iter().zip(max).filter(|(s, m)| *s < *m).count();
        if eligible == 0 {
            break;
        }
        passes += 1;
        let inc = (slack / u32::try_from(eligible).unwrap_or(u32::MAX)).max(1);
        for (s, m) in sizes.iter_mut().zip(max) {
            if slack == 0 {
                break;
            }
            let room = m.saturating_sub(*s);
            if room == 0 {
                continue;
            }
            let add = inc.min(room).min(slack);
            *s += add;
            slack -= add;
        }
    }
    Distribution {
        leftover: slack,
        passes,
    }
}

/// Decide which of the `n + 1` gaps around `n` children may take slack.
///
/// Gap `i` sits before child `i`; gap `n` follows the last child. A leading
/// child closes the gap before it and opens the one after; a trailing child
/// closes the gap after it and opens the one before, which for the first child
/// is the leading gap. A centered child opens both neighbours, except that the
/// gap between two centered children stays closed so the run is packed and
/// centered together. A closed gap stays closed whatever its other neighbour
/// wants.
pub fn open_gaps(aligns: &[AxisAlign]) -> Vec<bool> {
    let n = aligns.len();
    let mut open = vec![false; n + 1];
    let mut closed = vec![false; n + 1];
    for (i, a) in aligns.iter().enumerate() {
        match a {
            AxisAlign::Leading => {
                closed[i] = true;
                open[i + 1] = true;
            }
            AxisAlign::Trailing => {
                open[i] = true;
                closed[i + 1] = true;
            }
            AxisAlign::Center => {
                let prev_center = i > 0 && aligns[i - 1] == AxisAlign::Center;
                let next_center = aligns.get(i + 1) == Some(&AxisAlign::Center);
                if prev_center {
                    closed[i] = true;
                } else {
                    open[i] = true;
                }
                if next_center {
                    closed[i + 1] = true;
                } else {
                    open[i + 1] = true;
                }
            }
            AxisAlign::None => {}
        }
    }
    open.iter().zip(&closed).map(|(o, c)| *o && !*c).collect()
}

/// Split `slack` evenly over the open gaps. The remainder goes one unit at a
/// time to the first open gaps.
pub fn spacer_gaps(slack: u32, aligns: &[AxisAlign]) -> Vec<u32> {
    let open = open_gaps(aligns);
    let count = u32::try_from(open.iter().filter(|o| **o).count()).unwrap_or(u32::MAX);
    if count == 0 {
        return vec![0; open.len()];
    }
    let per = slack / count;
    let mut rem = slack % count;
    open.iter()
        .map(|o| {
            if !*o {
                return 0;
            }
            if rem > 0 {
                rem -= 1;
                per + 1
            } else {
                per
            }
        })
        .collect()
}

/// Compute placements for `children` (insertion order) in a box of size
/// `extent`. `expand` selects the expand path.
pub fn plan(children: &[ChildSpec], direction: Direction, extent: Size, expand: bool) -> Plan {
    let axis = direction.axis();
    let cross_axis = axis.cross();
    let order = direction.order(children.len());
    let cross_extent = extent_on(extent, cross_axis);
    let mut placements = vec![
        Placement {
            position: Point::zero(),
            size: Size::MIN,
        };
        children.len()
    ];

    // Place a child whose outer primary extent is `outer_main` at `cursor`,
    // with an outer cross extent of `outer_cross`.
    let place = |c: &ChildSpec, cursor: u32, outer_main: u32, outer_cross: u32| {
        let (lead, trail) = margins(c.margin, axis);
        let (clead, ctrail) = margins(c.margin, cross_axis);
        let size_main = outer_main.saturating_sub(add_without_overflow(lead, trail));
        let size_cross = outer_cross.saturating_sub(add_without_overflow(clead, ctrail));
        let cross_pos = align_child(
            cross_extent,
            size_cross,
            clead,
            ctrail,
            c.align.along(cross_axis),
        );
        Placement {
            position: point_from(axis, to_coord(add_without_overflow(cursor, lead)), cross_pos),
            size: size_from(axis, size_main, size_cross),
        }
    };

    if expand {
        let mut cursor = 0u32;
        for &i in &order {
            let c = &children[i];
            let outer = c.margin.outer_from_size(c.min);
            placements[i] = place(c, cursor, extent_on(outer, axis), extent_on(outer, cross_axis));
            cursor = add_without_overflow(cursor, extent_on(outer, axis));
        }
        return Plan {
            path: LayoutPath::Expand,
            placements,
            passes: 0,
        };
    }

    let outer_min: Vec<Size> = order
        .iter()
        .map(|&i| children[i].margin.outer_from_size(children[i].min))
        .collect();
    let outer_max: Vec<Size> = order
        .iter()
        .map(|&i| children[i].margin.outer_from_size(children[i].max))
        .collect();
    let mut sizes: Vec<u32> = outer_min.iter().map(|s| extent_on(*s, axis)).collect();
    let maxes: Vec<u32> = outer_max.iter().map(|s| extent_on(*s, axis)).collect();

    let total = sizes.iter().fold(0u32, |t, s| add_without_overflow(t, *s));
    let slack = extent_on(extent, axis).saturating_sub(total);
    let dist = distribute_slack(slack, &mut sizes, &maxes);

    let aligns: Vec<AxisAlign> = order.iter().map(|&i| children[i].align.along(axis)).collect();
    let gaps = spacer_gaps(dist.leftover, &aligns);

    let mut cursor = 0u32;
    for (k, &i) in order.iter().enumerate() {
        cursor = add_without_overflow(cursor, gaps[k]);
        let outer_cross = extent_on(outer_max[k], cross_axis)
            .min(cross_extent)
            .max(extent_on(outer_min[k], cross_axis));
        placements[i] = place(&children[i], cursor, sizes[k], outer_cross);
        cursor = add_without_overflow(cursor, sizes[k]);
    }

    Plan {
        path: LayoutPath::Refit,
        placements,
        passes: dist.passes,
    }
}

/// Gather the layout view of a box's children.
pub(crate) fn child_specs(core: &Core, id: NodeId) -> Result<Vec<ChildSpec>> {
    let node = core.nodes.get(id).ok_or(Error::NodeNotFound(id))?;
    node.children
        .iter()
        .map(|child| {
            let c = core.nodes.get(*child).ok_or(Error::NodeNotFound(*child))?;
            let (min, max) = c.limits_with_policy();
            Ok(ChildSpec {
                min,
                max,
                margin: c.alignment.layout_margin(),
                align: c.alignment.align,
            })
        })
        .collect()
}

/// The direction of a box node.
pub(crate) fn direction_of(core: &Core, id: NodeId) -> Result<Direction> {
    match core.nodes.get(id).map(|n| n.kind) {
        Some(NodeKind::Box(b)) => Ok(b.direction),
        Some(_) => Err(Error::NotABox(id)),
        None => Err(Error::NodeNotFound(id)),
    }
}

/// Recompute a box: set its limits from the content footprint, then place
/// every child. Children are resized without notifying this box again. The
/// box's own notifications are left to the caller.
///
/// The min becomes the content minimum, which may grow the box. The max
/// becomes the content maximum, but never drops below the box's current
/// size: a size set on the box pulls its max with it, and the box keeps it.
pub(crate) fn layout_box(core: &mut Core, id: NodeId) -> Result<LayoutPath> {
    let direction = direction_of(core, id)?;
    let specs = child_specs(core, id)?;
    let content_min = content_min_size(&specs, direction.axis());
    let content_max = content_max_size(&specs, direction.axis());

    let node = core.nodes.get_mut(id).ok_or(Error::NodeNotFound(id))?;
    let size = node.sizable.size();
    let expand = size.exceeded_by(&content_min);
    let max = content_max.max(content_min).max(size);
    node.sizable.set_limits(content_min, max);
    let extent = node.sizable.size();
    let children = node.children.clone();

    let plan = plan(&specs, direction, extent, expand);
    debug!(
        ?id,
        path = ?plan.path,
        ?extent,
        ?content_min,
        ?max,
        passes = plan.passes,
        "box layout"
    );
    for (child, placement) in children.into_iter().zip(plan.placements) {
        core.place_child(child, placement)?;
    }
    Ok(plan.path)
}
