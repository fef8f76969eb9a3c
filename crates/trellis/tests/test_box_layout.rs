//! Integration tests for box layout.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use trellis::{
        Align, BoxKind, Core, Direction, Error, NodeId, NodeKind, Props,
        error::Result,
        geom::{Color, Margin, Point, Rect, Size},
        testing::{RecordingCanvas, fixed_children, fixed_leaf},
        widget::{Blank, Solid},
    };

    /// Positions of a node's children in insertion order.
    fn positions(core: &Core, parent: NodeId) -> Result<Vec<Point>> {
        core.children(parent)
            .iter()
            .map(|c| core.position(*c))
            .collect()
    }

    /// An hbox of the given size holding three fixed 50×20 children.
    fn three_in_row(core: &mut Core, align: Align) -> Result<(NodeId, Vec<NodeId>)> {
        let row = core.hbox();
        core.set_size(row, Size::new(200, 20))?;
        let children = fixed_children(core, row, &[(50, 20); 3])?;
        for c in &children {
            core.set_align(*c, align)?;
        }
        Ok((row, children))
    }

    #[test]
    fn packed_left_without_alignment() -> Result<()> {
        let mut core = Core::new();
        let (row, _) = three_in_row(&mut core, Align::empty())?;
        let xs: Vec<i32> = positions(&core, row)?.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 50, 100]);
        Ok(())
    }

    #[test]
    fn centered_children_pack_in_the_middle() -> Result<()> {
        let mut core = Core::new();
        let (row, _) = three_in_row(&mut core, Align::CENTER)?;
        let xs: Vec<i32> = positions(&core, row)?.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![25, 75, 125]);
        Ok(())
    }

    #[test]
    fn shrinking_below_content_minimum_grows_back() -> Result<()> {
        let mut core = Core::new();
        let (row, _) = three_in_row(&mut core, Align::empty())?;
        core.set_size(row, Size::new(20, 5))?;
        assert_eq!(core.size(row)?, Size::new(150, 20));
        assert_eq!(core.min_size(row)?, Size::new(150, 20));
        let xs: Vec<i32> = positions(&core, row)?.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 50, 100]);
        Ok(())
    }

    #[test]
    fn hbox_rejects_vertical_and_reverses() -> Result<()> {
        let mut core = Core::new();
        let row = core.hbox();
        core.set_size(row, Size::new(30, 10))?;
        let colors = [Color::rgb(1, 0, 0), Color::rgb(0, 1, 0), Color::rgb(0, 0, 1)];
        let mut ids = Vec::new();
        for c in colors {
            let id = core.create_leaf(Solid { color: c });
            core.set_props(id, Props::new().fixed().size((10, 10)))?;
            core.add(row, id)?;
            ids.push(id);
        }

        assert!(!core.set_direction(row, Direction::TopToBottom)?);
        assert_eq!(core.direction(row)?, Direction::LeftToRight);

        assert!(core.set_direction(row, Direction::RightToLeft)?);
        let xs: Vec<i32> = positions(&core, row)?.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![20, 10, 0]);
        assert_eq!(core.draw_order(row), vec![ids[2], ids[1], ids[0]]);

        let mut canvas = RecordingCanvas::default();
        core.draw(row, &mut canvas)?;
        let drawn: Vec<Color> = canvas.fills.iter().map(|(_, c)| *c).collect();
        assert_eq!(drawn, vec![colors[2], colors[1], colors[0]]);
        assert_eq!(canvas.rects_of(colors[0]), vec![Rect::new(20, 0, 10, 10)]);
        Ok(())
    }

    #[test]
    fn vbox_accepts_only_vertical() -> Result<()> {
        let mut core = Core::new();
        let column = core.vbox();
        let kids = fixed_children(&mut core, column, &[(10, 10), (10, 20)])?;
        assert!(!core.set_direction(column, Direction::LeftToRight)?);
        assert!(core.set_direction(column, Direction::BottomToTop)?);
        assert_eq!(core.position(kids[0])?, Point::new(0, 20));
        assert_eq!(core.position(kids[1])?, Point::new(0, 0));
        Ok(())
    }

    #[test]
    fn generic_box_switches_axis() -> Result<()> {
        let mut core = Core::new();
        let b = core.create_box(Direction::LeftToRight);
        fixed_children(&mut core, b, &[(10, 5), (10, 5)])?;
        assert_eq!(core.min_size(b)?, Size::new(20, 5));
        assert!(core.set_direction(b, Direction::TopToBottom)?);
        assert_eq!(core.content_min_size(b)?, Size::new(10, 10));
        assert_eq!(core.min_size(b)?, Size::new(10, 10));
        assert_eq!(core.size(b)?, Size::new(20, 10));
        let kind = core.node(b).map(|n| *n.kind());
        assert!(matches!(kind, Some(NodeKind::Box(s)) if s.kind() == BoxKind::Any));
        Ok(())
    }

    #[test]
    fn expanding_children_share_the_space() -> Result<()> {
        let mut core = Core::new();
        let row = core.hbox();
        core.set_size(row, Size::new(100, 10))?;
        let a = core.create_leaf(Blank);
        let b = core.create_leaf(Blank);
        core.set_props(a, Props::new().min_size((10, 1)).max_size((30, 10)))?;
        core.set_props(b, Props::new().min_size((10, 1)))?;
        core.add(row, a)?;
        core.add(row, b)?;
        assert_eq!(core.size(a)?, Size::new(30, 10));
        assert_eq!(core.size(b)?, Size::new(70, 10));
        assert_eq!(core.position(b)?, Point::new(30, 0));
        Ok(())
    }

    #[test]
    fn margins_and_cross_alignment() -> Result<()> {
        let mut core = Core::new();
        let row = core.hbox();
        core.set_size(row, Size::new(100, 30))?;
        let a = fixed_leaf(&mut core, 10, 10)?;
        core.set_props(
            a,
            Props::new()
                .margin(Margin::new(2, 0, 5, 5))
                .align(Align::LEFT | Align::BOTTOM),
        )?;
        core.add(row, a)?;
        assert_eq!(core.position(a)?, Point::new(5, 20));
        assert_eq!(core.content_min_size(row)?, Size::new(20, 12));
        Ok(())
    }

    #[test]
    fn nested_growth_reaches_the_root() -> Result<()> {
        let mut core = Core::new();
        let root = core.vbox();
        core.set_size(root, Size::new(50, 50))?;
        let row = core.hbox();
        core.add(root, row)?;
        let leaf = fixed_leaf(&mut core, 10, 10)?;
        core.add(row, leaf)?;

        core.set_props(leaf, Props::new().fixed().size((80, 70)))?;
        assert_eq!(core.min_size(row)?, Size::new(80, 70));
        assert_eq!(core.min_size(root)?, Size::new(80, 70));
        assert_eq!(core.size(root)?, Size::new(80, 70));
        Ok(())
    }

    #[test]
    fn removing_a_child_refits() -> Result<()> {
        let mut core = Core::new();
        let (row, kids) = three_in_row(&mut core, Align::CENTER)?;
        core.remove(row, kids[1])?;
        let xs: Vec<i32> = positions(&core, row)?.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![50, 100]);
        Ok(())
    }

    #[test]
    fn random_trees_settle() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(0x7e11);
        for _ in 0..50 {
            let mut core = Core::new();
            let root = core.vbox();
            core.set_size(root, Size::new(rng.random_range(0..300), rng.random_range(0..300)))?;
            let mut boxes = vec![root];
            for _ in 0..rng.random_range(1..20) {
                let parent = boxes[rng.random_range(0..boxes.len())];
                let child = if rng.random_bool(0.3) {
                    let b = if rng.random_bool(0.5) { core.hbox() } else { core.vbox() };
                    boxes.push(b);
                    b
                } else {
                    let leaf = core.create_leaf(Blank);
                    core.set_props(
                        leaf,
                        Props::new()
                            .min_size((rng.random_range(0..40), rng.random_range(0..40)))
                            .align(Align::from_bits_truncate(rng.random())),
                    )?;
                    leaf
                };
                core.add(parent, child)?;
            }

            let snapshot = |core: &Core| -> Vec<(Point, Size)> {
                boxes
                    .iter()
                    .flat_map(|b| core.children(*b).to_vec())
                    .filter_map(|c| core.node(c).map(|n| (n.position(), n.size())))
                    .collect()
            };
            for b in &boxes {
                let node = core.node(*b).ok_or(Error::NodeNotFound(*b))?;
                assert!(node.sizable().is_ordered());
                assert!(node.size().contains(&core.content_min_size(*b)?));
            }
            core.refit(root)?;
            let settled = snapshot(&core);
            core.refit(root)?;
            assert_eq!(snapshot(&core), settled);
        }
        Ok(())
    }
}
