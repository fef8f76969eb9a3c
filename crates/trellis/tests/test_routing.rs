//! Integration tests for event routing through containers.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use trellis::{
        Core, EventOutcome, NodeId, Props,
        error::Result,
        event::{Event, EventKind, key::Key, mouse::Button},
        geom::{Point, Size, Vec2},
        testing::{EventLog, Probe, fixed_probe},
        widget::Blank,
    };

    /// A 100×10 hbox holding probes `a` and `b`, 10×10 each, packed left.
    fn two_probes(core: &mut Core, log: &EventLog) -> Result<(NodeId, NodeId, NodeId)> {
        let row = core.hbox();
        core.set_size(row, Size::new(100, 10))?;
        let a = fixed_probe(core, "a", log, 10, 10)?;
        let b = fixed_probe(core, "b", log, 10, 10)?;
        core.add(row, a)?;
        core.add(row, b)?;
        log.clear();
        Ok((row, a, b))
    }

    /// A left-button press at a point.
    fn click(x: i32, y: i32) -> Event {
        Event::Click {
            button: Button::Left,
            pos: Point::new(x, y),
        }
    }

    /// A left-button release at a point.
    fn release(x: i32, y: i32) -> Event {
        Event::Release {
            button: Button::Left,
            pos: Point::new(x, y),
        }
    }

    #[test]
    fn hover_sequence_across_a_gap() -> Result<()> {
        let mut core = Core::new();
        let log = EventLog::new();
        let (row, _, _) = two_probes(&mut core, &log)?;

        core.dispatch(row, &Event::Hover(Point::new(5, 5)))?;
        log.clear();
        core.dispatch(row, &Event::Hover(Point::new(50, 5)))?;
        core.dispatch(row, &Event::Hover(Point::new(15, 5)))?;
        assert_eq!(log.input_trace(), vec!["a:Leave", "b:Enter", "b:Hover"]);
        Ok(())
    }

    #[test]
    fn hover_positions_are_child_local() -> Result<()> {
        let mut core = Core::new();
        let log = EventLog::new();
        let (row, _, _) = two_probes(&mut core, &log)?;
        core.dispatch(row, &Event::Hover(Point::new(13, 4)))?;
        assert_eq!(
            log.entries(),
            vec![
                ("b".to_string(), Event::Enter),
                ("b".to_string(), Event::Hover(Point::new(3, 4))),
            ]
        );
        Ok(())
    }

    #[test]
    fn release_goes_to_the_pressed_child() -> Result<()> {
        let mut core = Core::new();
        let log = EventLog::new();
        let (row, _, _) = two_probes(&mut core, &log)?;

        assert_eq!(core.dispatch(row, &click(5, 5))?, EventOutcome::Handle);
        core.dispatch(row, &release(15, 5))?;
        assert_eq!(
            log.entries(),
            vec![
                ("a".to_string(), click(5, 5)),
                ("a".to_string(), release(15, 5)),
            ]
        );
        Ok(())
    }

    #[test]
    fn keys_follow_the_last_click() -> Result<()> {
        let mut core = Core::new();
        let log = EventLog::new();
        let (row, _, _) = two_probes(&mut core, &log)?;
        let key = Event::Key(Key::press('x'));

        assert_eq!(core.dispatch(row, &key)?, EventOutcome::Ignore);
        assert!(log.entries().is_empty());

        core.dispatch(row, &click(12, 2))?;
        core.dispatch(row, &key)?;
        assert_eq!(log.input_trace(), vec!["b:Click", "b:Key"]);
        Ok(())
    }

    #[test]
    fn click_on_empty_space_falls_through() -> Result<()> {
        let mut core = Core::new();
        let log = EventLog::new();
        let (row, _, _) = two_probes(&mut core, &log)?;
        let hits = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&hits);
        core.add_listener(row, EventKind::Click, move |_, _| {
            *counter.lock().unwrap() += 1;
            true
        })?;

        assert_eq!(core.dispatch(row, &click(60, 5))?, EventOutcome::Handle);
        assert_eq!(*hits.lock().unwrap(), 1);
        assert!(log.entries().is_empty());

        core.dispatch(row, &click(5, 5))?;
        assert_eq!(*hits.lock().unwrap(), 1);
        Ok(())
    }

    #[test]
    fn leave_clears_hover_and_reaches_the_container() -> Result<()> {
        let mut core = Core::new();
        let log = EventLog::new();
        let (row, a, _) = two_probes(&mut core, &log)?;
        let left = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&left);
        core.add_listener(row, EventKind::Leave, move |_, _| {
            *flag.lock().unwrap() = true;
            false
        })?;

        core.dispatch(row, &Event::Hover(Point::new(1, 1)))?;
        let hover = core.node(row).and_then(|n| n.kind().routing().and_then(|s| s.hover()));
        assert_eq!(hover, Some(a));

        assert_eq!(core.dispatch(row, &Event::Leave)?, EventOutcome::Ignore);
        assert!(*left.lock().unwrap());
        let hover = core.node(row).and_then(|n| n.kind().routing().and_then(|s| s.hover()));
        assert_eq!(hover, None);
        assert_eq!(log.input_trace(), vec!["a:Enter", "a:Hover", "a:Leave"]);
        Ok(())
    }

    #[test]
    fn scroll_goes_to_the_hovered_child() -> Result<()> {
        let mut core = Core::new();
        let log = EventLog::new();
        let (row, _, _) = two_probes(&mut core, &log)?;
        let scroll = Event::Scroll {
            offset: Vec2::new(0.0, -1.0),
            pos: Point::new(15, 5),
        };
        core.dispatch(row, &scroll)?;
        assert!(log.entries().is_empty());

        core.dispatch(row, &Event::Hover(Point::new(15, 5)))?;
        core.dispatch(row, &scroll)?;
        assert_eq!(log.input_trace(), vec!["b:Enter", "b:Hover", "b:Scroll"]);
        Ok(())
    }

    #[test]
    fn removed_child_is_forgotten() -> Result<()> {
        let mut core = Core::new();
        let log = EventLog::new();
        let (row, a, _) = two_probes(&mut core, &log)?;
        core.dispatch(row, &Event::Hover(Point::new(5, 5)))?;
        core.dispatch(row, &click(5, 5))?;
        core.remove(row, a)?;
        log.clear();

        let state = core.node(row).and_then(|n| n.kind().routing().copied());
        assert_eq!(state.and_then(|s| s.hover()), None);
        assert_eq!(state.and_then(|s| s.last_clicked()), None);
        core.dispatch(row, &release(5, 5))?;
        assert!(log.entries().is_empty());
        Ok(())
    }

    #[test]
    fn nested_routing_translates_twice() -> Result<()> {
        let mut core = Core::new();
        let log = EventLog::new();
        let column = core.vbox();
        let spacer = core.create_leaf(Blank);
        core.set_props(spacer, Props::new().fixed().size((10, 20)))?;
        core.add(column, spacer)?;
        let (row, _, b) = two_probes(&mut core, &log)?;
        core.add(column, row)?;
        assert_eq!(core.absolute_rect(b)?.tl, Point::new(10, 20));

        let (handler, handled) = Probe::handling("top");
        let top = core.create_leaf(handler);
        core.set_props(top, Props::new().fixed().size((5, 5)))?;
        core.add(column, top)?;
        handled.clear();

        core.dispatch(column, &click(12, 23))?;
        assert_eq!(log.entries(), vec![("b".to_string(), click(2, 3))]);
        assert_eq!(core.dispatch(column, &click(1, 31))?, EventOutcome::Handle);
        assert_eq!(handled.entries(), vec![("top".to_string(), click(1, 1))]);
        Ok(())
    }
}
