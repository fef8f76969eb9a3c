//! Widget trait and event outcome types.

use std::any::Any;

use crate::{
    context::Context,
    error::Result,
    event::Event,
    geom::Color,
    render::{Canvas, DrawContext},
    state::NodeName,
};

/// The result of an event handler.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EventOutcome {
    /// The event was processed and propagation stops.
    Handle,
    /// The event was processed without a state change and propagation stops.
    Consume,
    /// The event was not handled; listeners run and callers may bubble it.
    Ignore,
}

impl EventOutcome {
    /// True unless the outcome is `Ignore`.
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignore)
    }

    /// Map a boolean handled flag.
    pub fn from_handled(handled: bool) -> Self {
        if handled { Self::Handle } else { Self::Ignore }
    }
}

/// Widgets are the behaviour attached to nodes in the Core arena. Geometry,
/// alignment, size policy and listeners live on the node; the widget supplies
/// the first dispatch stage and its own painting.
pub trait Widget: Any + Send {
    /// First-stage event handler. Listeners only run if this returns `Ignore`.
    fn on_event(&mut self, _event: &Event, _ctx: &mut Context<'_>) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// Paint this widget's own content. Does not paint children.
    fn draw(&mut self, _canvas: &mut dyn Canvas, _ctx: &DrawContext) -> Result<()> {
        Ok(())
    }

    /// Name used for lookups and debug output.
    fn name(&self) -> NodeName {
        NodeName::of_type::<Self>()
    }
}

/// Convert widgets into boxed trait objects.
impl<W> From<W> for Box<dyn Widget>
where
    W: Widget + 'static,
{
    fn from(widget: W) -> Self {
        Box::new(widget)
    }
}

/// A widget with no behaviour of its own, used for plain containers and
/// boxes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Blank;

impl Widget for Blank {}

/// A leaf that fills its rectangle with a solid colour.
#[derive(Debug, Clone, Copy)]
pub struct Solid {
    /// Fill colour.
    pub color: Color,
}

impl Widget for Solid {
    fn draw(&mut self, canvas: &mut dyn Canvas, ctx: &DrawContext) -> Result<()> {
        canvas.fill_rect(ctx.rect, self.color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names() {
        assert_eq!(Blank.name(), "blank");
        let solid = Solid {
            color: Color::BLACK,
        };
        assert_eq!(solid.name(), "solid");
        assert!(EventOutcome::Consume.is_handled());
        assert!(!EventOutcome::from_handled(false).is_handled());
    }
}
