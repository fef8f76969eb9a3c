//! The application context: windows, global listeners and the input queue,
//! all owned explicitly instead of living in process-wide state.

use std::mem;

use slotmap::SlotMap;
use tracing::{debug, trace, warn};

use crate::{
    NodeId, WindowId,
    error::{Error, Result},
    event::{Event, InputEvent, mouse},
    geom::{Size, Vec2},
    queue::{EventQueue, EventSender},
    render::Canvas,
    widget::EventOutcome,
    world::Core,
};

/// A global listener sees every inbound event before any widget does.
/// Returning `true` consumes the event.
pub type GlobalListener = Box<dyn FnMut(WindowId, &InputEvent) -> bool + Send>;

/// A top-level window: a root box plus the pointer state the platform
/// reports for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// Root of the window's node tree, a vertical box.
    root: NodeId,
    /// DPI scale.
    scale: Vec2,
    /// True once the pointer has entered and until it leaves.
    pointer_inside: bool,
}

impl Window {
    /// Root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// DPI scale.
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// True while the pointer is inside the window.
    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }
}

/// Owns the node arena and everything that used to be global.
pub struct App {
    /// Node arena.
    core: Core,
    /// Open windows.
    windows: SlotMap<WindowId, Window>,
    /// Listeners that see input before routing.
    global_listeners: Vec<GlobalListener>,
    /// Input pushed from other threads.
    queue: EventQueue,
    /// Events drained by `poll_events` and not yet dispatched.
    pending: Vec<(WindowId, InputEvent)>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// An application with no windows.
    pub fn new() -> Self {
        Self {
            core: Core::new(),
            windows: SlotMap::with_key(),
            global_listeners: Vec::new(),
            queue: EventQueue::new(),
            pending: Vec::new(),
        }
    }

    /// The node arena.
    pub fn core(&self) -> &Core {
        &self.core
    }

    /// The node arena, mutably.
    pub fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Open a window with a vertical box as its root.
    pub fn create_window(&mut self, size: Size, scale: Vec2) -> Result<WindowId> {
        let root = self.core.vbox();
        self.core.set_name(root, "window")?;
        self.core.set_size(root, size)?;
        let id = self.windows.insert(Window {
            root,
            scale,
            pointer_inside: false,
        });
        debug!(?id, ?root, ?size, "window created");
        Ok(id)
    }

    /// Look a window up.
    pub fn window(&self, id: WindowId) -> Result<&Window> {
        self.windows.get(id).ok_or(Error::WindowNotFound(id))
    }

    /// Open windows.
    pub fn windows(&self) -> impl Iterator<Item = (WindowId, &Window)> {
        self.windows.iter()
    }

    /// Close a window and destroy its node tree.
    pub fn close_window(&mut self, id: WindowId) -> Result<()> {
        let window = self.windows.remove(id).ok_or(Error::WindowNotFound(id))?;
        self.core.remove_subtree(window.root)?;
        debug!(?id, "window closed");
        Ok(())
    }

    /// The platform resized the content area. The root box may end up larger
    /// than requested if its content does not fit.
    pub fn resize(&mut self, id: WindowId, size: Size, scale: Vec2) -> Result<()> {
        let window = self.windows.get_mut(id).ok_or(Error::WindowNotFound(id))?;
        window.scale = scale;
        let root = window.root;
        self.core.set_size(root, size)?;
        Ok(())
    }

    /// Min, current and max size of the window's root, for the platform to
    /// constrain the native window with.
    pub fn size_hints(&self, id: WindowId) -> Result<(Size, Size, Size)> {
        let root = self.window(id)?.root;
        let node = self.core.node(root).ok_or(Error::NodeNotFound(root))?;
        Ok((node.min_size(), node.size(), node.max_size()))
    }

    /// A handle for pushing input from other threads.
    pub fn sender(&self) -> EventSender {
        self.queue.sender()
    }

    /// Register a listener that sees every inbound event first.
    pub fn add_global_listener<F>(&mut self, f: F)
    where
        F: FnMut(WindowId, &InputEvent) -> bool + Send + 'static,
    {
        self.global_listeners.push(Box::new(f));
    }

    /// Move queued input into the pending list. Returns the number of events
    /// now pending.
    pub fn poll_events(&mut self) -> usize {
        self.pending.extend(self.queue.drain());
        self.pending.len()
    }

    /// Poll, then dispatch everything pending in arrival order. Events for
    /// windows that have since closed are dropped.
    pub fn handle_events(&mut self) -> Result<usize> {
        self.poll_events();
        let pending = mem::take(&mut self.pending);
        let count = pending.len();
        for (window, event) in pending {
            match self.dispatch_input(window, &event) {
                Err(Error::WindowNotFound(id)) => {
                    warn!(?id, ?event, "input for a closed window");
                }
                other => {
                    other?;
                }
            }
        }
        Ok(count)
    }

    /// Turn one inbound event into widget events on the window's root.
    pub fn dispatch_input(&mut self, id: WindowId, input: &InputEvent) -> Result<EventOutcome> {
        let root = self.window(id)?.root;
        if self.global_listeners.iter_mut().any(|l| l(id, input)) {
            trace!(?id, ?input, "consumed by global listener");
            return Ok(EventOutcome::Consume);
        }
        match input {
            InputEvent::Key(key) => self.core.dispatch(root, &Event::Key(*key)),
            InputEvent::MouseMove(pos) => {
                let entering = self
                    .windows
                    .get_mut(id)
                    .is_some_and(|w| !mem::replace(&mut w.pointer_inside, true));
                if entering {
                    self.core.dispatch(root, &Event::Enter)?;
                }
                self.core.dispatch(root, &Event::Hover(*pos))
            }
            InputEvent::MouseLeave => {
                if let Some(w) = self.windows.get_mut(id) {
                    w.pointer_inside = false;
                }
                self.core.dispatch(root, &Event::Leave)
            }
            InputEvent::MouseButton {
                button,
                action,
                pos,
            } => {
                let event = match action {
                    mouse::Action::Press => Event::Click {
                        button: *button,
                        pos: *pos,
                    },
                    mouse::Action::Release => Event::Release {
                        button: *button,
                        pos: *pos,
                    },
                };
                self.core.dispatch(root, &event)
            }
            InputEvent::Scroll { offset, pos } => self.core.dispatch(
                root,
                &Event::Scroll {
                    offset: *offset,
                    pos: *pos,
                },
            ),
            InputEvent::Resize { size, scale } => {
                self.resize(id, *size, *scale)?;
                Ok(EventOutcome::Handle)
            }
        }
    }

    /// True if anything in the window asked to be redrawn since the last draw.
    pub fn needs_redraw(&self, id: WindowId) -> Result<bool> {
        let root = self.window(id)?.root;
        Ok(self.core.node(root).is_some_and(|n| n.needs_draw()))
    }

    /// Paint the window.
    pub fn draw(&mut self, id: WindowId, canvas: &mut dyn Canvas) -> Result<()> {
        let root = self.window(id)?.root;
        self.core.draw(root, canvas)
    }
}
