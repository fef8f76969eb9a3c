//! Headless walkthrough of the layout and routing core: build a window with a
//! row of boxes, feed it synthetic input from another thread, and print the
//! resulting tree.

use std::{io, str::FromStr, thread};

use anyhow::{Context as _, Result, anyhow};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trellis::{
    Align, App, Direction, EventOutcome, Props,
    dump,
    event::{EventKind, InputEvent, mouse},
    geom::{Color, Margin, Point, Size, Vec2},
    widget::Solid,
};

/// Stacking direction on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum DirArg {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
    /// Top to bottom.
    Ttb,
    /// Bottom to top.
    Btt,
}

impl From<DirArg> for Direction {
    fn from(d: DirArg) -> Self {
        match d {
            DirArg::Ltr => Self::LeftToRight,
            DirArg::Rtl => Self::RightToLeft,
            DirArg::Ttb => Self::TopToBottom,
            DirArg::Btt => Self::BottomToTop,
        }
    }
}

/// Child alignment on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlignArg {
    /// No flags.
    None,
    /// Leading edge.
    Start,
    /// Centered.
    Center,
    /// Trailing edge.
    End,
}

impl AlignArg {
    /// Flags for both axes.
    fn flags(self) -> Align {
        match self {
            Self::None => Align::empty(),
            Self::Start => Align::LEFT | Align::TOP,
            Self::Center => Align::CENTER,
            Self::End => Align::RIGHT | Align::BOTTOM,
        }
    }
}

/// CLI flags for the demo.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Direction of the content box.
    #[clap(short, long, value_enum, default_value = "ltr")]
    direction: DirArg,

    /// Window width.
    #[clap(long, default_value_t = 200)]
    width: u32,

    /// Window height.
    #[clap(long, default_value_t = 40)]
    height: u32,

    /// Number of children.
    #[clap(short = 'n', long, default_value_t = 3)]
    children: u32,

    /// Width of each child along the primary axis.
    #[clap(long, default_value_t = 50)]
    child_size: u32,

    /// Alignment applied to every child.
    #[clap(short, long, value_enum, default_value = "none")]
    align: AlignArg,

    /// Margin around every child.
    #[clap(short, long, default_value_t = 0)]
    margin: u32,

    /// Child colour, as #rrggbb.
    #[clap(long, default_value = "#3070c0")]
    color: String,

    /// Print the table view instead of the coloured tree.
    #[clap(short, long)]
    table: bool,

    /// Disable colour in the tree view.
    #[clap(long)]
    no_color: bool,
}

/// Run the demo.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let color = Color::from_str(&args.color).context("parsing --color")?;
    let direction = Direction::from(args.direction);

    let mut app = App::new();
    let window = app.create_window(Size::new(args.width, args.height), Vec2::ONE)?;
    let root = app.window(window)?.root();

    let core = app.core_mut();
    let content = core.create_box(direction);
    core.set_name(content, "content")?;
    core.add(root, content)?;
    core.set_size(content, Size::new(args.width, args.height))?;
    for i in 0..args.children {
        let child = core.create_leaf(Solid { color });
        let size = if direction.is_horizontal() {
            (args.child_size, args.height / 2)
        } else {
            (args.width / 2, args.child_size)
        };
        core.set_props(
            child,
            Props::new()
                .fixed()
                .size(size)
                .align(args.align.flags())
                .margin(Margin::uniform(args.margin))
                .name(&format!("child {i}")),
        )?;
        core.add_listener(child, EventKind::Click, move |id, event| {
            info!(?id, ?event, "child {i} clicked");
            true
        })?;
        core.add(content, child)?;
    }

    let (min, size, max) = app.size_hints(window)?;
    info!(?min, ?size, ?max, "size hints");

    let first = app
        .core()
        .children(content)
        .first()
        .copied()
        .context("no children to click")?;
    let target = app.core().absolute_rect(first)?.tl + Point::new(1, 1);

    let sender = app.sender();
    thread::spawn(move || {
        sender.send(window, InputEvent::MouseMove(target));
        sender.send(
            window,
            InputEvent::MouseButton {
                button: mouse::Button::Left,
                action: mouse::Action::Press,
                pos: target,
            },
        );
        sender.send(
            window,
            InputEvent::MouseButton {
                button: mouse::Button::Left,
                action: mouse::Action::Release,
                pos: target,
            },
        );
    })
    .join()
    .map_err(|_| anyhow!("input thread panicked"))?;

    let handled = app.handle_events()?;
    info!(handled, "dispatched queued input");
    let outcome = app.dispatch_input(window, &InputEvent::MouseLeave)?;
    if outcome == EventOutcome::Ignore {
        info!("pointer left the window");
    }

    let out = if args.table {
        dump::layout_table(app.core(), root)?
    } else if args.no_color {
        dump::dump_plain(app.core(), root)?
    } else {
        dump::dump(app.core(), root)?
    };
    println!("{out}");
    Ok(())
}
