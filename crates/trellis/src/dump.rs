use std::io::{self, Write};

use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{
    NodeId,
    error::{Error, Result},
    geom::Size,
    node::{Node, NodeKind},
    world::Core,
};

/// Map a buffer write failure.
fn io_err(e: io::Error) -> Error {
    Error::Invalid(format!("dump: {e}"))
}

/// Format a size as `w×h`.
fn fmt_size(s: Size) -> String {
    let axis = |v: u32| {
        if v == u32::MAX {
            "max".to_string()
        } else {
            v.to_string()
        }
    };
    format!("{}×{}", axis(s.w), axis(s.h))
}

/// Kind label, with the direction for boxes.
fn kind_label(node: &Node) -> String {
    match node.kind() {
        NodeKind::Box(b) => format!("{} {:?}", b.kind().label(), b.direction()),
        k => k.label().to_string(),
    }
}

/// Traverses a tree of nodes and returns an indented, coloured description of
/// every node's kind, name and geometry. This is a debug function.
pub fn dump(core: &Core, root: NodeId) -> Result<String> {
    let mut buffer = Buffer::ansi();
    dump_node(&mut buffer, core, root, 0)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// As [`dump`], without colour codes.
pub fn dump_plain(core: &Core, root: NodeId) -> Result<String> {
    let mut buffer = Buffer::no_color();
    dump_node(&mut buffer, core, root, 0)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Helper to write an indented, colored label followed by a value.
fn write_field(buffer: &mut Buffer, indent: &str, label: &str, value: &str) -> io::Result<()> {
    write!(buffer, "{indent}  ")?;
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(buffer, "{label}")?;
    buffer.reset()?;
    writeln!(buffer, " {value}")
}

/// Walk a node subtree and emit formatted debug output.
fn dump_node(buffer: &mut Buffer, core: &Core, id: NodeId, level: usize) -> Result<()> {
    let node = core.node(id).ok_or(Error::NodeNotFound(id))?;
    let indent = "    ".repeat(level);

    write!(buffer, "{indent}").map_err(io_err)?;
    buffer
        .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))
        .map_err(io_err)?;
    write!(buffer, "{}", node.name()).map_err(io_err)?;
    buffer.reset().map_err(io_err)?;
    buffer
        .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))
        .map_err(io_err)?;
    write!(buffer, " [{}]", kind_label(node)).map_err(io_err)?;
    buffer.reset().map_err(io_err)?;
    writeln!(buffer).map_err(io_err)?;

    let pos = node.position();
    write_field(buffer, &indent, "pos:", &format!("({}, {})", pos.x, pos.y)).map_err(io_err)?;
    write_field(buffer, &indent, "size:", &fmt_size(node.size())).map_err(io_err)?;
    write_field(
        buffer,
        &indent,
        "limits:",
        &format!("{} .. {}", fmt_size(node.min_size()), fmt_size(node.max_size())),
    )
    .map_err(io_err)?;

    for child in core.draw_order(id) {
        dump_node(buffer, core, child, level + 1)?;
    }
    Ok(())
}

/// Render one table row per node in the subtree: name, kind, absolute rect,
/// and limits.
pub fn layout_table(core: &Core, root: NodeId) -> Result<String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["node", "kind", "rect", "min", "max"]);

    let mut stack = vec![(root, 0usize)];
    while let Some((id, depth)) = stack.pop() {
        let node = core.node(id).ok_or(Error::NodeNotFound(id))?;
        let rect = core.absolute_rect(id)?;
        table.add_row(vec![
            Cell::new(format!("{}{}", "  ".repeat(depth), node.name()))
                .fg(comfy_table::Color::Green),
            Cell::new(kind_label(node)),
            Cell::new(format!("{},{} {}", rect.tl.x, rect.tl.y, fmt_size(rect.size()))),
            Cell::new(fmt_size(node.min_size())),
            Cell::new(fmt_size(node.max_size())),
        ]);
        for child in core.draw_order(id).into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    Ok(table.to_string())
}

/// Write [`layout_table`] to a writer.
pub fn print_layout_table(core: &Core, root: NodeId, w: &mut dyn Write) -> Result<()> {
    let table = layout_table(core, root)?;
    writeln!(w, "{table}").map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixed_leaf;

    #[test]
    fn plain_dump_shows_geometry() -> Result<()> {
        let mut core = Core::new();
        let row = core.hbox();
        let a = fixed_leaf(&mut core, 10, 5)?;
        core.set_name(a, "first")?;
        core.add(row, a)?;

        let out = dump_plain(&core, row)?;
        assert!(out.starts_with("hbox [hbox LeftToRight]\n"));
        assert!(out.contains("  size: 10×5\n"));
        assert!(out.contains("    first [leaf]\n"));
        assert!(out.contains("      limits: 0×0 .. max×max\n"));
        assert!(!out.contains('\u{1b}'));
        assert!(dump(&core, row)?.contains('\u{1b}'));
        Ok(())
    }

    #[test]
    fn table_has_a_row_per_node() -> Result<()> {
        let mut core = Core::new();
        let row = core.hbox();
        for _ in 0..3 {
            let leaf = fixed_leaf(&mut core, 4, 4)?;
            core.add(row, leaf)?;
        }
        let table = layout_table(&core, row)?;
        assert!(table.contains("hbox LeftToRight"));
        assert_eq!(table.matches("leaf").count(), 3);
        assert!(table.contains("8,0 4×4"));
        Ok(())
    }
}
