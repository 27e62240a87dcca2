use crate::layout::Layout;
use crate::pathway::{ActiveSet, NodeId, Style};
use ahash::AHashSet;

/// Formats the flowchart as an indented text outline for terminals.
///
/// The walk starts at the title node and follows the edge table in order.
/// Each line is marked `[*]` active, `[ ]` normal or `[-]` dimmed. A node
/// reached a second time (the chart is a DAG, not a tree) is printed once more
/// with `(see above)` instead of its children.
pub fn outline(layout: &Layout, active: &ActiveSet) -> String {
    let mut output = String::new();
    let mut visited = AHashSet::new();
    walk(layout, active, NodeId::Header, 0, &mut visited, &mut output);
    output
}

fn walk(
    layout: &Layout,
    active: &ActiveSet,
    id: NodeId,
    depth: usize,
    visited: &mut AHashSet<NodeId>,
    output: &mut String,
) {
    let marker = match active.style_of(id) {
        Style::Active => "[*]",
        Style::Normal => "[ ]",
        Style::Dimmed => "[-]",
    };
    let indent = "  ".repeat(depth);

    if !visited.insert(id) {
        output.push_str(&format!("{}{} {} (see above)\n", indent, marker, id.label()));
        return;
    }
    output.push_str(&format!("{}{} {}\n", indent, marker, id.label()));

    let children: Vec<NodeId> = layout
        .edges_from(id)
        .flat_map(|e| e.to.iter().copied())
        .collect();
    for child in children {
        walk(layout, active, child, depth + 1, visited, output);
    }
}
