//! Declarative description of the flowchart.
//!
//! A [`Layout`] is plain data: a rectangle, fill category and text for every
//! pathway node, plus a routing for every connector. Nothing here is computed
//! from graph structure; the renderer only interprets the table.

mod standard;

pub use standard::standard;

use crate::error::LayoutError;
use crate::pathway::NodeId;
use ahash::AHashSet;

/// Axis-aligned box in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Base colour family of a node box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillCategory {
    /// Title and section headers.
    Header,
    /// The 72-hour review gate.
    Review,
    /// A clinical decision point.
    Decision,
    /// An action or recommendation.
    Action,
    /// Urgent or unstable pathway.
    Warning,
    /// Neutral call-outs such as "Liaise with ID".
    Neutral,
}

/// Text drawn inside a node box.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    /// A single label, word-wrapped to the box width.
    Label {
        text: &'static str,
        font_size: f32,
        bold: bool,
    },
    /// One line per bullet, the block centred vertically.
    Bullets {
        lines: &'static [&'static str],
        font_size: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub id: NodeId,
    pub rect: Rect,
    pub fill: FillCategory,
    pub content: NodeContent,
    pub dashed: bool,
}

/// Where the horizontal or vertical run of an elbow connector sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bend {
    /// Leave the source bottom, run across at this `y`, enter the target top.
    Horizontal(f32),
    /// Leave the source side facing this `x`, run down it, enter the target
    /// side facing it.
    Vertical(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route {
    /// Source bottom-centre to target top-centre.
    Straight,
    Elbow(Bend),
    /// A trunk from the source down to a shared rail at `y`, with one arrow
    /// dropping from the rail to each target.
    Bus { y: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: Vec<NodeId>,
    pub route: Route,
}

impl EdgeSpec {
    pub fn straight(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to: vec![to],
            route: Route::Straight,
        }
    }

    pub fn elbow(from: NodeId, to: NodeId, bend: Bend) -> Self {
        Self {
            from,
            to: vec![to],
            route: Route::Elbow(bend),
        }
    }

    pub fn bus(from: NodeId, y: f32, drops: &[NodeId]) -> Self {
        Self {
            from,
            to: drops.to_vec(),
            route: Route::Bus { y },
        }
    }
}

/// Position of the legend block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendPlacement {
    pub x: f32,
    pub y: f32,
    pub swatch_width: f32,
    pub swatch_height: f32,
    pub spacing: f32,
}

/// The complete, fixed canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
    pub legend: LegendPlacement,
}

impl Layout {
    pub fn node(&self, id: NodeId) -> Option<&NodeSpec> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Outgoing edges of `id`, in table order.
    pub fn edges_from(&self, id: NodeId) -> impl Iterator<Item = &EdgeSpec> {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Checks the table is self-consistent: unique node ids, every edge
    /// endpoint has a box, links have one target, buses at least one, and
    /// every box fits on the canvas.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = AHashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id) {
                return Err(LayoutError::DuplicateNode(node.id));
            }
            let r = node.rect;
            if r.x < 0.0 || r.y < 0.0 || r.right() > self.width || r.bottom() > self.height {
                return Err(LayoutError::OutOfCanvas {
                    node: node.id,
                    x: r.x,
                    y: r.y,
                    width: r.width,
                    height: r.height,
                    canvas_width: self.width,
                    canvas_height: self.height,
                });
            }
        }

        for edge in &self.edges {
            match edge.route {
                Route::Bus { .. } if edge.to.is_empty() => {
                    return Err(LayoutError::EmptyBus(edge.from));
                }
                Route::Straight | Route::Elbow(_) if edge.to.len() != 1 => {
                    return Err(LayoutError::LinkArity {
                        source_node: edge.from,
                        count: edge.to.len(),
                    });
                }
                _ => {}
            }
            for target in &edge.to {
                for endpoint in [edge.from, *target] {
                    if !seen.contains(&endpoint) {
                        return Err(LayoutError::MissingEndpoint {
                            source_node: edge.from,
                            target_node: *target,
                            missing: endpoint,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
