//! Renders a [`Layout`] as SVG, styled by an [`ActiveSet`].
//!
//! The renderer is an interpreter over the layout table: it never moves a box.
//! Its only decision is the per-element style from [`ActiveSet::style_of`] and
//! [`ActiveSet::edge_style`]: members are drawn active, non-members are dimmed
//! once the set holds more than the two header nodes, and everything is drawn
//! normally before that. A connector is active only when both its ends are.

pub mod config;
pub mod outline;
pub mod svg;

pub use config::{Palette, RenderConfig};
pub use outline::outline;

use crate::layout::{Bend, EdgeSpec, FillCategory, Layout, NodeContent, NodeSpec, Rect, Route};
use crate::pathway::{ActiveSet, NodeId, Style};
use log::debug;
use serde::Serialize;
use self::svg::{BoxPaint, MARKER_ACTIVE, MARKER_DIM, MARKER_NORMAL, SvgWriter, TextPaint};

/// Style assigned to one node box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderedNode {
    pub id: NodeId,
    pub style: Style,
}

/// Style assigned to one drawn connector. A bus contributes one entry per drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub style: Style,
}

/// The output of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorDiagram {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<RenderedNode>,
    pub edges: Vec<RenderedEdge>,
    #[serde(skip)]
    pub svg: String,
}

impl VectorDiagram {
    pub fn node_style(&self, id: NodeId) -> Option<Style> {
        self.nodes.iter().find(|n| n.id == id).map(|n| n.style)
    }

    pub fn count_nodes(&self, style: Style) -> usize {
        self.nodes.iter().filter(|n| n.style == style).count()
    }

    pub fn count_edges(&self, style: Style) -> usize {
        self.edges.iter().filter(|e| e.style == style).count()
    }

    pub fn as_svg(&self) -> &str {
        &self.svg
    }
}

/// Renders `active` over `layout` with the default configuration.
pub fn render(active: &ActiveSet, layout: &Layout) -> VectorDiagram {
    DiagramRenderer::new(layout).render(active)
}

/// Draws a layout table, styled by an active set.
pub struct DiagramRenderer<'a> {
    layout: &'a Layout,
    config: RenderConfig,
}

impl<'a> DiagramRenderer<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self, active: &ActiveSet) -> VectorDiagram {
        let layout = self.layout;
        let mut writer =
            SvgWriter::new(layout.width, layout.height, &self.config.palette.background);
        writer.markers(&self.config.palette);

        let edges = self.draw_edges(&mut writer, active);
        let nodes = self.draw_nodes(&mut writer, active);
        if self.config.show_legend {
            self.draw_legend(&mut writer);
        }

        let diagram = VectorDiagram {
            width: layout.width,
            height: layout.height,
            nodes,
            edges,
            svg: writer.finish(),
        };
        debug!(
            "Rendered {} nodes ({} active, {} dimmed) and {} connectors",
            diagram.nodes.len(),
            diagram.count_nodes(Style::Active),
            diagram.count_nodes(Style::Dimmed),
            diagram.edges.len()
        );
        diagram
    }

    fn draw_nodes(&self, writer: &mut SvgWriter, active: &ActiveSet) -> Vec<RenderedNode> {
        writer.group_open("nodes");
        let rendered = self
            .layout
            .nodes
            .iter()
            .map(|node| {
                let style = active.style_of(node.id);
                self.draw_node(writer, node, style);
                RenderedNode { id: node.id, style }
            })
            .collect();
        writer.group_close();
        rendered
    }

    fn draw_node(&self, writer: &mut SvgWriter, node: &NodeSpec, style: Style) {
        let cfg = &self.config;
        let palette = &cfg.palette;
        let base_fill = palette.fill_for(node.fill);
        let (fill, stroke, stroke_width, text_color) = match style {
            Style::Active => (
                base_fill,
                palette.active_stroke.as_str(),
                cfg.active_stroke_width,
                palette.text.as_str(),
            ),
            Style::Normal => (
                base_fill,
                palette.outline.as_str(),
                cfg.stroke_width,
                palette.text.as_str(),
            ),
            Style::Dimmed => (
                palette.dim_fill.as_str(),
                palette.dim_stroke.as_str(),
                cfg.stroke_width,
                palette.dim_text.as_str(),
            ),
        };
        let r = node.rect;
        writer.rect(
            r.x,
            r.y,
            r.width,
            r.height,
            cfg.corner_radius,
            &BoxPaint {
                fill,
                stroke,
                stroke_width,
                dashed: node.dashed,
            },
        );
        self.draw_content(writer, &r, &node.content, text_color);
    }

    fn draw_content(&self, writer: &mut SvgWriter, r: &Rect, content: &NodeContent, color: &str) {
        let cfg = &self.config;
        match content {
            NodeContent::Label {
                text,
                font_size,
                bold,
            } => {
                let lines = svg::wrap_text(text, r.width - 10.0, *font_size, cfg.char_width_factor);
                let line_h = font_size + cfg.line_padding;
                let start_y = r.y + (r.height - lines.len() as f32 * line_h) / 2.0 + font_size;
                let paint = TextPaint {
                    color,
                    font_family: &cfg.font_family,
                    font_size: *font_size,
                    bold: *bold,
                };
                for (i, line) in lines.iter().enumerate() {
                    writer.text(r.center_x(), start_y + i as f32 * line_h, line, "middle", &paint);
                }
            }
            NodeContent::Bullets { lines, font_size } => {
                let line_h = font_size + cfg.line_padding;
                let start_y = r.y + (r.height - lines.len() as f32 * line_h) / 2.0 + font_size;
                let paint = TextPaint {
                    color,
                    font_family: &cfg.font_family,
                    font_size: font_size - 1.0,
                    bold: false,
                };
                for (i, line) in lines.iter().enumerate() {
                    let bullet = format!("\u{2022} {}", line);
                    writer.text(r.x + 8.0, start_y + i as f32 * line_h, &bullet, "start", &paint);
                }
            }
        }
    }

    fn draw_edges(&self, writer: &mut SvgWriter, active: &ActiveSet) -> Vec<RenderedEdge> {
        let mut paths = Vec::new();
        for edge in &self.layout.edges {
            self.route_edge(edge, active, &mut paths);
        }

        // Active connectors go last so they sit on top of shared rails.
        let mut ordered: Vec<&EdgePath> = paths.iter().collect();
        ordered.sort_by_key(|p| p.style == Style::Active);

        writer.group_open("edges");
        for path in ordered {
            let (color, width, marker) = self.edge_paint(path.style);
            writer.polyline(&path.points, color, width, path.arrow.then_some(marker));
        }
        writer.group_close();

        paths
            .iter()
            .filter_map(|p| p.to.map(|to| RenderedEdge { from: p.from, to, style: p.style }))
            .collect()
    }

    fn route_edge(&self, edge: &EdgeSpec, active: &ActiveSet, out: &mut Vec<EdgePath>) {
        let Some(src) = self.layout.node(edge.from) else {
            return;
        };
        let s = src.rect;

        match edge.route {
            Route::Straight => {
                if let Some((to, d)) = self.first_target(edge) {
                    out.push(EdgePath::arrow(
                        edge.from,
                        to,
                        active.edge_style(edge.from, to),
                        vec![(s.center_x(), s.bottom()), (d.center_x(), d.y)],
                    ));
                }
            }
            Route::Elbow(Bend::Horizontal(y)) => {
                if let Some((to, d)) = self.first_target(edge) {
                    out.push(EdgePath::arrow(
                        edge.from,
                        to,
                        active.edge_style(edge.from, to),
                        vec![
                            (s.center_x(), s.bottom()),
                            (s.center_x(), y),
                            (d.center_x(), y),
                            (d.center_x(), d.y),
                        ],
                    ));
                }
            }
            Route::Elbow(Bend::Vertical(x)) => {
                if let Some((to, d)) = self.first_target(edge) {
                    let leave = if x < s.x { s.x } else { s.right() };
                    let enter = if x < d.x { d.x } else { d.right() };
                    out.push(EdgePath::arrow(
                        edge.from,
                        to,
                        active.edge_style(edge.from, to),
                        vec![
                            (leave, s.mid_y()),
                            (x, s.mid_y()),
                            (x, d.mid_y()),
                            (enter, d.mid_y()),
                        ],
                    ));
                }
            }
            Route::Bus { y } => {
                let drops: Vec<(NodeId, Rect)> = edge
                    .to
                    .iter()
                    .filter_map(|id| self.layout.node(*id).map(|n| (*id, n.rect)))
                    .collect();
                let trunk_style = if drops
                    .iter()
                    .any(|(id, _)| active.edge_style(edge.from, *id) == Style::Active)
                {
                    Style::Active
                } else if active.is_differentiated() {
                    Style::Dimmed
                } else {
                    Style::Normal
                };
                out.push(EdgePath {
                    from: edge.from,
                    to: None,
                    style: trunk_style,
                    points: vec![(s.center_x(), s.bottom()), (s.center_x(), y)],
                    arrow: false,
                });
                for (to, d) in drops {
                    out.push(EdgePath::arrow(
                        edge.from,
                        to,
                        active.edge_style(edge.from, to),
                        vec![(s.center_x(), y), (d.center_x(), y), (d.center_x(), d.y)],
                    ));
                }
            }
        }
    }

    fn first_target(&self, edge: &EdgeSpec) -> Option<(NodeId, Rect)> {
        let to = *edge.to.first()?;
        self.layout.node(to).map(|n| (to, n.rect))
    }

    fn edge_paint(&self, style: Style) -> (&str, f32, &'static str) {
        let cfg = &self.config;
        match style {
            Style::Active => (
                cfg.palette.active_stroke.as_str(),
                cfg.active_edge_width,
                MARKER_ACTIVE,
            ),
            Style::Normal => (cfg.palette.outline.as_str(), cfg.edge_width, MARKER_NORMAL),
            Style::Dimmed => (cfg.palette.dim_stroke.as_str(), cfg.edge_width, MARKER_DIM),
        }
    }

    fn draw_legend(&self, writer: &mut SvgWriter) {
        let cfg = &self.config;
        let palette = &cfg.palette;
        let legend = self.layout.legend;
        let outline = palette.outline.as_str();
        let entries = [
            ("Action / recommendation", palette.fill_for(FillCategory::Action), outline, cfg.stroke_width),
            ("Clinical decision point", palette.fill_for(FillCategory::Decision), outline, cfg.stroke_width),
            ("Urgent / unstable pathway", palette.fill_for(FillCategory::Warning), outline, cfg.stroke_width),
            ("Active pathway", palette.active_fill.as_str(), palette.active_stroke.as_str(), cfg.active_edge_width),
        ];

        writer.group_open("legend");
        let text = TextPaint {
            color: &palette.text,
            font_family: &cfg.font_family,
            font_size: 8.0,
            bold: false,
        };
        for (i, (caption, fill, stroke, stroke_width)) in entries.into_iter().enumerate() {
            let x = legend.x + i as f32 * (legend.swatch_width + legend.spacing);
            writer.rect(
                x,
                legend.y,
                legend.swatch_width,
                legend.swatch_height,
                3.0,
                &BoxPaint {
                    fill,
                    stroke,
                    stroke_width,
                    dashed: false,
                },
            );
            let baseline = legend.y + legend.swatch_height / 2.0 + 3.0;
            writer.text(x + legend.swatch_width / 2.0, baseline, caption, "middle", &text);
        }
        writer.group_close();
    }
}

/// A connector resolved to concrete points. Bus trunks carry no target.
struct EdgePath {
    from: NodeId,
    to: Option<NodeId>,
    style: Style,
    points: Vec<(f32, f32)>,
    arrow: bool,
}

impl EdgePath {
    fn arrow(from: NodeId, to: NodeId, style: Style, points: Vec<(f32, f32)>) -> Self {
        Self {
            from,
            to: Some(to),
            style,
            points,
            arrow: true,
        }
    }
}
