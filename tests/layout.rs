use neutropath::layout::{EdgeSpec, Rect, Route};
use neutropath::prelude::*;
use neutropath::render::svg::{escape_xml, fmt_num, wrap_text};

#[test]
fn test_standard_layout_is_valid() {
    let layout = standard_layout();
    assert_eq!(layout.validate(), Ok(()));
    assert_eq!(layout.width, 1000.0);
    assert_eq!(layout.height, 700.0);
}

#[test]
fn test_every_node_has_exactly_one_box() {
    let layout = standard_layout();
    assert_eq!(layout.nodes.len(), NodeId::ALL.len());
    for id in NodeId::ALL {
        assert_eq!(
            layout.nodes.iter().filter(|n| n.id == id).count(),
            1,
            "node {}",
            id
        );
    }
}

#[test]
fn test_every_node_reachable_from_title() {
    let layout = standard_layout();
    let text = outline(&layout, &ActiveSet::initial());
    for id in NodeId::ALL {
        assert!(text.contains(id.label()), "{} missing from outline", id);
    }
}

#[test]
fn test_boxes_do_not_overlap() {
    let layout = standard_layout();
    let overlaps = |a: &Rect, b: &Rect| {
        a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
    };
    for (i, a) in layout.nodes.iter().enumerate() {
        for b in &layout.nodes[i + 1..] {
            assert!(!overlaps(&a.rect, &b.rect), "{} overlaps {}", a.id, b.id);
        }
    }
}

#[test]
fn test_duplicate_node_rejected() {
    let mut layout = standard_layout();
    let copy = layout.nodes[3].clone();
    layout.nodes.push(copy);
    assert_eq!(
        layout.validate(),
        Err(LayoutError::DuplicateNode(NodeId::PersistentFever))
    );
}

#[test]
fn test_missing_endpoint_rejected() {
    let mut layout = standard_layout();
    layout.nodes.retain(|n| n.id != NodeId::LiaiseId);
    assert_eq!(
        layout.validate(),
        Err(LayoutError::MissingEndpoint {
            source_node: NodeId::MicroDefined,
            target_node: NodeId::LiaiseId,
            missing: NodeId::LiaiseId,
        })
    );
}

#[test]
fn test_out_of_canvas_rejected() {
    let mut layout = standard_layout();
    layout.nodes[0].rect = Rect::new(900.0, 10.0, 300.0, 36.0);
    assert!(matches!(
        layout.validate(),
        Err(LayoutError::OutOfCanvas { node: NodeId::Header, .. })
    ));
}

#[test]
fn test_empty_bus_rejected() {
    let mut layout = standard_layout();
    layout.edges.push(EdgeSpec::bus(NodeId::Header, 50.0, &[]));
    assert_eq!(layout.validate(), Err(LayoutError::EmptyBus(NodeId::Header)));
}

#[test]
fn test_link_arity_rejected() {
    let mut layout = standard_layout();
    layout.edges.push(EdgeSpec {
        from: NodeId::Header,
        to: vec![NodeId::Review72, NodeId::ResolvedFever],
        route: Route::Straight,
    });
    assert_eq!(
        layout.validate(),
        Err(LayoutError::LinkArity {
            source_node: NodeId::Header,
            count: 2,
        })
    );
}

#[test]
fn test_edges_from_in_table_order() {
    let layout = standard_layout();
    let targets: Vec<NodeId> = layout
        .edges_from(NodeId::PersistentFever)
        .flat_map(|e| e.to.iter().copied())
        .collect();
    assert_eq!(
        targets,
        vec![
            NodeId::ClinicallyStable,
            NodeId::ClinicallyUnstable,
            NodeId::RecurrentFever,
        ]
    );
}

#[test]
fn test_wrap_text_greedy() {
    // 10px glyphs, 50px line: five characters per line.
    let lines = wrap_text("aa bb cc dddddd e", 50.0, 10.0, 1.0);
    assert_eq!(lines, vec!["aa bb", "cc", "dddddd", "e"]);
}

#[test]
fn test_wrap_text_fits_on_one_line() {
    let lines = wrap_text("Stop antibiotics", 500.0, 9.0, 0.55);
    assert_eq!(lines, vec!["Stop antibiotics"]);
}

#[test]
fn test_wrap_text_empty_input() {
    assert_eq!(wrap_text("", 80.0, 9.0, 0.55), vec![""]);
    assert_eq!(wrap_text("   ", 80.0, 9.0, 0.55), vec!["   "]);
}

#[test]
fn test_escape_xml() {
    assert_eq!(
        escape_xml(r#"periph & central <cultures> "now""#),
        "periph &amp; central &lt;cultures&gt; &quot;now&quot;"
    );
    assert_eq!(escape_xml("plain"), "plain");
}

#[test]
fn test_fmt_num() {
    assert_eq!(fmt_num(1000.0), "1000");
    assert_eq!(fmt_num(7.5), "7.5");
    assert_eq!(fmt_num(2.5), "2.5");
    assert_eq!(fmt_num(2.3456), "2.35");
    assert_eq!(fmt_num(-3.0), "-3");
}
