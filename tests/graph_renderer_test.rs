//! Tests for the graph renderer module

use std::io::Cursor;

use lineage_lens::common::ConfigBuilder;
use lineage_lens::core::{AssetKind, EdgeKind};
use lineage_lens::detector::CycleDetector;
use lineage_lens::graph::{AssetNode, FlowEdge, GraphRenderer};
use petgraph::graph::{DiGraph, NodeIndex};

fn add_asset(graph: &mut DiGraph<AssetNode, FlowEdge>, id: &str, kind: AssetKind) -> NodeIndex {
    graph.add_node(
        AssetNode::builder()
            .with_id(id.to_string())
            .with_name(id.to_string())
            .with_kind(kind)
            .build()
            .unwrap(),
    )
}

fn add_flow(
    graph: &mut DiGraph<AssetNode, FlowEdge>,
    from: NodeIndex,
    to: NodeIndex,
    kind: EdgeKind,
) {
    let from_id = graph[from].id().to_string();
    let to_id = graph[to].id().to_string();
    graph.add_edge(
        from,
        to,
        FlowEdge::builder()
            .with_from_asset(&from_id)
            .with_to_asset(&to_id)
            .with_kind(kind)
            .with_inferred_by(None)
            .build()
            .unwrap(),
    );
}

/// A small warehouse with a reporting feedback loop
fn create_test_graph() -> DiGraph<AssetNode, FlowEdge> {
    let mut graph = DiGraph::new();

    let orders = add_asset(&mut graph, "dwh.orders", AssetKind::Table);
    let revenue = add_asset(&mut graph, "rpt.revenue", AssetKind::View);
    let loader = add_asset(&mut graph, "job.loader", AssetKind::Pipeline);
    let exports = add_asset(&mut graph, "ext.exports", AssetKind::File);

    add_flow(&mut graph, orders, revenue, EdgeKind::Data);
    add_flow(&mut graph, revenue, orders, EdgeKind::Data);
    add_flow(&mut graph, loader, orders, EdgeKind::Control);
    add_flow(&mut graph, revenue, exports, EdgeKind::Reference);

    graph
}

fn detect(graph: &DiGraph<AssetNode, FlowEdge>) -> CycleDetector {
    let mut detector = CycleDetector::new();
    detector.detect_cycles(graph).unwrap();
    detector
}

#[test]
fn test_render_ascii_marks_cycles() {
    let graph = create_test_graph();
    let detector = detect(&graph);
    assert!(detector.has_cycles());

    let renderer = GraphRenderer::new(true, false);
    let mut output = Cursor::new(Vec::new());
    renderer
        .render_ascii(&graph, detector.cycles(), &mut output)
        .unwrap();

    let text = String::from_utf8(output.into_inner()).unwrap();
    assert!(text.contains("Asset Lineage Graph"));
    assert!(text.contains("dwh.orders"));
    assert!(text.contains("IN CYCLE"));
    assert!(text.contains("Part of a dependency cycle"));
}

#[test]
fn test_render_ascii_without_highlighting() {
    let graph = create_test_graph();
    let detector = detect(&graph);

    let renderer = GraphRenderer::new(false, false);
    let mut output = Cursor::new(Vec::new());
    renderer
        .render_ascii(&graph, detector.cycles(), &mut output)
        .unwrap();

    let text = String::from_utf8(output.into_inner()).unwrap();
    assert!(!text.contains("IN CYCLE"));
}

#[test]
fn test_render_ascii_empty_graph() {
    let graph = DiGraph::new();

    let renderer = GraphRenderer::new(true, false);
    let mut output = Cursor::new(Vec::new());
    renderer.render_ascii(&graph, &[], &mut output).unwrap();

    let text = String::from_utf8(output.into_inner()).unwrap();
    assert!(text.contains("No assets found"));
}

#[test]
fn test_render_ascii_edge_details() {
    let graph = create_test_graph();

    let renderer = GraphRenderer::new(false, true);
    let mut output = Cursor::new(Vec::new());
    renderer.render_ascii(&graph, &[], &mut output).unwrap();

    let text = String::from_utf8(output.into_inner()).unwrap();
    assert!(text.contains("declared"));
    assert!(text.contains("(control)"));
}

#[test]
fn test_render_mermaid_structure() {
    let graph = create_test_graph();
    let detector = detect(&graph);

    let renderer = GraphRenderer::new(true, false);
    let mut output = Cursor::new(Vec::new());
    renderer
        .render_mermaid(&graph, detector.cycles(), &mut output)
        .unwrap();

    let text = String::from_utf8(output.into_inner()).unwrap();
    assert!(text.starts_with("graph TD"));
    assert!(text.contains("dwh_orders"));
    assert!(text.contains("linkStyle"));
    assert!(text.contains("subgraph Legend"));
    assert!(text.contains("Cycle Severity"));
}

#[test]
fn test_render_dot_structure() {
    let graph = create_test_graph();
    let detector = detect(&graph);

    let renderer = GraphRenderer::new(true, false);
    let mut output = Cursor::new(Vec::new());
    renderer
        .render_dot(&graph, detector.cycles(), &mut output)
        .unwrap();

    let text = String::from_utf8(output.into_inner()).unwrap();
    assert!(text.starts_with("digraph lineage {"));
    assert!(text.ends_with("}\n"));
    assert!(text.contains("\"dwh.orders\" -> \"rpt.revenue\""));
    assert!(text.contains("style=dashed"));
    assert!(text.contains("style=dotted"));
}

#[test]
fn test_render_d2_structure() {
    let graph = create_test_graph();
    let detector = detect(&graph);

    let renderer = GraphRenderer::new(true, false);
    let mut output = Cursor::new(Vec::new());
    renderer
        .render_d2(&graph, detector.cycles(), &mut output)
        .unwrap();

    let text = String::from_utf8(output.into_inner()).unwrap();
    assert!(text.contains("direction: right"));
    assert!(text.contains("dwh_orders -> rpt_revenue: data"));
    assert!(text.contains("job_loader -> dwh_orders: control"));
}

#[test]
fn test_cycle_edges_are_highlighted_only_on_cycle_pairs() {
    let graph = create_test_graph();
    let detector = detect(&graph);

    let renderer = GraphRenderer::new(true, false);
    let mut output = Cursor::new(Vec::new());
    renderer
        .render_dot(&graph, detector.cycles(), &mut output)
        .unwrap();

    let text = String::from_utf8(output.into_inner()).unwrap();

    // The control edge into the cycle is not itself part of the loop
    let loader_line = text
        .lines()
        .find(|l| l.contains("\"job.loader\" -> \"dwh.orders\""))
        .unwrap();
    assert!(!loader_line.contains("#FF6500"));

    let cycle_line = text
        .lines()
        .find(|l| l.contains("\"dwh.orders\" -> \"rpt.revenue\""))
        .unwrap();
    assert!(cycle_line.contains("#FF6500"));
}
