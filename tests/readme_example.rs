//! Example generation for README.md

use std::io::Cursor;

use lineage_lens::ConfigBuilder;
use lineage_lens::core::{AssetKind, EdgeKind};
use lineage_lens::detector::CycleDetector;
use lineage_lens::graph::{AssetNode, FlowEdge, GraphRenderer};
use lineage_lens::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use petgraph::graph::DiGraph;

#[test]
fn generate_readme_example() -> miette::Result<()> {
    // Create a graph representing a hypothetical warehouse export
    let mut graph = DiGraph::new();

    let raw_events = graph.add_node(
        AssetNode::builder()
            .with_id("raw.events".to_string())
            .with_name("events".to_string())
            .with_kind(AssetKind::File)
            .build()
            .unwrap(),
    );

    let stg_events = graph.add_node(
        AssetNode::builder()
            .with_id("stg.events".to_string())
            .with_name("events".to_string())
            .with_kind(AssetKind::Table)
            .build()
            .unwrap(),
    );

    let dwh_orders = graph.add_node(
        AssetNode::builder()
            .with_id("dwh.orders".to_string())
            .with_name("orders".to_string())
            .with_kind(AssetKind::Table)
            .build()
            .unwrap(),
    );

    let rpt_revenue = graph.add_node(
        AssetNode::builder()
            .with_id("rpt.revenue".to_string())
            .with_name("revenue".to_string())
            .with_kind(AssetKind::View)
            .build()
            .unwrap(),
    );

    let mut add_flow = |from, to, from_id: &str, to_id: &str, kind| {
        graph.add_edge(
            from,
            to,
            FlowEdge::builder()
                .with_from_asset(from_id)
                .with_to_asset(to_id)
                .with_kind(kind)
                .with_inferred_by(None)
                .build()
                .unwrap(),
        );
    };

    // Healthy flow plus one feedback edge that closes a loop
    add_flow(
        raw_events,
        stg_events,
        "raw.events",
        "stg.events",
        EdgeKind::Data,
    );
    add_flow(
        stg_events,
        dwh_orders,
        "stg.events",
        "dwh.orders",
        EdgeKind::Data,
    );
    add_flow(
        dwh_orders,
        rpt_revenue,
        "dwh.orders",
        "rpt.revenue",
        EdgeKind::Data,
    );
    add_flow(
        rpt_revenue,
        dwh_orders,
        "rpt.revenue",
        "dwh.orders",
        EdgeKind::Data,
    );

    // Detect the cycle
    let mut detector = CycleDetector::new();
    detector.detect_cycles(&graph)?;

    assert!(detector.has_cycles());
    assert_eq!(detector.cycle_count(), 1);
    assert_eq!(
        detector.cycles()[0].path(),
        ["dwh.orders", "rpt.revenue", "dwh.orders"]
    );

    // Generate the reports shown in the README
    let human = HumanReportGenerator::new(None)
        .generate_report(&detector)
        .unwrap();
    assert!(human.contains("dwh.orders"));

    let json = JsonReportGenerator::new()
        .generate_report(&detector)
        .unwrap();
    assert!(json.contains("\"cycle_count\": 1"));

    // And the Mermaid diagram
    let renderer = GraphRenderer::new(true, false);
    let mut output = Cursor::new(Vec::new());
    renderer.render_mermaid(&graph, detector.cycles(), &mut output)?;

    let mermaid = String::from_utf8(output.into_inner()).expect("mermaid output is UTF-8");
    assert!(mermaid.contains("rpt_revenue"));

    Ok(())
}
