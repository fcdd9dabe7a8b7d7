//! Integration tests for lineage-lens using the library interface

use std::fs;
use std::path::Path;

use lineage_lens::catalog::CatalogAnalyzer;
use lineage_lens::detector::{CycleDetector, CycleSeverity};
use lineage_lens::graph::LineageGraphBuilder;
use lineage_lens::reports::{
    HumanReportGenerator, JsonReportGenerator, JunitReportGenerator, ReportGenerator,
};
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_snapshot(root: &Path, file: &str, content: &str) {
    fs::write(root.join(file), content).unwrap();
}

/// A healthy warehouse export: raw → staged → curated → reporting
fn create_acyclic_export(temp: &TempDir) {
    write_snapshot(
        temp.path(),
        "warehouse.lineage.json",
        r#"{
  "catalog": "warehouse",
  "assets": [
    { "id": "raw.events", "kind": "file", "zone": "landing" },
    { "id": "stg.events", "kind": "table", "zone": "staging" },
    { "id": "dwh.events", "kind": "table", "zone": "curated" },
    { "id": "job.load_events", "kind": "pipeline" }
  ],
  "edges": [
    { "source": "raw.events", "target": "stg.events" },
    { "source": "stg.events", "target": "dwh.events" },
    { "source": "job.load_events", "target": "stg.events", "kind": "control" }
  ]
}"#,
    );
    write_snapshot(
        temp.path(),
        "reporting.lineage.json",
        r#"{
  "catalog": "reporting",
  "assets": [
    { "id": "rpt.daily", "kind": "view" },
    { "id": "rpt.weekly", "kind": "view" }
  ],
  "edges": [
    { "source": "dwh.events", "target": "rpt.daily" },
    { "source": "dwh.events", "target": "rpt.weekly" }
  ]
}"#,
    );
}

/// An export where reporting feeds back into the warehouse
fn create_cyclic_export(temp: &TempDir) {
    write_snapshot(
        temp.path(),
        "warehouse.lineage.json",
        r#"{
  "catalog": "warehouse",
  "assets": [
    { "id": "dwh.orders", "kind": "table" },
    { "id": "dwh.enriched_orders", "kind": "table" }
  ],
  "edges": [
    { "source": "dwh.orders", "target": "rpt.revenue" },
    { "source": "dwh.enriched_orders", "target": "dwh.orders" }
  ]
}"#,
    );
    write_snapshot(
        temp.path(),
        "reporting.lineage.json",
        r#"{
  "catalog": "reporting",
  "assets": [
    { "id": "rpt.revenue", "kind": "view" }
  ],
  "edges": [
    { "source": "rpt.revenue", "target": "dwh.enriched_orders" }
  ]
}"#,
    );
}

fn detect_in(temp: &TempDir, exclude_control: bool) -> (LineageGraphBuilder, CycleDetector) {
    let mut analyzer = CatalogAnalyzer::new();
    analyzer
        .discover_catalogs(&[temp.path().to_path_buf()], None)
        .unwrap();

    let mut builder = LineageGraphBuilder::new(exclude_control, false, false);
    builder.build_asset_graph(analyzer.catalogs(), None).unwrap();

    let mut detector = CycleDetector::new();
    detector.detect_cycles(builder.graph()).unwrap();

    (builder, detector)
}

#[test]
fn test_acyclic_export_has_no_cycles() {
    let temp = TempDir::new().unwrap();
    create_acyclic_export(&temp);

    let (builder, detector) = detect_in(&temp, false);

    assert_eq!(builder.graph().node_count(), 6);
    assert_eq!(builder.graph().edge_count(), 5);
    assert_eq!(builder.skipped_edges(), 0);
    assert!(!detector.has_cycles());

    let report = HumanReportGenerator::new(None)
        .generate_report(&detector)
        .unwrap();
    assert!(predicate::str::contains("No circular dependencies detected").eval(&report));
}

#[test]
fn test_cross_catalog_cycle_is_detected() {
    let temp = TempDir::new().unwrap();
    create_cyclic_export(&temp);

    let (_, detector) = detect_in(&temp, false);

    assert_eq!(detector.cycle_count(), 1);
    let cycle = &detector.cycles()[0];
    assert_eq!(cycle.len(), 3);
    assert_eq!(cycle.path().first(), cycle.path().last());
    assert!(cycle.involves("dwh.orders"));
    assert!(cycle.involves("rpt.revenue"));
    assert!(cycle.involves("dwh.enriched_orders"));
    assert_eq!(cycle.severity(), CycleSeverity::High);
}

#[test]
fn test_human_report_lists_cycle_path() {
    let temp = TempDir::new().unwrap();
    create_cyclic_export(&temp);

    let (_, detector) = detect_in(&temp, false);
    let report = HumanReportGenerator::new(None)
        .generate_report(&detector)
        .unwrap();

    assert!(predicate::str::contains("Found").eval(&report));
    assert!(predicate::str::contains("dwh.orders").eval(&report));
    assert!(predicate::str::contains("→").eval(&report));
    assert!(predicate::str::contains("HIGH").eval(&report));
}

#[test]
fn test_json_report_round_trips() {
    let temp = TempDir::new().unwrap();
    create_cyclic_export(&temp);

    let (_, detector) = detect_in(&temp, false);
    let report = JsonReportGenerator::new()
        .generate_report(&detector)
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(parsed["has_cycles"], true);
    assert_eq!(parsed["cycle_count"], 1);
    assert_eq!(parsed["cycles"][0]["severity"], "high");
    assert_eq!(parsed["cycles"][0]["length"], 3);
}

#[test]
fn test_junit_report_marks_failure_on_cycles() {
    let temp = TempDir::new().unwrap();
    create_cyclic_export(&temp);

    let (_, detector) = detect_in(&temp, false);
    let report = JunitReportGenerator::new()
        .generate_report(&detector)
        .unwrap();

    assert!(predicate::str::contains(r#"failures="1""#).eval(&report));
    assert!(predicate::str::contains("check-lineage-cycles").eval(&report));
}

#[test]
fn test_control_edge_cycle_disappears_when_excluded() {
    let temp = TempDir::new().unwrap();
    write_snapshot(
        temp.path(),
        "ops.lineage.json",
        r#"{
  "catalog": "ops",
  "assets": [
    { "id": "job.refresh", "kind": "pipeline" },
    { "id": "dwh.metrics", "kind": "table" }
  ],
  "edges": [
    { "source": "job.refresh", "target": "dwh.metrics" },
    { "source": "dwh.metrics", "target": "job.refresh", "kind": "control" }
  ]
}"#,
    );

    let (_, detector) = detect_in(&temp, false);
    assert_eq!(detector.cycle_count(), 1);
    assert_eq!(detector.cycles()[0].severity(), CycleSeverity::Medium);

    let (_, detector) = detect_in(&temp, true);
    assert!(!detector.has_cycles());
}

#[test]
fn test_self_loop_in_snapshot_is_reported() {
    let temp = TempDir::new().unwrap();
    write_snapshot(
        temp.path(),
        "selfref.lineage.json",
        r#"{
  "catalog": "selfref",
  "assets": [ { "id": "dwh.running_totals", "kind": "table" } ],
  "edges": [
    { "source": "dwh.running_totals", "target": "dwh.running_totals" }
  ]
}"#,
    );

    let (_, detector) = detect_in(&temp, false);

    assert_eq!(detector.cycle_count(), 1);
    assert_eq!(
        detector.cycles()[0].path(),
        ["dwh.running_totals", "dwh.running_totals"]
    );
}

#[test]
fn test_dangling_edges_are_counted_not_fatal() {
    let temp = TempDir::new().unwrap();
    write_snapshot(
        temp.path(),
        "partial.lineage.json",
        r#"{
  "catalog": "partial",
  "assets": [ { "id": "dwh.orders", "kind": "table" } ],
  "edges": [
    { "source": "dwh.orders", "target": "rpt.not_exported" },
    { "source": "ext.unknown", "target": "dwh.orders" }
  ]
}"#,
    );

    let (builder, detector) = detect_in(&temp, false);

    assert_eq!(builder.skipped_edges(), 2);
    assert_eq!(builder.graph().edge_count(), 0);
    assert!(!detector.has_cycles());
}

#[test]
fn test_domain_level_cycle_detection() {
    let temp = TempDir::new().unwrap();
    create_cyclic_export(&temp);

    let mut analyzer = CatalogAnalyzer::new();
    analyzer
        .discover_catalogs(&[temp.path().to_path_buf()], None)
        .unwrap();

    let mut builder = LineageGraphBuilder::new(false, false, false);
    builder
        .build_domain_graph(analyzer.catalogs(), analyzer.asset_to_catalog(), None)
        .unwrap();

    let mut detector = CycleDetector::new();
    detector.detect_cycles(builder.graph()).unwrap();

    // warehouse → reporting → warehouse at domain granularity
    assert_eq!(detector.cycle_count(), 1);
    let cycle = &detector.cycles()[0];
    assert!(cycle.involves("warehouse"));
    assert!(cycle.involves("reporting"));
    assert_eq!(cycle.len(), 2);
}

#[test]
fn test_repeated_runs_are_identical() {
    let temp = TempDir::new().unwrap();
    create_cyclic_export(&temp);

    let (_, first) = detect_in(&temp, false);
    let (_, second) = detect_in(&temp, false);

    assert_eq!(first.cycles(), second.cycles());
}
