//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::LineageLensError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, LineageLensError> {
        let cycles: Vec<_> = detector
            .cycles()
            .iter()
            .map(|cycle| {
                let edges: Vec<_> = cycle
                    .edges()
                    .iter()
                    .map(|edge| {
                        json!({
                            "from_asset": edge.from_asset(),
                            "to_asset": edge.to_asset(),
                            "kind": edge.kind().to_string(),
                            "inferred_by": edge.inferred_by(),
                        })
                    })
                    .collect();

                json!({
                    "path": cycle.path(),
                    "assets": cycle.asset_ids(),
                    "length": cycle.len(),
                    "severity": cycle.severity().to_string(),
                    "edges": edges
                })
            })
            .collect();

        let report = json!({
            "has_cycles": detector.has_cycles(),
            "cycle_count": detector.cycle_count(),
            "cycles": cycles,
        });

        serde_json::to_string_pretty(&report).map_err(LineageLensError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::core::EdgeKind;
    use crate::detector::{AssetCycle, CycleDetector, CycleEdge};

    fn create_test_detector_with_cycles() -> CycleDetector {
        let mut detector = CycleDetector::new();

        // A simple cycle: dwh.orders -> rpt.revenue -> dwh.orders
        let cycle = AssetCycle::builder()
            .with_path(vec![
                "dwh.orders".to_string(),
                "rpt.revenue".to_string(),
                "dwh.orders".to_string(),
            ])
            .add_edge(CycleEdge::new(
                "dwh.orders",
                "rpt.revenue",
                EdgeKind::Data,
                None,
            ))
            .add_edge(CycleEdge::new(
                "rpt.revenue",
                "dwh.orders",
                EdgeKind::Reference,
                Some("profiler".to_string()),
            ))
            .build();

        detector.add_cycle(cycle);
        detector
    }

    #[test]
    fn test_json_report_no_cycles() {
        let detector = CycleDetector::new();
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], false);
        assert_eq!(json["cycle_count"], 0);
        assert_eq!(json["cycles"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_with_cycles() {
        let detector = create_test_detector_with_cycles();
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], true);
        assert_eq!(json["cycle_count"], 1);

        let cycles = json["cycles"].as_array().unwrap();
        assert_eq!(cycles.len(), 1);

        let cycle = &cycles[0];
        let path = cycle["path"].as_array().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), path.last());

        assert_eq!(cycle["length"], 2);
        assert_eq!(cycle["severity"], "medium");

        let edges = cycle["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_json_report_edge_structure() {
        let detector = create_test_detector_with_cycles();
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        let edge = &json["cycles"][0]["edges"][0];
        assert!(edge.get("from_asset").is_some());
        assert!(edge.get("to_asset").is_some());
        assert!(edge.get("kind").is_some());
        assert!(edge.get("inferred_by").is_some());

        let inferred = &json["cycles"][0]["edges"][1];
        assert_eq!(inferred["inferred_by"], "profiler");
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let detector = CycleDetector::new();
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();

        // Pretty formatted JSON should have newlines and indentation
        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }

    #[test]
    fn test_json_report_default_trait() {
        let generator1 = JsonReportGenerator;
        let generator2 = JsonReportGenerator::new();

        // Both should produce the same results
        let detector = CycleDetector::new();
        let report1 = generator1.generate_report(&detector).unwrap();
        let report2 = generator2.generate_report(&detector).unwrap();

        assert_eq!(report1, report2);
    }
}
