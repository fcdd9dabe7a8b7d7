//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::LineageLensError;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, LineageLensError> {
        let mut output = String::new();

        if !detector.has_cycles() {
            writeln!(
                output,
                "::notice title=Lineage Check::No circular dependencies detected! ✅"
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Circular Dependencies::Found {} lineage cycle{}",
            detector.cycle_count(),
            if detector.cycle_count() == 1 { "" } else { "s" }
        )?;

        for (i, cycle) in detector.cycles().iter().enumerate() {
            writeln!(
                output,
                "::warning title=Cycle {} ({} severity)::{}",
                i + 1,
                cycle.severity(),
                cycle.path().join(" → ")
            )?;

            for edge in cycle.edges() {
                writeln!(
                    output,
                    "::notice::  {} → {} ({})",
                    edge.from_asset(),
                    edge.to_asset(),
                    edge.kind()
                )?;
            }
        }

        writeln!(
            output,
            "::notice title=Recommendation::To break these cycles, consider materializing an \
             intermediate dataset that both sides can read from."
        )?;

        Ok(output)
    }
}
