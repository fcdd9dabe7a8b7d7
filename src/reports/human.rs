//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::detector::{CycleDetector, CycleSeverity};
use crate::error::LineageLensError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, LineageLensError> {
        let mut output = String::new();

        if !detector.has_cycles() {
            write!(
                output,
                "\n{} No circular dependencies detected! Your lineage graph has a clean flow \
                 structure.\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        write!(
            output,
            "\n{} Found {} dependency {}:\n\n",
            style("❌").red().bold(),
            style(detector.cycle_count()).red().bold(),
            pluralize("cycle", detector.cycle_count())
        )?;

        let cycles_to_show = match self.max_cycles {
            Some(limit) => detector
                .cycles()
                .iter()
                .take(limit)
                .enumerate()
                .collect::<Vec<_>>(),
            None => detector.cycles().iter().enumerate().collect::<Vec<_>>(),
        };

        let total_cycles = detector.cycle_count();
        let showing_all = self.max_cycles.is_none_or(|limit| limit >= total_cycles);

        for (i, cycle) in cycles_to_show {
            let severity_badge = match cycle.severity() {
                CycleSeverity::High => style("HIGH").red().bold(),
                CycleSeverity::Medium => style("MEDIUM").yellow().bold(),
                CycleSeverity::Low => style("LOW").dim(),
            };

            writeln!(
                output,
                "{} Cycle #{} [{}]",
                style("🔄").yellow(),
                i + 1,
                severity_badge
            )?;
            writeln!(
                output,
                "  {} Path: {}",
                style("🧭").blue(),
                style(cycle.path().join(" → ")).bold()
            )?;

            writeln!(
                output,
                "\n  {} Edges creating this cycle:",
                style("🔗").cyan()
            )?;

            for edge in cycle.edges() {
                let provenance = match edge.inferred_by() {
                    Some(engine) => format!(", inferred by {engine}"),
                    None => String::new(),
                };
                writeln!(
                    output,
                    "    {} {} → {} ({}{})",
                    style("→").dim(),
                    style(edge.from_asset()).yellow(),
                    style(edge.to_asset()).yellow(),
                    style(edge.kind()).dim(),
                    style(provenance).dim()
                )?;
            }
            writeln!(output)?;
        }

        if !showing_all {
            writeln!(
                output,
                "\n{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(
                    self.max_cycles
                        .expect("max_cycles must be Some when !showing_all")
                )
                .yellow(),
                style(total_cycles).yellow()
            )?;
        }

        writeln!(
            output,
            "\n{} To break these cycles, you need to remove at least one edge from each cycle.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Consider materializing an intermediate dataset so both sides can read from it.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Start with high-severity cycles: pure data-flow loops break refresh ordering.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
