//! Focus command executor

use console::style;
use miette::{Result, WrapErr};

use crate::catalog::CatalogAnalyzer;
use crate::cli::OutputFormat;
use crate::config::FocusAssetConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::LineageGraphBuilder;
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};

pub struct AnalyzeExecutor;

impl CommandExecutor for AnalyzeExecutor {
    type Config = FocusAssetConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Analyzing cycles involving asset '{}'...\n",
            style("🔍").cyan(),
            style(&config.asset_id).bold()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        // Discover and analyze catalogs
        let mut analyzer = CatalogAnalyzer::new();
        analyzer
            .discover_catalogs(&config.paths, progress.as_mut())
            .wrap_err("Failed to discover and analyze lineage snapshots")?;

        if analyzer.catalogs().is_empty() {
            eprintln!("{} No lineage snapshots found to analyze", style("ℹ").blue());
            return Ok(());
        }

        // Build lineage graph
        eprintln!("\n{} Building lineage graph...", style("🔨").blue());
        let mut graph_builder = LineageGraphBuilder::new(
            config.exclude_control,
            config.exclude_reference,
            config.exclude_inferred,
        );

        if config.domains {
            graph_builder
                .build_domain_graph(
                    analyzer.catalogs(),
                    analyzer.asset_to_catalog(),
                    progress.as_ref(),
                )
                .wrap_err("Failed to build domain-level lineage graph")?;
        } else {
            graph_builder
                .build_asset_graph(analyzer.catalogs(), progress.as_ref())
                .wrap_err("Failed to build asset-level lineage graph")?;
        }

        // Detect cycles
        if let Some(p) = progress.as_mut() {
            p.start_cycle_detection();
        }

        let mut detector = CycleDetector::new();
        detector
            .detect_cycles(graph_builder.graph())
            .wrap_err("Failed to detect dependency cycles")?;

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(detector.cycle_count());
        }

        // Filter cycles that involve the specified asset
        let relevant_cycles: Vec<_> = detector
            .cycles()
            .iter()
            .filter(|cycle| cycle.involves(&config.asset_id))
            .cloned()
            .collect();

        if relevant_cycles.is_empty() {
            eprintln!(
                "{} No cycles found involving asset '{}'",
                style("✓").green(),
                style(&config.asset_id).bold()
            );
            return Ok(());
        }

        eprintln!(
            "\n{} Found {} cycle(s) involving '{}':",
            style("⚠").yellow(),
            relevant_cycles.len(),
            style(&config.asset_id).bold()
        );

        // Report only the relevant cycles
        let mut filtered_detector = CycleDetector::new();
        for cycle in relevant_cycles {
            filtered_detector.add_cycle(cycle);
        }

        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(config.max_cycles);
                generator.generate_report(&filtered_detector)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new();
                generator.generate_report(&filtered_detector)
            }
            OutputFormat::Junit => {
                let generator = JunitReportGenerator::new();
                generator.generate_report(&filtered_detector)
            }
            OutputFormat::GitHub => {
                let generator = GitHubReportGenerator::new();
                generator.generate_report(&filtered_detector)
            }
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e).wrap_err("Failed to generate report for asset analysis");
            }
        }

        Ok(())
    }
}
