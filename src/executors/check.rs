//! Scan command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::catalog::CatalogAnalyzer;
use crate::cli::OutputFormat;
use crate::config::ScanCyclesConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::LineageGraphBuilder;
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = ScanCyclesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        if config.domains {
            eprintln!(
                "{} Scanning for domain-level dependency cycles...\n",
                style("🔭").cyan()
            );
        } else {
            eprintln!(
                "{} Scanning for asset-level dependency cycles...\n",
                style("🔭").cyan()
            );
        }

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
        let stats = analyzer.edge_stats();
        eprintln!("\n{} Building lineage graph...", style("🔨").blue());
        eprintln!(
            "  {} Edges discovered: {} data, {} control, {} reference ({} inferred)",
            style("→").dim(),
            stats.data,
            stats.control,
            stats.reference,
            stats.inferred
        );
        eprintln!(
            "  {} Exclude control edges: {}",
            style("→").dim(),
            if config.exclude_control {
                style("yes").red()
            } else {
                style("no").green()
            }
        );
        eprintln!(
            "  {} Exclude reference edges: {}",
            style("→").dim(),
            if config.exclude_reference {
                style("yes").red()
            } else {
                style("no").green()
            }
        );
        eprintln!(
            "  {} Exclude inferred edges: {}",
            style("→").dim(),
            if config.exclude_inferred {
                style("yes").red()
            } else {
                style("no").green()
            }
        );

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

        if graph_builder.skipped_edges() > 0 {
            eprintln!(
                "{} Skipped {} edge(s) referencing assets not declared in any snapshot",
                style("⚠").yellow(),
                graph_builder.skipped_edges()
            );
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

        // Generate report based on format
        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(config.max_cycles);
                generator.generate_report(&detector)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new();
                generator.generate_report(&detector)
            }
            OutputFormat::Junit => {
                let generator = JunitReportGenerator::new();
                generator.generate_report(&detector)
            }
            OutputFormat::GitHub => {
                let generator = GitHubReportGenerator::new();
                generator.generate_report(&detector)
            }
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && detector.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
