//! Trace command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::catalog::CatalogAnalyzer;
use crate::commands::deps::{AssetDependencyAnalysis, TraceReportGenerator};
use crate::config::TraceConfig;
use crate::executors::CommandExecutor;
use crate::graph::LineageGraphBuilder;
use crate::progress::ProgressReporter;

pub struct DepsExecutor;

impl CommandExecutor for DepsExecutor {
    type Config = TraceConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Tracing asset dependencies...\n", style("🔍").cyan());

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

        // Build lineage graph for dependency analysis
        let mut graph_builder = LineageGraphBuilder::new(
            config.exclude_control,
            config.exclude_reference,
            config.exclude_inferred,
        );

        graph_builder
            .build_asset_graph(analyzer.catalogs(), progress.as_ref())
            .wrap_err("Failed to build lineage graph")?;

        // Perform asset dependency analysis
        let mut analysis = AssetDependencyAnalysis::new(graph_builder.graph());

        // Generate report based on format and asset filter
        let report_generator = TraceReportGenerator::new(
            config.asset.as_deref(),
            config.reverse,
            config.transitive,
        );

        let report_result = match config.format {
            crate::cli::OutputFormat::Human => {
                report_generator.generate_human_report(&mut analysis)
            }
            crate::cli::OutputFormat::Json => report_generator.generate_json_report(&mut analysis),
            crate::cli::OutputFormat::Junit => {
                report_generator.generate_junit_report(&mut analysis)
            }
            crate::cli::OutputFormat::GitHub => {
                report_generator.generate_github_report(&mut analysis)
            }
        };

        match report_result {
            Ok(report) => println!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate asset dependency report");
            }
        }

        Ok(())
    }
}
