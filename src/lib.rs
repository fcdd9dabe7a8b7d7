//! # Lineage Lens - Detect Circular Dependencies in Data Catalogs
//!
//! Lineage Lens is a tool for detecting circular dependencies in data
//! lineage graphs. It analyzes catalog lineage snapshot exports and
//! identifies dependency cycles that break refresh ordering and make
//! impact analysis unreliable.
//!
//! ## Main Components
//!
//! - **Catalog**: Discovers and analyzes lineage snapshots and their
//!   assets
//! - **Detector**: Implements cycle detection (depth-first traversal with
//!   path tracking)
//! - **Graph**: Builds and manages the lineage graph representation
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Real-World Example: Auditing a Catalog Export
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use lineage_lens::catalog::CatalogAnalyzer;
//! use lineage_lens::detector::CycleDetector;
//! use lineage_lens::graph::LineageGraphBuilder;
//! use lineage_lens::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Discover all lineage snapshots in your export directory
//! let mut analyzer = CatalogAnalyzer::new();
//! let export_root = PathBuf::from("/path/to/catalog/exports");
//! analyzer.discover_catalogs(&[export_root], None)?;
//!
//! println!("Found {} catalogs", analyzer.catalogs().len());
//!
//! // Step 2: Build the lineage graph
//! let mut graph_builder = LineageGraphBuilder::new(
//!     false, // include control edges
//!     false, // include reference edges
//!     false, // include inferred edges
//! );
//!
//! graph_builder.build_asset_graph(analyzer.catalogs(), None)?;
//!
//! // Step 3: Detect circular dependencies
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(graph_builder.graph())?;
//!
//! // Step 4: Generate reports
//! if detector.has_cycles() {
//!     println!("⚠️  Found {} circular dependencies!", detector.cycle_count());
//!
//!     // Human-readable report for console output
//!     let human_report = HumanReportGenerator::new(Some(5)); // show max 5 cycles
//!     println!("{}", human_report.generate_report(&detector)?);
//!
//!     // JSON report for programmatic processing
//!     let json_report = JsonReportGenerator::new();
//!     let json_output = json_report.generate_report(&detector)?;
//!     std::fs::write("cycles.json", json_output).into_diagnostic()?;
//! } else {
//!     println!("✅ No circular dependencies found!");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Detecting Cycles in a Plain Edge List
//!
//! ```
//! use lineage_lens::detector::CycleDetector;
//!
//! # fn main() -> miette::Result<()> {
//! // Edges derived from whatever lineage data the caller currently holds
//! let edges = vec![
//!     ("dwh.orders".to_string(), "rpt.revenue".to_string()),
//!     ("rpt.revenue".to_string(), "ml.features".to_string()),
//!     ("ml.features".to_string(), "dwh.orders".to_string()),
//! ];
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_in_edges(edges)?;
//!
//! assert_eq!(detector.cycle_count(), 1);
//! assert_eq!(
//!     detector.cycles()[0].path(),
//!     ["dwh.orders", "rpt.revenue", "ml.features", "dwh.orders"]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Visualizing the Lineage Graph
//!
//! ```no_run
//! use lineage_lens::graph::GraphRenderer;
//! use miette::IntoDiagnostic;
//! # use std::path::PathBuf;
//! # use lineage_lens::{
//! #     catalog::CatalogAnalyzer,
//! #     detector::CycleDetector,
//! #     graph::LineageGraphBuilder,
//! # };
//!
//! # fn main() -> miette::Result<()> {
//! # let mut analyzer = CatalogAnalyzer::new();
//! # analyzer.discover_catalogs(&[PathBuf::from(".")], None)?;
//! # let mut graph_builder = LineageGraphBuilder::new(false, false, false);
//! # graph_builder.build_asset_graph(analyzer.catalogs(), None)?;
//! # let mut detector = CycleDetector::new();
//! # detector.detect_cycles(graph_builder.graph())?;
//! // Create a visual representation of your lineage graph
//! let renderer = GraphRenderer::new(
//!     true,  // highlight cycles
//!     false, // don't show individual edge details
//! );
//!
//! // Generate a Mermaid diagram (great for documentation)
//! let mut mermaid_output = Vec::new();
//! renderer.render_mermaid(
//!     graph_builder.graph(),
//!     detector.cycles(),
//!     &mut mermaid_output,
//! )?;
//!
//! std::fs::write("lineage.mmd", mermaid_output).into_diagnostic()?;
//!
//! // Or generate a DOT file for Graphviz
//! let mut dot_output = Vec::new();
//! renderer.render_dot(graph_builder.graph(), detector.cycles(), &mut dot_output)?;
//!
//! std::fs::write("lineage.dot", dot_output).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Analyzing a Specific Asset
//!
//! ```no_run
//! # use std::path::PathBuf;
//! # use lineage_lens::{
//! #     catalog::CatalogAnalyzer,
//! #     detector::{AssetCycle, CycleDetector},
//! #     graph::LineageGraphBuilder,
//! # };
//! # fn main() -> miette::Result<()> {
//! # let mut analyzer = CatalogAnalyzer::new();
//! # analyzer.discover_catalogs(&[PathBuf::from(".")], None)?;
//! # let mut graph_builder = LineageGraphBuilder::new(false, false, false);
//! # graph_builder.build_asset_graph(analyzer.catalogs(), None)?;
//! # let mut detector = CycleDetector::new();
//! # detector.detect_cycles(graph_builder.graph())?;
//! // Find cycles involving a specific asset
//! let target_asset = "dwh.orders";
//!
//! let cycles_with_target: Vec<&AssetCycle> = detector
//!     .cycles()
//!     .iter()
//!     .filter(|cycle| cycle.involves(target_asset))
//!     .collect();
//!
//! println!(
//!     "Found {} cycles involving {}",
//!     cycles_with_target.len(),
//!     target_asset
//! );
//!
//! for (i, cycle) in cycles_with_target.iter().enumerate() {
//!     println!("\nCycle #{} ({} severity)", i + 1, cycle.severity());
//!     println!("Path: {}", cycle.path().join(" → "));
//!
//!     // Show the concrete edges composing the loop
//!     for edge in cycle.edges() {
//!         println!(
//!             "  {} → {} ({} edge)",
//!             edge.from_asset(),
//!             edge.to_asset(),
//!             edge.kind()
//!         );
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod edge_filter;
mod snapshot_discovery;
mod utils;

// Public modules
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod progress;
pub mod reports;
pub mod snapshot;

// Re-export for convenience
pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
