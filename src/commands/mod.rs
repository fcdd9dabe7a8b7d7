//! Command implementations for the lineage-lens CLI
//!
//! This module contains the implementations for each CLI command:
//! - scan: Scan the lineage graph for circular dependencies
//! - focus: Focus on cycles involving a specific asset
//! - trace: Trace upstream and downstream dependencies of assets
//! - chart: Chart the lineage graph in a visual format
//! - impact: Estimate the impact of changing specific assets

pub mod affected;
pub mod analyze;
pub mod check;
pub mod deps;
pub mod graph;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Scan { .. } => check::execute_check_command(command),
        Commands::Chart { .. } => graph::execute_graph_command(command),
        Commands::Focus { .. } => analyze::execute_analyze_command(command),
        Commands::Trace { .. } => deps::execute_deps_command(command),
        Commands::Impact { .. } => affected::execute_affected_command(command),
    }
}
